// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Metadata kinds.
//!
//! Codes must match the native feature metadata table. They are part of the
//! wire format and are never renumbered or reused.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::KIND_COUNT;
use crate::error::{MetadataError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum MetadataKind {
    Cuisine = 1,
    OpenHours = 2,
    PhoneNumber = 3,
    FaxNumber = 4,
    Stars = 5,
    Operator = 6,
    Url = 7,
    Website = 8,
    Internet = 9,
    Ele = 10,
    TurnLanes = 11,
    TurnLanesForward = 12,
    TurnLanesBackward = 13,
    Email = 14,
    Postcode = 15,
    /// Holds a full Wikipedia URL, not the raw `lang:title` tag.
    Wikipedia = 16,
    MaxSpeed = 17,
    Flats = 18,
    Height = 19,
    MinHeight = 20,
    Denomination = 21,
    BuildingLevels = 22,
}

impl MetadataKind {
    /// All kinds in code order.
    pub const ALL: [MetadataKind; KIND_COUNT] = [
        MetadataKind::Cuisine,
        MetadataKind::OpenHours,
        MetadataKind::PhoneNumber,
        MetadataKind::FaxNumber,
        MetadataKind::Stars,
        MetadataKind::Operator,
        MetadataKind::Url,
        MetadataKind::Website,
        MetadataKind::Internet,
        MetadataKind::Ele,
        MetadataKind::TurnLanes,
        MetadataKind::TurnLanesForward,
        MetadataKind::TurnLanesBackward,
        MetadataKind::Email,
        MetadataKind::Postcode,
        MetadataKind::Wikipedia,
        MetadataKind::MaxSpeed,
        MetadataKind::Flats,
        MetadataKind::Height,
        MetadataKind::MinHeight,
        MetadataKind::Denomination,
        MetadataKind::BuildingLevels,
    ];

    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            1 => Ok(MetadataKind::Cuisine),
            2 => Ok(MetadataKind::OpenHours),
            3 => Ok(MetadataKind::PhoneNumber),
            4 => Ok(MetadataKind::FaxNumber),
            5 => Ok(MetadataKind::Stars),
            6 => Ok(MetadataKind::Operator),
            7 => Ok(MetadataKind::Url),
            8 => Ok(MetadataKind::Website),
            9 => Ok(MetadataKind::Internet),
            10 => Ok(MetadataKind::Ele),
            11 => Ok(MetadataKind::TurnLanes),
            12 => Ok(MetadataKind::TurnLanesForward),
            13 => Ok(MetadataKind::TurnLanesBackward),
            14 => Ok(MetadataKind::Email),
            15 => Ok(MetadataKind::Postcode),
            16 => Ok(MetadataKind::Wikipedia),
            17 => Ok(MetadataKind::MaxSpeed),
            18 => Ok(MetadataKind::Flats),
            19 => Ok(MetadataKind::Height),
            20 => Ok(MetadataKind::MinHeight),
            21 => Ok(MetadataKind::Denomination),
            22 => Ok(MetadataKind::BuildingLevels),
            _ => Err(MetadataError::InvalidMetadataCode(code)),
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Zero-based slot used by fixed-size per-kind tables.
    pub(crate) fn index(self) -> usize {
        (self.code() - 1) as usize
    }

    /// Stable snake_case name, identical to the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            MetadataKind::Cuisine => "cuisine",
            MetadataKind::OpenHours => "open_hours",
            MetadataKind::PhoneNumber => "phone_number",
            MetadataKind::FaxNumber => "fax_number",
            MetadataKind::Stars => "stars",
            MetadataKind::Operator => "operator",
            MetadataKind::Url => "url",
            MetadataKind::Website => "website",
            MetadataKind::Internet => "internet",
            MetadataKind::Ele => "ele",
            MetadataKind::TurnLanes => "turn_lanes",
            MetadataKind::TurnLanesForward => "turn_lanes_forward",
            MetadataKind::TurnLanesBackward => "turn_lanes_backward",
            MetadataKind::Email => "email",
            MetadataKind::Postcode => "postcode",
            MetadataKind::Wikipedia => "wikipedia",
            MetadataKind::MaxSpeed => "max_speed",
            MetadataKind::Flats => "flats",
            MetadataKind::Height => "height",
            MetadataKind::MinHeight => "min_height",
            MetadataKind::Denomination => "denomination",
            MetadataKind::BuildingLevels => "building_levels",
        }
    }
}

impl TryFrom<i32> for MetadataKind {
    type Error = MetadataError;

    fn try_from(code: i32) -> Result<Self> {
        MetadataKind::from_code(code)
    }
}

impl From<MetadataKind> for i32 {
    fn from(kind: MetadataKind) -> Self {
        kind.code()
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not the name of any metadata kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown metadata kind name: {0}")]
pub struct UnknownKindName(pub String);

impl FromStr for MetadataKind {
    type Err = UnknownKindName;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        MetadataKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownKindName(s.to_string()))
    }
}

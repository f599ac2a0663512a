// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Metadata record definition.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::KIND_COUNT;
use crate::error::Result;
use crate::types::kind::MetadataKind;

/// Per-feature metadata: at most one string value per [`MetadataKind`].
///
/// Backed by one slot per kind, so lookups never hash and iteration is in
/// code order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<MetadataKind, String>",
    into = "BTreeMap<MetadataKind, String>"
)]
pub struct MetadataRecord {
    slots: [Option<String>; KIND_COUNT],
    len: usize,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    /// Stores `value` under `kind`, replacing any previous value.
    pub fn insert(&mut self, kind: MetadataKind, value: impl Into<String>) {
        let slot = &mut self.slots[kind.index()];
        if slot.is_none() {
            self.len += 1;
        }
        *slot = Some(value.into());
    }

    /// Like [`insert`](Self::insert), keyed by the raw wire code.
    pub fn insert_by_code(&mut self, code: i32, value: impl Into<String>) -> Result<()> {
        let kind = MetadataKind::from_code(code)?;
        self.insert(kind, value);
        Ok(())
    }

    pub fn get(&self, kind: MetadataKind) -> Option<&str> {
        self.slots[kind.index()].as_deref()
    }

    pub fn contains(&self, kind: MetadataKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Present entries in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (MetadataKind, &str)> + '_ {
        MetadataKind::ALL
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(kind, slot)| slot.as_deref().map(|value| (*kind, value)))
    }
}

impl Default for MetadataRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<(MetadataKind, String)> for MetadataRecord {
    fn extend<I: IntoIterator<Item = (MetadataKind, String)>>(&mut self, iter: I) {
        for (kind, value) in iter {
            self.insert(kind, value);
        }
    }
}

impl FromIterator<(MetadataKind, String)> for MetadataRecord {
    fn from_iter<I: IntoIterator<Item = (MetadataKind, String)>>(iter: I) -> Self {
        let mut record = MetadataRecord::new();
        record.extend(iter);
        record
    }
}

impl<'a> IntoIterator for &'a MetadataRecord {
    type Item = (MetadataKind, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (MetadataKind, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl From<BTreeMap<MetadataKind, String>> for MetadataRecord {
    fn from(map: BTreeMap<MetadataKind, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<MetadataRecord> for BTreeMap<MetadataKind, String> {
    fn from(record: MetadataRecord) -> Self {
        record
            .iter()
            .map(|(kind, value)| (kind, value.to_string()))
            .collect()
    }
}

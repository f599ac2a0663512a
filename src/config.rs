// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Smallest assigned metadata code.
pub const MIN_CODE: i32 = 1;

/// Largest assigned metadata code.
pub const MAX_CODE: i32 = 22;

/// Number of metadata kinds, and so the maximum entry count of a record.
pub const KIND_COUNT: usize = (MAX_CODE - MIN_CODE + 1) as usize;

/// Prefix shared with the translation layer for cuisine string names.
pub const CUISINE_TRANSLATION_PREFIX: &str = "cuisine_";

/// Separator between cuisines in the OSM `cuisine=*` tag.
pub const CUISINE_SEPARATOR: char = ';';

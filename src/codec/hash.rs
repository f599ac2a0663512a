// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record fingerprinting.

use crate::record::MetadataRecord;

/// BLAKE3 hash of the record contents.
///
/// Entries are fed in code order, so two records with the same pairs hash the
/// same no matter how they were built or in which order a peer encoded them.
///
/// ```text
/// count (u32 LE)
/// For each entry (ascending code):
///   code (i32 LE)
///   value length (u64 LE)
///   value bytes
/// ```
pub fn fingerprint(record: &MetadataRecord) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();

    hasher.update(&(record.len() as u32).to_le_bytes());
    for (kind, value) in record.iter() {
        hasher.update(&kind.code().to_le_bytes());
        hasher.update(&(value.len() as u64).to_le_bytes());
        hasher.update(value.as_bytes());
    }

    *hasher.finalize().as_bytes()
}

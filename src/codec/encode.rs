// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record encoding.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{MetadataError, Result};
use crate::record::MetadataRecord;

/// Bytes taken by the count prefix.
pub const COUNT_SIZE: usize = 4;

/// Fixed bytes per entry besides the value itself: code + length prefix.
pub const ENTRY_OVERHEAD: usize = 4 + 4;

/// Exact encoded size of `record`.
pub fn encoded_len(record: &MetadataRecord) -> usize {
    COUNT_SIZE
        + record
            .iter()
            .map(|(_, value)| ENTRY_OVERHEAD + value.len())
            .sum::<usize>()
}

/// Writes `record` to `writer`.
///
/// Fails with [`MetadataError::Io`] if the writer fails, or with
/// [`MetadataError::MalformedMetadataStream`] if a value is longer than
/// `u32::MAX` bytes and so cannot be length-prefixed.
pub fn encode_record_into<W: Write>(record: &MetadataRecord, writer: &mut W) -> Result<()> {
    writer.write_i32::<LittleEndian>(record.len() as i32)?;

    for (kind, value) in record.iter() {
        let len = u32::try_from(value.len()).map_err(|_| {
            MetadataError::malformed(format!("value for {} exceeds u32 length", kind))
        })?;
        writer.write_i32::<LittleEndian>(kind.code())?;
        writer.write_u32::<LittleEndian>(len)?;
        writer.write_all(value.as_bytes())?;
    }

    Ok(())
}

pub fn encode_record(record: &MetadataRecord) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(encoded_len(record));
    encode_record_into(record, &mut buf)?;
    tracing::trace!("Encoded {} metadata entries into {} bytes", record.len(), buf.len());
    Ok(buf)
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record decoding.
//!
//! Decoding is all-or-nothing: any defect fails the whole record.

use std::io::{self, Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{MetadataError, Result};
use crate::record::MetadataRecord;
use crate::types::kind::MetadataKind;

fn truncated(field: &str, e: io::Error) -> MetadataError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        MetadataError::malformed(format!("truncated while reading {}", field))
    } else {
        MetadataError::malformed(format!("read failed at {}: {}", field, e))
    }
}

fn read_i32<R: Read>(reader: &mut R, field: &str) -> Result<i32> {
    reader
        .read_i32::<LittleEndian>()
        .map_err(|e| truncated(field, e))
}

fn read_string<R: Read>(reader: &mut R) -> Result<String> {
    let len = reader
        .read_u32::<LittleEndian>()
        .map_err(|e| truncated("value length", e))? as u64;

    // Bounded read: a corrupt length must not drive the allocation size.
    let mut bytes = Vec::new();
    reader
        .by_ref()
        .take(len)
        .read_to_end(&mut bytes)
        .map_err(|e| truncated("value", e))?;
    if bytes.len() as u64 != len {
        return Err(MetadataError::malformed(format!(
            "value length {} but only {} bytes left",
            len,
            bytes.len()
        )));
    }

    String::from_utf8(bytes)
        .map_err(|e| MetadataError::malformed(format!("value is not UTF-8: {}", e)))
}

/// Reads one record from `reader`, leaving it positioned right after the record.
pub fn decode_record_from<R: Read>(reader: &mut R) -> Result<MetadataRecord> {
    let count = read_i32(reader, "entry count")?;
    if count < 0 {
        return Err(MetadataError::malformed(format!("negative entry count {}", count)));
    }

    let mut record = MetadataRecord::new();
    for _ in 0..count {
        let code = read_i32(reader, "metadata code")?;
        let kind = MetadataKind::from_code(code)?;
        let value = read_string(reader)?;
        // A repeated code overwrites, same as insert.
        record.insert(kind, value);
    }

    Ok(record)
}

/// Decodes a buffer holding exactly one record.
pub fn decode_record(buf: &[u8]) -> Result<MetadataRecord> {
    let mut cursor = Cursor::new(buf);
    let record = decode_record_from(&mut cursor).map_err(|e| {
        tracing::debug!("Rejected metadata buffer of {} bytes: {}", buf.len(), e);
        e
    })?;

    let consumed = cursor.position() as usize;
    if consumed != buf.len() {
        tracing::debug!("Rejected metadata buffer with {} trailing bytes", buf.len() - consumed);
        return Err(MetadataError::malformed(format!(
            "{} trailing bytes after record",
            buf.len() - consumed
        )));
    }

    tracing::trace!("Decoded {} metadata entries from {} bytes", record.len(), buf.len());
    Ok(record)
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    /// Integer does not name any metadata kind.
    #[error("Invalid metadata code: {0}")]
    InvalidMetadataCode(i32),

    /// Encoded record is truncated or otherwise inconsistent.
    #[error("Malformed metadata stream: {0}")]
    MalformedMetadataStream(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MetadataError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        MetadataError::MalformedMetadataStream(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, MetadataError>;

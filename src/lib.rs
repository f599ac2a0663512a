// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! poi-metadata: typed point-of-interest metadata attached to map features,
//! with a compact binary codec and cuisine tag helpers.

pub mod config;
pub mod error;
pub mod types;
pub mod record;
pub mod codec;
pub mod cuisine;

pub use error::{MetadataError, Result};
pub use record::MetadataRecord;
pub use types::kind::MetadataKind;

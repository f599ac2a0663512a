// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Binary record codec.
//!
//! ```text
//! count (i32 LE)
//! For each entry:
//!   code (i32 LE)
//!   value length in bytes (u32 LE)
//!   value (UTF-8)
//! ```
//!
//! No magic and no version tag: the layout is fixed by the peer that reads it.
pub mod encode;
pub mod decode;
pub mod hash;

pub use decode::{decode_record, decode_record_from};
pub use encode::{encode_record, encode_record_into};
pub use hash::fingerprint;

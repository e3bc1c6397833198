#![doc = include_str!("../README.md")]

mod bytes;
mod decoder;
mod error;
mod groups;

pub mod profile;
pub mod record;
pub mod sentinel;

pub use bytes::Cursor;
pub use decoder::{decode, Decoder};
pub use error::{Error, Result};
pub use profile::{Group, HeaderMode, Profile};
pub use record::Record;

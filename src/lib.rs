//! Insertion ordered HTTP header section.
//!
//! [`HeaderSection`][fields::HeaderSection] keeps header fields in the exact
//! order they were added, looks names up ASCII case insensitively, and
//! addresses entries by the identity issued at add time rather than by value
//! equality.
#![warn(missing_debug_implementations)]

pub use bytestr::ByteStr;

pub mod fields;

mod bytestr;
mod log;

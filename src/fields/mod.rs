//! Insertion ordered HTTP header section.
//!
//! [`HeaderSection`] keeps fields in the exact order added and looks names
//! up ASCII case insensitively. Entries are addressed by the [`FieldId`]
//! identity issued at [`add`], never by value equality, so duplicate fields
//! remain individually removable.
//!
//! [`add`]: HeaderSection::add
mod hash;
mod field;
mod chain;
mod iter;
mod section;
mod error;

pub use field::HeaderField;
pub use chain::FieldId;
pub use section::HeaderSection;
pub use iter::Iter;
pub use error::CopyError;

#[cfg(test)]
mod test;

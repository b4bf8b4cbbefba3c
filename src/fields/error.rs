//! Error types that can occur during header section operation.

/// An error returned from [`HeaderSection::copy_to`].
///
/// [`HeaderSection::copy_to`]: super::HeaderSection::copy_to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyError {
    /// Start index is outside the destination.
    OutOfRange,
    /// Destination remainder is smaller than the section.
    Capacity,
}

impl CopyError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::OutOfRange => "start index out of range",
            Self::Capacity => "destination capacity exceeded",
        }
    }
}

impl std::error::Error for CopyError {}
impl std::fmt::Display for CopyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

use crate::ByteStr;

use super::hash;

/// HTTP header field.
///
/// A single `name: value` line of a header section. Name and value are
/// immutable after construction; name case is stored as given and only
/// ignored on comparison.
#[derive(Clone)]
pub struct HeaderField {
    name: ByteStr,
    value: ByteStr,
}

impl HeaderField {
    /// Create new [`HeaderField`] from a name and value.
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<ByteStr>,
        V: Into<ByteStr>,
    {
        Self { name: name.into(), value: value.into() }
    }

    /// Create new [`HeaderField`] from static strs.
    ///
    /// There is no allocating or copying.
    pub const fn from_static(name: &'static str, value: &'static str) -> Self {
        Self {
            name: ByteStr::from_static(name),
            value: ByteStr::from_static(value),
        }
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the field value.
    #[inline]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Consume [`HeaderField`] into its name and value.
    #[inline]
    pub fn into_parts(self) -> (ByteStr, ByteStr) {
        (self.name, self.value)
    }
}

impl Default for HeaderField {
    /// Create [`HeaderField`] with empty name and value.
    #[inline]
    fn default() -> Self {
        Self { name: ByteStr::new(), value: ByteStr::new() }
    }
}

/// Fields are equal when the names match ASCII case insensitively and the
/// values match exactly.
///
/// Comparison against a possibly absent field follows [`Option`] semantics,
/// an absent field is equal only to another absent field.
impl PartialEq for HeaderField {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name) && self.value == other.value
    }
}

impl Eq for HeaderField {}

/// Writes the case folded name hash plus the exact value hash, consistent
/// with [`PartialEq`].
impl std::hash::Hash for HeaderField {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let name = hash::fold_case(self.name.as_bytes());
        let value = hash::exact(self.value.as_bytes());
        state.write_u64(name.wrapping_add(value));
    }
}

impl std::fmt::Display for HeaderField {
    /// Formats as a `Name: Value` line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

impl std::fmt::Debug for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderField")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

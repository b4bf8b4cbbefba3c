use bytes::Bytes;

/// A cheaply cloneable immutable str.
///
/// A [`Bytes`] backed string, the storage currency of header field text.
/// Cloning and [`slice_ref`][ByteStr::slice_ref] are `O(1)` and never copy.
#[derive(Clone)]
pub struct ByteStr {
    bytes: Bytes,
}

impl ByteStr {
    /// Create new empty `ByteStr`.
    ///
    /// This function does not allocate.
    pub const fn new() -> ByteStr {
        Self { bytes: Bytes::new() }
    }

    /// Create `ByteStr` pointing directly to a static str.
    ///
    /// There is no allocating or copying.
    pub const fn from_static(string: &'static str) -> ByteStr {
        Self { bytes: Bytes::from_static(string.as_bytes()) }
    }

    /// Converts a [`Bytes`] to a `ByteStr`, checking that it contains valid
    /// UTF-8.
    pub fn from_utf8(bytes: Bytes) -> Result<ByteStr, std::str::Utf8Error> {
        str::from_utf8(&bytes)?;
        Ok(Self { bytes })
    }

    /// Creates `ByteStr` from a str slice, by copying it.
    pub fn copy_from_str(string: &str) -> ByteStr {
        Self { bytes: Bytes::copy_from_slice(string.as_bytes()) }
    }

    /// Returns a slice str of self that is equivalent to the given `subset`.
    ///
    /// This operation is `O(1)`, the returned `ByteStr` shares the buffer.
    ///
    /// # Panics
    ///
    /// Requires that the given `subset` str is in fact contained within the
    /// `ByteStr` buffer; otherwise this function will panic.
    pub fn slice_ref(&self, subset: &str) -> ByteStr {
        Self { bytes: self.bytes.slice_ref(subset.as_bytes()) }
    }

    /// Extracts a string slice containing the entire `ByteStr`.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: every constructor checks utf8 and the buffer is immutable
        unsafe { str::from_utf8_unchecked(&self.bytes) }
    }

    /// Converts a `ByteStr` into a [`Bytes`].
    ///
    /// This consumes the `ByteStr`, so we do not need to copy its contents.
    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl std::ops::Deref for ByteStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for ByteStr {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Default for ByteStr {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ByteStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.as_str(), f)
    }
}

impl std::fmt::Debug for ByteStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq for ByteStr {
    fn eq(&self, other: &Self) -> bool {
        str::eq(self.as_str(), other.as_str())
    }
}

impl PartialEq<str> for ByteStr {
    fn eq(&self, other: &str) -> bool {
        str::eq(self.as_str(), other)
    }
}

impl PartialEq<&str> for ByteStr {
    fn eq(&self, other: &&str) -> bool {
        str::eq(self.as_str(), *other)
    }
}

impl From<&'static str> for ByteStr {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for ByteStr {
    fn from(value: String) -> Self {
        Self { bytes: Bytes::from(value.into_bytes()) }
    }
}

impl From<ByteStr> for Bytes {
    fn from(value: ByteStr) -> Self {
        value.into_bytes()
    }
}

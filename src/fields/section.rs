use crate::log::debug;

use super::{
    HeaderField,
    chain::{Chain, FieldId},
    error::CopyError,
    iter::Iter,
};

/// Insertion ordered HTTP header section.
///
/// Fields enumerate back in the exact order they were added, ready for
/// serialization as wire lines. Name lookup is ASCII case insensitive.
/// Every added field receives a [`FieldId`]; [`contains`], [`get`] and
/// [`remove`] key on that identity, so two structurally equal fields added
/// separately stay independent entries.
///
/// [`contains`]: HeaderSection::contains
/// [`get`]: HeaderSection::get
/// [`remove`]: HeaderSection::remove
#[derive(Clone)]
pub struct HeaderSection {
    chain: Chain,
}

impl Default for HeaderSection {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderSection {
    /// Create new empty [`HeaderSection`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { chain: Chain::new() }
    }

    /// Create new empty [`HeaderSection`] with at least the specified
    /// capacity.
    ///
    /// If the `capacity` is `0`, this function does not allocate.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { chain: Chain::with_capacity(capacity) }
    }

    /// Returns the number of fields.
    #[inline]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the section has no field.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chain.len() == 0
    }

    /// Returns the total number of fields the section can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.chain.capacity()
    }
}

// ===== Lookup =====

impl HeaderSection {
    /// Returns `true` if the field with this identity is present.
    ///
    /// This is identity, not equality: an id matches only the exact entry
    /// it was issued for by [`add`][HeaderSection::add], never another entry
    /// with an equal name and value.
    pub fn contains(&self, id: FieldId) -> bool {
        self.chain.position_of(id).is_some()
    }

    /// Returns `true` if any field name matches, ASCII case insensitively.
    #[inline]
    pub fn contains_name(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Returns the first field in insertion order whose name matches, ASCII
    /// case insensitively, along with its identity.
    pub fn find(&self, name: &str) -> Option<(FieldId, &HeaderField)> {
        for (id, field) in self.iter() {
            if field.name().eq_ignore_ascii_case(name) {
                return Some((id, field));
            }
        }
        None
    }

    /// Returns a reference to the field with this identity.
    pub fn get(&self, id: FieldId) -> Option<&HeaderField> {
        match self.chain.position_of(id) {
            Some(index) => Some(self.chain.node(index).field()),
            None => None,
        }
    }

    /// Returns an iterator over fields as identity and field pairs.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.chain)
    }
}

// ===== Mutation =====

impl HeaderSection {
    /// Appends a field at the end of the section.
    ///
    /// Returns the identity of the new entry. Duplicate names are allowed,
    /// every call creates a distinct entry.
    pub fn add(&mut self, field: HeaderField) -> FieldId {
        self.chain.push_back(field)
    }

    /// Removes the field with this identity.
    ///
    /// Returns `true` if it was present. A second remove with the same id
    /// returns `false`, ids are never reissued.
    pub fn remove(&mut self, id: FieldId) -> bool {
        match self.chain.position_of(id) {
            Some(index) => {
                self.chain.unlink(index);
                true
            }
            None => false,
        }
    }

    /// Clear the section, removing all fields.
    ///
    /// The allocated capacity is kept. Ids issued before the clear match
    /// nothing afterwards.
    pub fn clear(&mut self) {
        debug!("clearing {} header fields", self.len());
        self.chain.clear();
    }
}

// ===== Copying =====

impl HeaderSection {
    /// Clones every field into `dst` in insertion order, starting at
    /// `start`.
    ///
    /// Nothing is written unless both bound checks pass.
    ///
    /// # Errors
    ///
    /// [`CopyError::OutOfRange`] if `start` is not a valid index of `dst`,
    /// even when the section is empty. [`CopyError::Capacity`] if fewer
    /// than [`len`][HeaderSection::len] slots remain from `start`.
    pub fn copy_to(&self, dst: &mut [HeaderField], start: usize) -> Result<(), CopyError> {
        if start >= dst.len() {
            return Err(CopyError::OutOfRange);
        }
        if dst.len() - start < self.len() {
            return Err(CopyError::Capacity);
        }

        let mut at = start;
        for (_, field) in self.iter() {
            dst[at] = field.clone();
            at += 1;
        }

        Ok(())
    }
}

impl std::fmt::Debug for HeaderSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(_, field)| (field.name(), field.value())))
            .finish()
    }
}

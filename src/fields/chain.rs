use std::{mem::replace, num::NonZeroU64};

use super::HeaderField;

type Size = u32;

/// Identity of one added field.
///
/// Issued by [`HeaderSection::add`], monotonically increasing and never
/// reissued, not even across [`clear`]. Ids are only meaningful against the
/// section that issued them or its clones.
///
/// [`HeaderSection::add`]: super::HeaderSection::add
/// [`clear`]: super::HeaderSection::clear
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(NonZeroU64);

/// Doubly linked cell in the chain arena.
///
/// Links are slot indices and `prev` is a pure back reference; link fields
/// are written only through [`Chain::connect`] and [`Chain::disconnect`].
#[derive(Clone, Debug)]
pub(super) struct Node {
    id: FieldId,
    field: HeaderField,
    prev: Option<Size>,
    next: Option<Size>,
}

impl Node {
    #[inline]
    pub(super) const fn id(&self) -> FieldId {
        self.id
    }

    #[inline]
    pub(super) const fn field(&self) -> &HeaderField {
        &self.field
    }

    #[inline]
    pub(super) const fn next(&self) -> Option<Size> {
        self.next
    }

    const fn is_first(&self) -> bool {
        self.prev.is_none()
    }

    const fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

#[derive(Clone, Debug)]
enum Slot {
    Occupied(Node),
    /// Free slot holding the next free list index.
    Vacant(Option<Size>),
}

/// Arena backed doubly linked chain of header fields.
///
/// Insertion order is carried by the links, not by slot order; released
/// slots are reused through an intrusive free list.
#[derive(Clone, Debug)]
pub(super) struct Chain {
    slots: Vec<Slot>,
    head: Option<Size>,
    tail: Option<Size>,
    free: Option<Size>,
    len: usize,
    seq: NonZeroU64,
}

impl Chain {
    pub(super) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
            seq: NonZeroU64::MIN,
        }
    }

    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity), ..Self::new() }
    }

    #[inline]
    pub(super) const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(super) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[inline]
    pub(super) const fn head(&self) -> Option<Size> {
        self.head
    }

    #[inline]
    pub(super) const fn tail(&self) -> Option<Size> {
        self.tail
    }

    pub(super) fn node(&self, index: Size) -> &Node {
        match &self.slots[index as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("vacant slot {index} in chain walk"),
        }
    }

    fn node_mut(&mut self, index: Size) -> &mut Node {
        match &mut self.slots[index as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("vacant slot {index} in chain walk"),
        }
    }

    /// Walks the chain from the head looking for this identity.
    pub(super) fn position_of(&self, id: FieldId) -> Option<Size> {
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let node = self.node(index);
            if node.id == id {
                return Some(index);
            }
            cursor = node.next;
        }

        None
    }
}

// ===== Link Surgery =====

impl Chain {
    /// Links `left` to `right` on both sides.
    fn connect(&mut self, left: Size, right: Size) {
        debug_assert!(self.node(left).is_last());
        debug_assert!(self.node(right).is_first());

        self.node_mut(left).next = Some(right);
        self.node_mut(right).prev = Some(left);
    }

    /// Severs the link from a node to its successor, clearing both sides.
    ///
    /// # Panics
    ///
    /// Panics if the node has no successor.
    fn disconnect(&mut self, index: Size) {
        let next = match self.node(index).next {
            Some(next) => next,
            None => panic!("disconnect on a node without successor"),
        };

        self.node_mut(index).next = None;
        self.node_mut(next).prev = None;
    }

    /// Appends a field behind the tail, returning its new identity.
    pub(super) fn push_back(&mut self, field: HeaderField) -> FieldId {
        let id = FieldId(self.seq);
        self.seq = self.seq.checked_add(1).unwrap();

        let index = self.alloc(Node { id, field, prev: None, next: None });

        match self.tail {
            Some(tail) => self.connect(tail, index),
            None => self.head = Some(index),
        }

        self.tail = Some(index);
        self.len += 1;
        id
    }

    /// Takes the node at `index` out of the chain, releasing its slot.
    pub(super) fn unlink(&mut self, index: Size) -> HeaderField {
        let node = self.node(index);

        match (node.prev, node.next) {
            // sole node, the chain becomes empty
            (None, None) => {
                self.head = None;
                self.tail = None;
            }
            // head node, the successor takes over as head
            (None, Some(next)) => {
                self.disconnect(index);
                self.head = Some(next);
            }
            // tail node, severed on the predecessor side
            (Some(prev), None) => {
                self.disconnect(prev);
                self.tail = Some(prev);
            }
            // interior node, the neighbors are joined directly
            (Some(prev), Some(next)) => {
                self.disconnect(prev);
                self.disconnect(index);
                self.connect(prev, next);
            }
        }

        self.len -= 1;
        self.release(index).field
    }

    /// Drops every node and link, keeping the slot allocation.
    pub(super) fn clear(&mut self) {
        // `seq` is kept, a stale id must never match a later field
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    fn alloc(&mut self, node: Node) -> Size {
        match self.free {
            Some(index) => {
                let slot = replace(&mut self.slots[index as usize], Slot::Occupied(node));
                let Slot::Vacant(next_free) = slot else {
                    unreachable!("occupied slot {index} in free list")
                };
                self.free = next_free;
                index
            }
            None => {
                debug_assert!(self.slots.len() < Size::MAX as usize);
                let index = self.slots.len() as Size;
                self.slots.push(Slot::Occupied(node));
                index
            }
        }
    }

    fn release(&mut self, index: Size) -> Node {
        let slot = replace(&mut self.slots[index as usize], Slot::Vacant(self.free));
        self.free = Some(index);
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("release of vacant slot {index}"),
        }
    }
}

#[cfg(test)]
impl Chain {
    /// Walks the chain both ways and the free list, checking every link.
    pub(super) fn assert_links(&self) {
        let mut count = 0;
        let mut prev: Option<Size> = None;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let node = self.node(index);
            assert_eq!(node.prev, prev, "broken back reference at slot {index}");
            count += 1;
            assert!(count <= self.len, "cycle through slot {index}");
            prev = Some(index);
            cursor = node.next;
        }

        assert_eq!(prev, self.tail);
        assert_eq!(count, self.len);

        let mut vacant = 0;
        let mut free = self.free;

        while let Some(index) = free {
            let Slot::Vacant(next_free) = &self.slots[index as usize] else {
                panic!("occupied slot {index} in free list");
            };
            vacant += 1;
            assert!(vacant <= self.slots.len(), "cycle in free list");
            free = *next_free;
        }

        assert_eq!(self.slots.len(), self.len + vacant);
    }
}

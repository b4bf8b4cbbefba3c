use super::{
    HeaderField, HeaderSection,
    chain::{Chain, FieldId},
};

type Size = u32;

impl<'a> IntoIterator for &'a HeaderSection {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over the fields of a [`HeaderSection`] in insertion order.
///
/// The chain boundaries are captured once at creation. The cursor borrows
/// the section, so the section cannot be mutated while any cursor is live
/// and the captured boundaries never go stale.
pub struct Iter<'a> {
    chain: &'a Chain,
    head: Option<Size>,
    tail: Option<Size>,
    state: State,
}

/// Cursor position, tagged explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    NotStarted,
    At(Size),
    Done,
}

impl<'a> Iter<'a> {
    pub(super) fn new(chain: &'a Chain) -> Self {
        Self {
            chain,
            head: chain.head(),
            tail: chain.tail(),
            state: State::NotStarted,
        }
    }

    /// Moves the cursor to the next field, returning `false` once the
    /// captured chain is exhausted.
    ///
    /// Over an empty capture this returns `false` right away and the cursor
    /// never leaves its initial position.
    pub fn advance(&mut self) -> bool {
        match self.state {
            State::NotStarted => match self.head {
                Some(head) => {
                    self.state = State::At(head);
                    true
                }
                None => false,
            },
            State::At(index) if Some(index) == self.tail => {
                self.state = State::Done;
                false
            }
            State::At(index) => match self.chain.node(index).next() {
                Some(next) => {
                    self.state = State::At(next);
                    true
                }
                None => {
                    self.state = State::Done;
                    false
                }
            },
            State::Done => false,
        }
    }

    /// Returns the identity and field under the cursor.
    ///
    /// `None` before the first [`advance`] and after exhaustion.
    ///
    /// [`advance`]: Iter::advance
    pub fn current(&self) -> Option<(FieldId, &'a HeaderField)> {
        match self.state {
            State::At(index) => {
                let node = self.chain.node(index);
                Some((node.id(), node.field()))
            }
            State::NotStarted | State::Done => None,
        }
    }

    /// Rewinds the cursor to before the first field.
    ///
    /// The boundaries captured at creation are kept, so the cursor replays
    /// the same sequence.
    #[inline]
    pub fn reset(&mut self) {
        self.state = State::NotStarted;
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (FieldId, &'a HeaderField);

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() { self.current() } else { None }
    }
}

impl std::fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(Self {
                chain: self.chain,
                head: self.head,
                tail: self.tail,
                state: self.state,
            })
            .finish()
    }
}

#[cfg(test)]
mod test {
    use crate::fields::{HeaderField, HeaderSection};

    #[test]
    fn cursor_states() {
        let mut section = HeaderSection::new();
        section.add(HeaderField::from_static("Host", "example.com"));
        section.add(HeaderField::from_static("Accept", "*/*"));

        let mut iter = section.iter();
        assert!(iter.current().is_none());

        assert!(iter.advance());
        assert_eq!(iter.current().map(|(_, f)| f.name()), Some("Host"));

        assert!(iter.advance());
        assert_eq!(iter.current().map(|(_, f)| f.name()), Some("Accept"));

        assert!(!iter.advance());
        assert!(iter.current().is_none());
        assert!(!iter.advance());
    }

    #[test]
    fn empty_capture_never_advances() {
        let section = HeaderSection::new();
        let mut iter = section.iter();

        assert!(!iter.advance());
        assert!(!iter.advance());
        assert!(iter.current().is_none());
    }

    #[test]
    fn reset_replays_the_sequence() {
        let mut section = HeaderSection::new();
        section.add(HeaderField::from_static("A", "1"));
        section.add(HeaderField::from_static("B", "2"));

        let mut iter = section.iter();
        let first: Vec<_> = iter.by_ref().map(|(_, f)| f.name().to_owned()).collect();
        iter.reset();
        let second: Vec<_> = iter.map(|(_, f)| f.name().to_owned()).collect();

        assert_eq!(first, ["A", "B"]);
        assert_eq!(first, second);
    }
}

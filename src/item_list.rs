//! Item List - An insertion-ordered list of catalog items.
//!
//! Implements a doubly-linked list using arena indices for O(1)
//! append and removal from an arbitrary position. The same node can be
//! threaded through two lists at once: the catalog's master list and its
//! category's list, each using its own `Link`.

use crate::arena::{Arena, ArenaIndex, Link, NULL_INDEX};

/// Which set of links on an `ItemNode` a list threads through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// The catalog's master list
    Master,
    /// A category node's list
    Category,
}

impl LinkKind {
    #[inline]
    fn of(self, arena: &Arena, index: ArenaIndex) -> Link {
        let node = arena.get(index);
        match self {
            LinkKind::Master => node.master,
            LinkKind::Category => node.category,
        }
    }

    #[inline]
    fn of_mut(self, arena: &mut Arena, index: ArenaIndex) -> &mut Link {
        let node = arena.get_mut(index);
        match self {
            LinkKind::Master => &mut node.master,
            LinkKind::Category => &mut node.category,
        }
    }
}

/// A list of items in insertion order.
#[derive(Clone, Copy, Debug)]
pub struct ItemList {
    /// Index of the oldest item
    pub(crate) head: ArenaIndex,
    /// Index of the newest item
    pub(crate) tail: ArenaIndex,
    /// Number of items in the list
    pub(crate) count: u32,
    /// Link set this list uses
    kind: LinkKind,
}

impl ItemList {
    /// Create a new empty list over the given link set
    #[inline]
    pub const fn new(kind: LinkKind) -> Self {
        Self {
            head: NULL_INDEX,
            tail: NULL_INDEX,
            count: 0,
            kind,
        }
    }

    /// Returns true if the list holds no items
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.count as usize
    }

    /// Append an item to the tail of the list.
    ///
    /// # Complexity
    /// O(1)
    pub(crate) fn push_back(&mut self, arena: &mut Arena, index: ArenaIndex) {
        let kind = self.kind;

        if self.tail == NULL_INDEX {
            // Empty list: new node becomes both head and tail
            debug_assert!(self.head == NULL_INDEX);
            self.head = index;
            *kind.of_mut(arena, index) = Link::UNLINKED;
        } else {
            kind.of_mut(arena, self.tail).next = index;
            *kind.of_mut(arena, index) = Link {
                next: NULL_INDEX,
                prev: self.tail,
            };
        }
        self.tail = index;
        self.count += 1;
    }

    /// Unlink an item from anywhere in the list.
    ///
    /// Handles the only-node, head, tail and middle cases.
    ///
    /// # Returns
    /// `true` if the list is now empty. The node is NOT freed from the
    /// arena; caller must do that.
    ///
    /// # Complexity
    /// O(1)
    pub(crate) fn remove(&mut self, arena: &mut Arena, index: ArenaIndex) -> bool {
        let kind = self.kind;
        let Link { next, prev } = kind.of(arena, index);

        if prev == NULL_INDEX {
            debug_assert!(self.head == index);
            self.head = next;
        } else {
            kind.of_mut(arena, prev).next = next;
        }

        if next == NULL_INDEX {
            debug_assert!(self.tail == index);
            self.tail = prev;
        } else {
            kind.of_mut(arena, next).prev = prev;
        }

        self.count -= 1;
        *kind.of_mut(arena, index) = Link::UNLINKED;

        self.count == 0
    }

    /// Iterate item indices from head to tail.
    pub fn iter<'a>(&self, arena: &'a Arena) -> ItemListIter<'a> {
        ItemListIter {
            arena,
            kind: self.kind,
            cursor: self.head,
        }
    }
}

/// Front-to-back iterator over an `ItemList`.
pub struct ItemListIter<'a> {
    arena: &'a Arena,
    kind: LinkKind,
    cursor: ArenaIndex,
}

impl Iterator for ItemListIter<'_> {
    type Item = ArenaIndex;

    fn next(&mut self) -> Option<ArenaIndex> {
        if self.cursor == NULL_INDEX {
            return None;
        }
        let index = self.cursor;
        self.cursor = self.kind.of(self.arena, index).next;
        Some(index)
    }
}

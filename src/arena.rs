//! Arena Allocator - O(1) slab allocator for catalog items.
//!
//! The arena pre-allocates a contiguous block of nodes at startup, grows it
//! when the free list runs dry, and hands out 32-bit indices instead of
//! pointers. A free list threaded through the
//! `master.next` field gives O(1) allocation and deallocation, and lets the
//! catalog and the category index share one record without a second copy.

use std::fmt;

use rust_decimal::Decimal;

/// Sentinel value representing a null/invalid index (like nullptr)
pub const NULL_INDEX: u32 = u32::MAX;

/// Type alias for arena indices - our "compressed pointers"
pub type ArenaIndex = u32;

/// A pair of list pointers.
///
/// Each node carries two of these: one for the catalog's master list and
/// one for its category's list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub next: ArenaIndex,
    pub prev: ArenaIndex,
}

impl Link {
    /// An unlinked pair
    pub const UNLINKED: Link = Link {
        next: NULL_INDEX,
        prev: NULL_INDEX,
    };
}

impl Default for Link {
    fn default() -> Self {
        Link::UNLINKED
    }
}

/// A sellable catalog item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Unique key within the catalog
    pub name: String,
    /// Category key in the category index
    pub category: String,
    /// Non-negative unit price
    pub price: Decimal,
}

impl Item {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
        }
    }
}

/// One arena slot: an item plus its two sets of list links.
#[derive(Clone, Debug)]
pub struct ItemNode {
    /// The record; `None` while the slot sits on the free list
    pub item: Option<Item>,

    /// Position in the catalog's master list (doubles as free-list link)
    pub master: Link,

    /// Position in the owning category's list
    pub category: Link,
}

impl ItemNode {
    /// Create an empty/unallocated node (for free list)
    #[inline]
    pub const fn empty() -> Self {
        Self {
            item: None,
            master: Link::UNLINKED,
            category: Link::UNLINKED,
        }
    }

    /// Reset the node for reuse (when returning to free list)
    #[inline]
    pub fn reset(&mut self) -> Option<Item> {
        self.master = Link::UNLINKED;
        self.category = Link::UNLINKED;
        self.item.take()
    }

    /// Returns true if the slot currently holds an item
    #[inline]
    pub(crate) fn is_live(&self) -> bool {
        self.item.is_some()
    }
}

/// Nodes reserved up front at most; larger hints grow on demand.
const MAX_PREALLOC: u32 = 1 << 16;

/// Growable pool of item nodes with O(1) allocation and deallocation.
pub struct Arena {
    /// Contiguous block of nodes, live and free
    nodes: Vec<ItemNode>,

    /// Head of the free list (index of first available node)
    free_head: ArenaIndex,

    /// Number of currently allocated nodes
    allocated_count: u32,
}

impl Arena {
    /// Create an arena with `capacity` nodes pre-allocated on the free list.
    ///
    /// The capacity is a hint, not a limit: once the free list runs dry the
    /// arena appends fresh nodes. Hints above `MAX_PREALLOC` are clamped.
    pub fn new(capacity: u32) -> Self {
        let reserved = capacity.min(MAX_PREALLOC);
        let mut nodes = vec![ItemNode::empty(); reserved as usize];

        // Thread the free list through all nodes
        for i in 0..reserved.saturating_sub(1) {
            nodes[i as usize].master.next = i + 1;
        }

        Self {
            nodes,
            free_head: if reserved > 0 { 0 } else { NULL_INDEX },
            allocated_count: 0,
        }
    }

    /// Allocate a node and store `item` in it.
    ///
    /// # Complexity
    /// O(1) - pops from head of free list, or amortized O(1) append
    ///
    /// # Panics
    /// Panics if the 32-bit index space is exhausted.
    pub fn alloc(&mut self, item: Item) -> ArenaIndex {
        let index = if self.free_head == NULL_INDEX {
            self.grow()
        } else {
            let index = self.free_head;
            self.free_head = self.nodes[index as usize].master.next;
            index
        };
        self.allocated_count += 1;

        let node = &mut self.nodes[index as usize];
        node.master = Link::UNLINKED;
        node.category = Link::UNLINKED;
        node.item = Some(item);

        index
    }

    /// Append one empty node and return its index.
    fn grow(&mut self) -> ArenaIndex {
        assert!(
            self.nodes.len() < NULL_INDEX as usize,
            "arena index space exhausted"
        );
        let index = self.nodes.len() as ArenaIndex;
        self.nodes.push(ItemNode::empty());
        index
    }

    /// Free a node back to the arena, returning the item it held.
    ///
    /// The node must already be unlinked from every list. Freeing a slot
    /// that is not live is a no-op.
    ///
    /// # Complexity
    /// O(1) - pushes to head of free list
    pub fn free(&mut self, index: ArenaIndex) -> Option<Item> {
        let node = self.nodes.get_mut(index as usize)?;
        if !node.is_live() {
            // Already on the free list
            return None;
        }
        let item = node.reset();
        node.master.next = self.free_head;
        self.free_head = index;
        self.allocated_count -= 1;

        item
    }

    /// Get an immutable reference to a node.
    #[inline]
    pub(crate) fn get(&self, index: ArenaIndex) -> &ItemNode {
        &self.nodes[index as usize]
    }

    /// Get a mutable reference to a node.
    #[inline]
    pub(crate) fn get_mut(&mut self, index: ArenaIndex) -> &mut ItemNode {
        &mut self.nodes[index as usize]
    }

    /// Get the item stored at `index`, if the slot is live.
    #[inline]
    pub fn item(&self, index: ArenaIndex) -> Option<&Item> {
        self.nodes.get(index as usize)?.item.as_ref()
    }

    /// Returns the number of currently allocated nodes.
    #[inline]
    pub fn allocated(&self) -> u32 {
        self.allocated_count
    }

    /// Number of nodes backed by storage, live or free.
    #[inline]
    pub fn slots(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena is empty (no allocated nodes).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.allocated_count == 0
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("slots", &self.nodes.len())
            .field("allocated", &self.allocated_count)
            .field("free_head", &self.free_head)
            .finish()
    }
}

//! Item Catalog - The master list of sellable items.
//!
//! Items are stored once in the arena. The catalog threads each one through
//! its master list and through the list of exactly one category node in the
//! category index, and keeps a name lookup map for O(1) price lookup.
//! Adding and removing always touch both lists in the same call, so the
//! grouped view can never show an item the master list no longer has.

use rand::Rng;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::arena::{Arena, ArenaIndex, Item};
use crate::category_index::CategoryIndex;
use crate::error::{CafeError, CafeResult};
use crate::item_list::{ItemList, LinkKind};

/// Mapping from item name to ArenaIndex
pub type NameMap = FxHashMap<String, ArenaIndex>;

/// One category and its items, sorted by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<&'a Item>,
}

impl CategoryGroup<'_> {
    /// Names of the items in display order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }
}

/// The catalog of sellable items.
#[derive(Debug)]
pub struct ItemCatalog {
    /// Storage for every item record
    arena: Arena,
    /// All live items, in insertion order
    master: ItemList,
    /// Category tree; each node lists its items
    categories: CategoryIndex,
    /// Name lookup: item name -> arena slot
    by_name: NameMap,
}

impl ItemCatalog {
    /// Create an empty catalog with room for `capacity` items before the
    /// arena has to grow.
    pub fn new(capacity: u32) -> Self {
        Self {
            arena: Arena::new(capacity),
            master: ItemList::new(LinkKind::Master),
            categories: CategoryIndex::new(),
            by_name: NameMap::default(),
        }
    }

    /// Add an item and file it under its category.
    ///
    /// Names are unique: adding a name that is already present fails with
    /// `DuplicateItem` and leaves the catalog untouched.
    ///
    /// # Returns
    /// The arena slot the item was stored in.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
    ) -> CafeResult<ArenaIndex> {
        let name = name.into();
        let category = category.into();

        if price < Decimal::ZERO {
            return Err(CafeError::InvalidPrice(price));
        }
        if self.by_name.contains_key(&name) {
            return Err(CafeError::DuplicateItem(name));
        }

        let index = self
            .arena
            .alloc(Item::new(name.clone(), category.clone(), price));

        self.master.push_back(&mut self.arena, index);
        let node = self.categories.insert(&category);
        self.categories
            .node_mut(node)
            .items
            .push_back(&mut self.arena, index);

        debug!(%name, %category, %price, slot = index, "item added");
        self.by_name.insert(name, index);

        Ok(index)
    }

    /// Remove an item from the master list and its category in one step.
    ///
    /// # Returns
    /// The removed item, or `ItemNotFound`.
    pub fn remove(&mut self, name: &str) -> CafeResult<Item> {
        let index = self
            .by_name
            .remove(name)
            .ok_or_else(|| CafeError::ItemNotFound(name.to_owned()))?;

        let node = self
            .arena
            .item(index)
            .and_then(|item| self.categories.find(&item.category));

        self.master.remove(&mut self.arena, index);
        if let Some(node) = node {
            self.categories
                .node_mut(node)
                .items
                .remove(&mut self.arena, index);
        }

        let item = self
            .arena
            .free(index)
            .ok_or_else(|| CafeError::ItemNotFound(name.to_owned()))?;

        debug!(name, category = %item.category, slot = index, "item removed");
        Ok(item)
    }

    /// Unit price of `name`, or `None` if no such item exists.
    #[inline]
    pub fn price_of(&self, name: &str) -> Option<Decimal> {
        self.get(name).map(|item| item.price)
    }

    /// Look up an item by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.by_name
            .get(name)
            .and_then(|&index| self.arena.item(index))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Every category in ascending order, each with its items sorted by name.
    ///
    /// Categories whose items have all been removed are still yielded, with
    /// an empty item list. Groups are built lazily as the iterator advances.
    pub fn list_all_grouped(&self) -> impl Iterator<Item = CategoryGroup<'_>> + '_ {
        self.categories.iter().map(move |node| {
            let mut items: Vec<&Item> = node
                .items
                .iter(&self.arena)
                .filter_map(|index| self.arena.item(index))
                .inspect(|item| debug_assert!(self.by_name.contains_key(&item.name)))
                .collect();
            // Stable, so equal names keep insertion order
            items.sort_by(|a, b| a.name.cmp(&b.name));
            CategoryGroup {
                category: node.category.as_str(),
                items,
            }
        })
    }

    /// Pick one item of `category` uniformly at random.
    ///
    /// The caller supplies the random source, so a seeded generator makes
    /// the choice reproducible.
    pub fn recommend<R: Rng>(&self, category: &str, rng: &mut R) -> CafeResult<&Item> {
        let list = self
            .categories
            .items(category)
            .filter(|list| !list.is_empty())
            .ok_or_else(|| CafeError::NoMatch(category.to_owned()))?;

        let pick = rng.gen_range(0..list.len());
        list.iter(&self.arena)
            .nth(pick)
            .and_then(|index| self.arena.item(index))
            .ok_or_else(|| CafeError::NoMatch(category.to_owned()))
    }

    /// Items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.master
            .iter(&self.arena)
            .filter_map(move |index| self.arena.item(index))
    }

    /// Category keys in ascending order, including emptied ones.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(|node| node.category.as_str())
    }

    /// The underlying category tree
    #[inline]
    pub fn category_index(&self) -> &CategoryIndex {
        &self.categories
    }

    /// Number of live items
    #[inline]
    pub fn len(&self) -> usize {
        self.master.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.master.is_empty()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::new(crate::DEFAULT_CAPACITY)
    }
}

//! Cafe - The engine facade.
//!
//! Owns the catalog, the pending queue, the history log and the staff
//! directory, and is the only place that moves data between them.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

use crate::arena::{ArenaIndex, Item};
use crate::catalog::{CategoryGroup, ItemCatalog};
use crate::command::{AddItem, CafeEvent, Command, PlaceOrder, RemoveItem};
use crate::error::{CafeError, CafeResult};
use crate::history::OrderHistoryLog;
use crate::order::{Order, OrderQueue};
use crate::staff::{self, StaffDirectory};

/// The cafe engine.
#[derive(Debug)]
pub struct Cafe {
    catalog: ItemCatalog,
    queue: OrderQueue,
    history: OrderHistoryLog,
    staff: StaffDirectory,
}

impl Cafe {
    /// Create an engine whose catalog pre-allocates room for `capacity`
    /// items. The catalog grows past it on demand.
    pub fn new(capacity: u32) -> Self {
        Self {
            catalog: ItemCatalog::new(capacity),
            queue: OrderQueue::new(),
            history: OrderHistoryLog::new(),
            staff: StaffDirectory::new(),
        }
    }

    /// Process a single command and return the event it produced.
    pub fn process_command(&mut self, cmd: Command) -> CafeResult<CafeEvent> {
        match cmd {
            Command::AddItem(AddItem {
                name,
                category,
                price,
            }) => {
                let slot = self.add_item(name.as_str(), category, price)?;
                Ok(CafeEvent::ItemAdded { name, slot })
            }
            Command::RemoveItem(RemoveItem { name }) => {
                self.remove_item(&name).map(CafeEvent::ItemRemoved)
            }
            Command::PlaceOrder(PlaceOrder {
                customer,
                item,
                quantity,
            }) => self
                .place_order(customer, &item, quantity)
                .map(|order| CafeEvent::OrderPlaced(order.clone())),
            Command::CompleteOrder => self
                .complete_front()
                .map(|order| CafeEvent::OrderCompleted(order.clone())),
            Command::AddStaff(name) => {
                let bucket = staff::hash(&name);
                self.staff.add(name.as_str());
                Ok(CafeEvent::StaffAdded { name, bucket })
            }
        }
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
    ) -> CafeResult<ArenaIndex> {
        self.catalog.add(name, category, price)
    }

    pub fn remove_item(&mut self, name: &str) -> CafeResult<Item> {
        self.catalog.remove(name)
    }

    #[inline]
    pub fn price_of(&self, name: &str) -> Option<Decimal> {
        self.catalog.price_of(name)
    }

    pub fn list_all_grouped(&self) -> impl Iterator<Item = CategoryGroup<'_>> + '_ {
        self.catalog.list_all_grouped()
    }

    pub fn recommend<R: Rng>(&self, category: &str, rng: &mut R) -> CafeResult<&Item> {
        self.catalog.recommend(category, rng)
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Place an order, snapshotting the item's current price.
    ///
    /// Fails with `ItemNotFound` before anything is queued if the item is
    /// not in the catalog, and with `InvalidQuantity` for zero units.
    pub fn place_order(
        &mut self,
        customer: impl Into<String>,
        item: &str,
        quantity: u32,
    ) -> CafeResult<&Order> {
        let unit_price = self
            .catalog
            .price_of(item)
            .ok_or_else(|| CafeError::ItemNotFound(item.to_owned()))?;
        if quantity == 0 {
            return Err(CafeError::InvalidQuantity);
        }

        let order = Order::new(customer, item, quantity, unit_price);
        debug!(customer = %order.customer, item, quantity, total = %order.total, "order placed");
        Ok(self.queue.enqueue(order))
    }

    /// Move the oldest pending order into history.
    ///
    /// # Returns
    /// The completed order (now the top of history), or `QueueEmpty`.
    pub fn complete_front(&mut self) -> CafeResult<&Order> {
        let order = self.queue.pop_front().ok_or(CafeError::QueueEmpty)?;
        debug!(customer = %order.customer, item = %order.item, total = %order.total, "order completed");
        Ok(self.history.push(order))
    }

    // ========================================================================
    // Staff
    // ========================================================================

    pub fn add_staff(&mut self, name: impl Into<String>) {
        self.staff.add(name);
    }

    #[inline]
    pub fn has_staff(&self, name: &str) -> bool {
        self.staff.contains(name)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    #[inline]
    pub fn queue(&self) -> &OrderQueue {
        &self.queue
    }

    #[inline]
    pub fn history(&self) -> &OrderHistoryLog {
        &self.history
    }

    #[inline]
    pub fn staff(&self) -> &StaffDirectory {
        &self.staff
    }

    /// Compute state hash for determinism testing.
    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();

        for group in self.catalog.list_all_grouped() {
            group.category.hash(&mut hasher);
            for item in &group.items {
                item.name.hash(&mut hasher);
                item.price.hash(&mut hasher);
            }
        }
        for order in self.queue.iter().chain(self.history.iter()) {
            hash_order(order, &mut hasher);
        }
        self.queue.len().hash(&mut hasher);
        for record in self.staff.iter() {
            record.name.hash(&mut hasher);
        }

        hasher.finish()
    }
}

fn hash_order(order: &Order, hasher: &mut DefaultHasher) {
    order.customer.hash(hasher);
    order.item.hash(hasher);
    order.quantity.hash(hasher);
    order.unit_price.hash(hasher);
}

impl Default for Cafe {
    fn default() -> Self {
        Self::new(crate::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rp(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn seeded_cafe() -> Cafe {
        let mut cafe = Cafe::new(64);
        cafe.add_item("Nasi Goreng", "makanan", rp(15000)).unwrap();
        cafe.add_item("Es Teh", "minuman", rp(5000)).unwrap();
        cafe
    }

    #[test]
    fn test_end_to_end() {
        let mut cafe = seeded_cafe();

        let placed = cafe.place_order("Budi", "Nasi Goreng", 2).unwrap();
        assert_eq!(placed.total, rp(30000));

        let done = cafe.complete_front().unwrap().clone();
        assert_eq!(done, Order::new("Budi", "Nasi Goreng", 2, rp(15000)));
        assert_eq!(done.total, rp(30000));
        assert_eq!(cafe.history().len(), 1);
        assert!(cafe.queue().is_empty());
    }

    #[test]
    fn test_place_unknown_item() {
        let mut cafe = seeded_cafe();
        let err = cafe.place_order("Budi", "Sate", 1).unwrap_err();
        assert_eq!(err, CafeError::ItemNotFound("Sate".into()));
        assert!(cafe.queue().is_empty());
    }

    #[test]
    fn test_place_zero_quantity() {
        let mut cafe = seeded_cafe();
        assert_eq!(
            cafe.place_order("Budi", "Es Teh", 0).unwrap_err(),
            CafeError::InvalidQuantity
        );
        assert!(cafe.queue().is_empty());
    }

    #[test]
    fn test_complete_empty_queue() {
        let mut cafe = Cafe::new(4);
        assert_eq!(cafe.complete_front().unwrap_err(), CafeError::QueueEmpty);
        assert!(cafe.history().is_empty());
    }

    #[test]
    fn test_fifo_completion_lifo_history() {
        let mut cafe = seeded_cafe();
        cafe.place_order("A", "Es Teh", 1).unwrap();
        cafe.place_order("B", "Es Teh", 1).unwrap();

        assert_eq!(cafe.complete_front().unwrap().customer, "A");
        assert_eq!(cafe.complete_front().unwrap().customer, "B");

        let history: Vec<_> = cafe.history().iter().map(|o| o.customer.as_str()).collect();
        assert_eq!(history, vec!["B", "A"]);
    }

    #[test]
    fn test_price_snapshot_survives_removal() {
        let mut cafe = seeded_cafe();
        cafe.place_order("Budi", "Es Teh", 3).unwrap();
        cafe.remove_item("Es Teh").unwrap();
        cafe.add_item("Es Teh", "minuman", rp(7000)).unwrap();

        let done = cafe.complete_front().unwrap();
        assert_eq!(done.unit_price, rp(5000));
        assert_eq!(done.total, rp(15000));
    }

    #[test]
    fn test_process_command_events() {
        let mut cafe = Cafe::new(8);

        let event = cafe
            .process_command(Command::AddItem(AddItem {
                name: "Kopi".into(),
                category: "minuman".into(),
                price: rp(8000),
            }))
            .unwrap();
        assert!(matches!(event, CafeEvent::ItemAdded { ref name, .. } if name == "Kopi"));

        let event = cafe
            .process_command(Command::PlaceOrder(PlaceOrder {
                customer: "Siti".into(),
                item: "Kopi".into(),
                quantity: 2,
            }))
            .unwrap();
        assert_eq!(
            event,
            CafeEvent::OrderPlaced(Order::new("Siti", "Kopi", 2, rp(8000)))
        );

        let event = cafe.process_command(Command::CompleteOrder).unwrap();
        assert!(matches!(event, CafeEvent::OrderCompleted(_)));

        let event = cafe.process_command(Command::AddStaff("Alice".into())).unwrap();
        assert_eq!(
            event,
            CafeEvent::StaffAdded {
                name: "Alice".into(),
                bucket: 7
            }
        );
        assert!(cafe.has_staff("Alice"));

        let event = cafe
            .process_command(Command::RemoveItem(RemoveItem {
                name: "Kopi".into(),
            }))
            .unwrap();
        assert!(matches!(event, CafeEvent::ItemRemoved(ref item) if item.name == "Kopi"));

        assert_eq!(
            cafe.process_command(Command::CompleteOrder).unwrap_err(),
            CafeError::QueueEmpty
        );
    }

    #[test]
    fn test_recommend_through_facade() {
        let cafe = seeded_cafe();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(cafe.recommend("makanan", &mut rng).unwrap().name, "Nasi Goreng");
        assert!(cafe.recommend("dessert", &mut rng).is_err());
    }

    #[test]
    fn test_state_hash_determinism() {
        let build = || {
            let mut cafe = seeded_cafe();
            cafe.place_order("Budi", "Es Teh", 1).unwrap();
            cafe.add_staff("Alice");
            cafe
        };
        assert_eq!(build().state_hash(), build().state_hash());

        let mut other = build();
        other.complete_front().unwrap();
        assert_ne!(build().state_hash(), other.state_hash());
    }

    #[test]
    fn test_place_order_returns_newest() {
        let mut cafe = seeded_cafe();
        cafe.place_order("A", "Es Teh", 1).unwrap();
        let placed = cafe.place_order("B", "Nasi Goreng", 2).unwrap();
        assert_eq!(placed.customer, "B");
        assert_eq!(placed.total, rp(30000));

        let done = cafe.complete_front().unwrap();
        assert_eq!(done.customer, "A");
        assert_eq!(cafe.history().top().map(|o| o.customer.as_str()), Some("A"));
    }
}

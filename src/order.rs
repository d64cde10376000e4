//! Orders and the pending-order queue.
//!
//! An order snapshots the unit price at placement time. The queue is
//! strictly FIFO: orders complete in the order they were placed, and there
//! is no way to pull one out of the middle.

use std::collections::VecDeque;

use rust_decimal::Decimal;
use serde::Serialize;

/// A customer's request for `quantity` units of one item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Order {
    /// Who placed the order
    pub customer: String,
    /// Catalog item name
    pub item: String,
    /// Units ordered (positive)
    pub quantity: u32,
    /// Price per unit at the moment the order was placed
    pub unit_price: Decimal,
    /// `quantity * unit_price`
    pub total: Decimal,
}

impl Order {
    /// Build an order, computing the total from the price snapshot.
    pub fn new(
        customer: impl Into<String>,
        item: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            customer: customer.into(),
            item: item.into(),
            quantity,
            unit_price,
            total: unit_price * Decimal::from(quantity),
        }
    }
}

/// FIFO queue of pending orders.
#[derive(Clone, Debug, Default)]
pub struct OrderQueue {
    orders: VecDeque<Order>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order to the tail (newest) and return it.
    ///
    /// # Complexity
    /// O(1) amortized
    #[inline]
    pub fn enqueue(&mut self, order: Order) -> &Order {
        let tail = self.orders.len();
        self.orders.push_back(order);
        &self.orders[tail]
    }

    /// Remove and return the oldest order.
    #[inline]
    pub fn pop_front(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    /// Peek at the oldest order without removing it.
    #[inline]
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Peek at the newest order.
    #[inline]
    pub fn back(&self) -> Option<&Order> {
        self.orders.back()
    }

    /// Pending orders, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total() {
        let order = Order::new("Budi", "Nasi Goreng", 2, Decimal::from(15000));
        assert_eq!(order.total, Decimal::from(30000));
        assert_eq!(order.unit_price, Decimal::from(15000));
    }

    #[test]
    fn test_fractional_total() {
        let order = Order::new("Ani", "Tea", 3, Decimal::new(15, 1));
        assert_eq!(order.total, Decimal::new(45, 1));
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = OrderQueue::new();
        assert!(queue.is_empty());
        assert!(queue.front().is_none());
        assert!(queue.pop_front().is_none());
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = OrderQueue::new();
        queue.enqueue(Order::new("A", "Kopi", 1, Decimal::from(8000)));
        queue.enqueue(Order::new("B", "Kopi", 1, Decimal::from(8000)));
        queue.enqueue(Order::new("C", "Kopi", 1, Decimal::from(8000)));

        let listed: Vec<_> = queue.iter().map(|o| o.customer.as_str()).collect();
        assert_eq!(listed, vec!["A", "B", "C"]);
        // Listing is non-destructive
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.front().map(|o| o.customer.as_str()), Some("A"));
        assert_eq!(queue.back().map(|o| o.customer.as_str()), Some("C"));
        assert_eq!(queue.pop_front().unwrap().customer, "A");
        assert_eq!(queue.pop_front().unwrap().customer, "B");
        assert_eq!(queue.pop_front().unwrap().customer, "C");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_enqueue_returns_new_tail() {
        let mut queue = OrderQueue::new();
        queue.enqueue(Order::new("A", "Kopi", 1, Decimal::from(8000)));
        let placed = queue.enqueue(Order::new("B", "Teh", 2, Decimal::from(4000)));
        assert_eq!(placed.customer, "B");
        assert_eq!(placed.total, Decimal::from(8000));
        assert_eq!(queue.front().map(|o| o.customer.as_str()), Some("A"));
    }
}

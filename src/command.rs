//! Command and Event types for the cafe engine.
//!
//! Commands are mutations requested by the caller (a menu, a script, a
//! simulation). Events describe what each successful command changed.

use rust_decimal::Decimal;

use crate::arena::{ArenaIndex, Item};
use crate::order::Order;

// ============================================================================
// Input Commands
// ============================================================================

/// Add a new item to the catalog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddItem {
    pub name: String,
    pub category: String,
    pub price: Decimal,
}

/// Remove an item from the catalog by name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoveItem {
    pub name: String,
}

/// Place an order for a catalog item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceOrder {
    pub customer: String,
    pub item: String,
    pub quantity: u32,
}

/// Input commands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    PlaceOrder(PlaceOrder),
    /// Move the oldest pending order into history
    CompleteOrder,
    /// Add a name to the staff roster
    AddStaff(String),
}

// ============================================================================
// Output Events
// ============================================================================

/// Events produced by successful commands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CafeEvent {
    /// Item stored in the given arena slot
    ItemAdded { name: String, slot: ArenaIndex },
    /// Item removed from the catalog
    ItemRemoved(Item),
    /// Order appended to the queue
    OrderPlaced(Order),
    /// Order moved from the queue into history
    OrderCompleted(Order),
    /// Staff member filed into the given bucket
    StaffAdded { name: String, bucket: usize },
}

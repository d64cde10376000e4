//! # Cafe Engine
//!
//! An in-memory catalog, order queue and staff roster for a small cafe.
//!
//! ## Design Principles
//!
//! - **Single-Writer**: One owner mutates every structure through `&mut self` (no locks)
//! - **One Record, Two Views**: Items live once in an arena and are linked into
//!   both the master list and their category's list by index
//! - **Price Snapshots**: Orders copy the unit price when placed
//! - **Injected Randomness**: Recommendations take the caller's `Rng`
//!
//! ## Architecture
//!
//! ```text
//! [Caller] --Command--> [Cafe] --> ItemCatalog --> Arena + CategoryIndex (BST)
//!                          |-----> OrderQueue (FIFO) --complete--> OrderHistoryLog (LIFO)
//!                          |-----> StaffDirectory (chained hash)
//!                          v
//!                      [CafeEvent]
//! ```

pub mod arena;
pub mod item_list;
pub mod category_index;
pub mod catalog;
pub mod order;
pub mod history;
pub mod staff;
pub mod command;
pub mod error;
pub mod cafe;

/// Default number of catalog slots pre-allocated up front
pub const DEFAULT_CAPACITY: u32 = 4096;

// Re-exports for convenience
pub use arena::{Arena, ArenaIndex, Item, NULL_INDEX};
pub use catalog::{CategoryGroup, ItemCatalog};
pub use category_index::CategoryIndex;
pub use command::{AddItem, CafeEvent, Command, PlaceOrder, RemoveItem};
pub use error::{CafeError, CafeResult};
pub use history::OrderHistoryLog;
pub use order::{Order, OrderQueue};
pub use staff::{StaffDirectory, StaffRecord};
pub use cafe::Cafe;

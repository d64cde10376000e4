//! Cafe simulation driver.
//!
//! Runs a seeded synthetic day at the cafe: stocks the catalog, hires
//! staff, takes and completes orders, then prints every view the engine
//! offers. The same seed always produces the same day.

use std::path::PathBuf;

use cafe_engine::{Cafe, CafeError};
use clap::Parser;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MENU: [(&str, &str, i64); 12] = [
    ("Nasi Goreng", "makanan", 15_000),
    ("Mie Ayam", "makanan", 12_000),
    ("Ayam Bakar", "makanan", 20_000),
    ("Sate Ayam", "makanan", 18_000),
    ("Es Teh", "minuman", 5_000),
    ("Es Jeruk", "minuman", 6_000),
    ("Kopi Susu", "minuman", 10_000),
    ("Air Mineral", "minuman", 3_000),
    ("Pisang Goreng", "snack", 8_000),
    ("Tahu Isi", "snack", 7_000),
    ("Es Campur", "dessert", 13_000),
    ("Klepon", "dessert", 9_000),
];

const STAFF: [&str; 8] = ["Alice", "Budi", "Siti", "Rina", "Eko", "Joko", "Dewi", "Agus"];

#[derive(Debug, Parser)]
#[command(name = "cafe-sim", about = "Run a seeded synthetic day at the cafe")]
struct Args {
    /// RNG seed; the same seed replays the same day
    #[arg(long, default_value_t = 0xCAFE)]
    seed: u64,

    /// Number of menu items to stock (at most the built-in menu size)
    #[arg(long, default_value_t = 12)]
    items: usize,

    /// Number of orders to place
    #[arg(long, default_value_t = 40)]
    orders: usize,

    /// Number of staff to hire
    #[arg(long, default_value_t = 5)]
    staff: usize,

    /// Catalog slots to pre-allocate (the catalog grows past this)
    #[arg(long, default_value_t = cafe_engine::DEFAULT_CAPACITY)]
    capacity: u32,

    /// Write completed orders to this CSV file
    #[arg(long)]
    history_csv: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut cafe = Cafe::new(args.capacity);

    info!(seed = args.seed, items = args.items, orders = args.orders, "starting simulation");

    for &(name, category, price) in MENU.iter().take(args.items) {
        cafe.add_item(name, category, Decimal::from(price))?;
    }
    for &name in STAFF.iter().choose_multiple(&mut rng, args.staff.min(STAFF.len())) {
        cafe.add_staff(name);
    }

    for n in 0..args.orders {
        let customer = format!("guest-{:02}", rng.gen_range(0..20));
        let category = ["makanan", "minuman", "snack", "dessert"][rng.gen_range(0..4)];
        let item = match cafe.recommend(category, &mut rng) {
            Ok(item) => item.name.clone(),
            Err(err) => {
                warn!(%err, "skipping order");
                continue;
            }
        };
        cafe.place_order(customer, &item, rng.gen_range(1..4))?;

        // Kitchen keeps up with roughly two of every three orders
        if n % 3 != 2 {
            match cafe.complete_front() {
                Ok(_) | Err(CafeError::QueueEmpty) => {}
                Err(err) => return Err(err.into()),
            }
        }
    }

    println!("=== Menu ===");
    for group in cafe.list_all_grouped() {
        println!("{}:", group.category);
        for item in &group.items {
            println!("  - {} ({})", item.name, item.price);
        }
    }

    println!("\n=== Pending Orders ({}) ===", cafe.queue().len());
    for order in cafe.queue().iter() {
        println!(
            "  {} x{} {} @ {} = {}",
            order.customer, order.quantity, order.item, order.unit_price, order.total
        );
    }

    println!("\n=== History ({}) ===", cafe.history().len());
    for order in cafe.history().iter() {
        println!(
            "  {} x{} {} @ {} = {}",
            order.customer, order.quantity, order.item, order.unit_price, order.total
        );
    }
    println!("Revenue: {}", cafe.history().total_revenue());

    println!("\n=== Staff ===");
    for record in cafe.staff().iter() {
        println!("  {}", record.name);
    }

    if let Some(path) = args.history_csv {
        let mut writer = csv::Writer::from_path(&path)?;
        for order in cafe.history().iter() {
            writer.serialize(order)?;
        }
        writer.flush()?;
        info!(path = %path.display(), rows = cafe.history().len(), "history exported");
    }

    info!(state_hash = cafe.state_hash(), "simulation finished");
    Ok(())
}

//! Determinism Test - Golden Master verification.
//!
//! Verifies that the engine produces identical results across runs
//! when given the same input sequence.

use cafe_engine::{AddItem, Cafe, CafeEvent, Command, PlaceOrder, RemoveItem};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const CATEGORIES: [&str; 4] = ["makanan", "minuman", "dessert", "snack"];
const STAFF: [&str; 6] = ["Alice", "Budi", "Siti", "Rina", "Eko", "Joko"];

/// Generate a deterministic sequence of commands
fn generate_commands(seed: u64, count: usize) -> Vec<Command> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut commands = Vec::with_capacity(count);

    for _ in 0..count {
        let name = format!("menu-{}", rng.gen_range(0..100));
        let cmd = match rng.gen_range(0..100) {
            0..=34 => Command::AddItem(AddItem {
                name,
                category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_owned(),
                price: Decimal::new(rng.gen_range(100..5_000_000i64), 2),
            }),
            35..=44 => Command::RemoveItem(RemoveItem { name }),
            45..=74 => Command::PlaceOrder(PlaceOrder {
                customer: format!("guest-{}", rng.gen_range(0..50)),
                item: name,
                quantity: rng.gen_range(1..6),
            }),
            75..=94 => Command::CompleteOrder,
            _ => Command::AddStaff(STAFF[rng.gen_range(0..STAFF.len())].to_owned()),
        };
        commands.push(cmd);
    }

    commands
}

/// Hash the outcome of every command
fn hash_outcomes(outcomes: &[Result<CafeEvent, cafe_engine::CafeError>]) -> u64 {
    let mut hasher = DefaultHasher::new();

    for outcome in outcomes {
        match outcome {
            Ok(CafeEvent::ItemAdded { name, slot }) => {
                "ItemAdded".hash(&mut hasher);
                name.hash(&mut hasher);
                slot.hash(&mut hasher);
            }
            Ok(CafeEvent::ItemRemoved(item)) => {
                "ItemRemoved".hash(&mut hasher);
                item.name.hash(&mut hasher);
                item.price.hash(&mut hasher);
            }
            Ok(CafeEvent::OrderPlaced(order)) | Ok(CafeEvent::OrderCompleted(order)) => {
                "Order".hash(&mut hasher);
                order.customer.hash(&mut hasher);
                order.item.hash(&mut hasher);
                order.total.hash(&mut hasher);
            }
            Ok(CafeEvent::StaffAdded { name, bucket }) => {
                "StaffAdded".hash(&mut hasher);
                name.hash(&mut hasher);
                bucket.hash(&mut hasher);
            }
            Err(err) => {
                "Error".hash(&mut hasher);
                err.to_string().hash(&mut hasher);
            }
        }
    }

    hasher.finish()
}

/// Run the engine with a command sequence and return hashes
fn run_engine(commands: &[Command]) -> (u64, u64) {
    let mut cafe = Cafe::new(1_000);
    let outcomes: Vec<_> = commands
        .iter()
        .cloned()
        .map(|cmd| cafe.process_command(cmd))
        .collect();

    (hash_outcomes(&outcomes), cafe.state_hash())
}

#[test]
fn test_determinism_small() {
    const SEED: u64 = 0xDEADBEEF;
    const COUNT: usize = 1000;
    const RUNS: usize = 10;

    let commands = generate_commands(SEED, COUNT);

    let (first_event_hash, first_state_hash) = run_engine(&commands);

    for run in 1..RUNS {
        let (event_hash, state_hash) = run_engine(&commands);

        assert_eq!(
            event_hash, first_event_hash,
            "Event hash mismatch on run {}", run
        );
        assert_eq!(
            state_hash, first_state_hash,
            "State hash mismatch on run {}", run
        );
    }
}

#[test]
fn test_determinism_large() {
    const SEED: u64 = 0xCAFEBABE;
    const COUNT: usize = 50_000;
    const RUNS: usize = 3;

    let commands = generate_commands(SEED, COUNT);

    let (first_event_hash, first_state_hash) = run_engine(&commands);

    for run in 1..RUNS {
        let (event_hash, state_hash) = run_engine(&commands);

        assert_eq!(event_hash, first_event_hash, "Event hash mismatch on run {}", run);
        assert_eq!(state_hash, first_state_hash, "State hash mismatch on run {}", run);
    }
}

#[test]
fn test_different_seeds_produce_different_results() {
    let commands1 = generate_commands(1, 1000);
    let commands2 = generate_commands(2, 1000);

    let (hash1, _) = run_engine(&commands1);
    let (hash2, _) = run_engine(&commands2);

    assert_ne!(hash1, hash2, "Different seeds should produce different results");
}

#[test]
fn test_recommendation_reproducible_with_seed() {
    let mut cafe = Cafe::new(64);
    for i in 0..20 {
        cafe.add_item(format!("kue-{i}"), "dessert", Decimal::from(3000 + i))
            .unwrap();
    }

    let run = |seed: u64| -> Vec<String> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..25)
            .map(|_| cafe.recommend("dessert", &mut rng).unwrap().name.clone())
            .collect()
    };

    assert_eq!(run(0x5EED), run(0x5EED));
    assert_ne!(run(1), run(2));
}

use cafe_engine::Cafe;
use hdrhistogram::Histogram;
use rust_decimal::Decimal;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Preparing Latency Benchmark...");

    // Setup
    let mut cafe = Cafe::new(1_024);
    for i in 0..500 {
        let category = if i % 2 == 0 { "makanan" } else { "minuman" };
        cafe.add_item(format!("menu-{i}"), category, Decimal::from(1_000 + i))?;
    }

    let mut histogram = Histogram::<u64>::new_with_bounds(1, 1_000_000, 3)?;

    const ITERATIONS: u64 = 200_000;

    println!("Running {} iterations...", ITERATIONS);

    let mut total_duration = std::time::Duration::new(0, 0);

    for n in 0..ITERATIONS {
        let item = format!("menu-{}", n % 500);

        // Critical measurement section: place + complete
        let start = Instant::now();
        std::hint::black_box(cafe.place_order("bench", &item, 1)?);
        std::hint::black_box(cafe.complete_front()?);
        let elapsed = start.elapsed();

        histogram.record(elapsed.as_nanos() as u64).unwrap_or(());
        total_duration += elapsed;
    }

    println!("\n=== Latency Report (ns) ===");
    println!("Total Ops:  {}", ITERATIONS);
    println!("Throughput: {:.2} ops/sec", ITERATIONS as f64 / total_duration.as_secs_f64());
    println!("History:    {} orders, revenue {}", cafe.history().len(), cafe.history().total_revenue());
    println!("---------------------------");
    println!("Min:    {:6} ns", histogram.min());
    println!("P50:    {:6} ns", histogram.value_at_quantile(0.50));
    println!("P90:    {:6} ns", histogram.value_at_quantile(0.90));
    println!("P99:    {:6} ns", histogram.value_at_quantile(0.99));
    println!("P99.9:  {:6} ns", histogram.value_at_quantile(0.999));
    println!("Max:    {:6} ns", histogram.max());
    println!("---------------------------");

    Ok(())
}

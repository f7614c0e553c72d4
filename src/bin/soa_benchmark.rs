use anyhow::Context;
use geom_soa::benchmarks::{run_layout_comparison, speedup_over_baseline, LayoutBenchConfig};
use geom_soa::{Collection, Object, Vector3f};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut config = LayoutBenchConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        config.entity_count = arg
            .parse()
            .with_context(|| format!("invalid entity count: {arg}"))?;
    }

    println!("=== Struct-of-Arrays vs Array-of-Structs Benchmark ===\n");
    println!("Test parameters:");
    println!("  Entity count: {}", config.entity_count);
    println!("  Iterations: {}\n", config.iterations);

    let results = run_layout_comparison(&config);

    println!("## Transform throughput\n");
    for result in &results {
        println!("  {result}");
    }

    println!("\n## Relative throughput\n");
    for (name, speedup) in speedup_over_baseline(&results) {
        println!("  {name}: {speedup:.2}x");
    }

    print_memory_layout(config.entity_count);

    Ok(())
}

fn print_memory_layout(entity_count: usize) {
    use geom_soa::benchmarks::layout_comparison::WideTag;

    let col: Collection<Vector3f, WideTag> = (0..entity_count)
        .map(|_| Object::<Vector3f, WideTag>::default())
        .collect();
    let stats = col.memory_stats();
    let combined_size = entity_count * std::mem::size_of::<Object<Vector3f, WideTag>>();

    println!("\n## Memory Layout Comparison\n");
    println!("Array-of-Structs:");
    println!("  Total size: {} bytes", combined_size);
    println!("  Cache lines for points: ~{}", combined_size / 64);
    println!("\nStruct-of-Arrays:");
    println!("  {stats}");
    println!("  Cache lines for points: ~{}", stats.points_size / 64);

    let efficiency = stats.points_size as f64 / combined_size as f64;
    println!("\nEfficiency:");
    println!(
        "  Point-only access: {:.1}% of data needed",
        efficiency * 100.0
    );
    println!("  Cache efficiency improvement: ~{:.1}x", 1.0 / efficiency);
}

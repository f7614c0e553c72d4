/// Storage layout benchmark module
pub mod layout_comparison;

pub use layout_comparison::{
    run_layout_comparison, speedup_over_baseline, BenchmarkResult, LayoutBenchConfig,
};

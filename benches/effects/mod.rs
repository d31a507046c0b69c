//! Benchmarks for the stereo effects.

mod delay_lines;
mod shapers;

pub use delay_lines::bench_delay_lines;
pub use shapers::bench_shapers;

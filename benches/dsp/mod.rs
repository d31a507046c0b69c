//! Benchmarks for filters, oscillators and modulation sources.

mod filter;
mod modulation;
mod oscillator;

pub use filter::bench_filter;
pub use modulation::bench_modulation;
pub use oscillator::bench_oscillator;

//! qsynth - terminal rig for the fixed-point voice and effects chain
//!
//! Run with: cargo run --release
//! Log to a file with: RUST_LOG=info cargo run 2> qsynth.log

mod app;
mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();
    app::run()
}

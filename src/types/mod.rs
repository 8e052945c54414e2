//! Response types for the telemetry tools

mod cpu;
mod disk;
mod display;
mod memory;
mod network;
mod process;
mod stats;
mod system;

pub use cpu::*;
pub use disk::*;
pub use display::*;
pub use memory::*;
pub use network::*;
pub use process::*;
pub use stats::*;
pub use system::*;

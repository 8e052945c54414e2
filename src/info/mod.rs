//! Telemetry collection modules

pub mod cpu;
pub mod disk;
pub mod memory;
pub mod network;
pub mod process;
pub mod stats;
pub mod system;

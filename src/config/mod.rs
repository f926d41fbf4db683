//! Configuration for the attendance engine.
//!
//! Rule thresholds, schedules, and wage multipliers are configuration, not
//! code, so company-specific rule changes never touch the engine.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, NightWindow, ShiftConfig, ShiftSchedule, WageConfig};

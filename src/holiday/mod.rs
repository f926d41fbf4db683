//! Holiday tables and resolution.

mod repository;
mod resolver;

pub use repository::{HolidayEntry, HolidayRepository, InMemoryHolidayRepository};
pub use resolver::HolidayResolver;

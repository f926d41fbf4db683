//! Monthly statistics: aggregation and caching.

mod aggregator;
mod cache;

pub use aggregator::{MonthlyAggregator, MonthlyStats, days_in_month};
pub use cache::{
    CachedStats, InMemoryStatsCache, StatsCache, StatsKey, resync_at, resync_boundary,
    until_resync,
};

mod discovery;
mod engine;

pub use discovery::{daily_seed, discover, DailyDiscovery, DEFAULT_DISCOVERY_COUNT};
pub use engine::{recommend, DEFAULT_RECOMMENDATION_LIMIT};

mod cache;
mod deep_data;
mod entry;
mod feed;
mod search;

pub use cache::CacheService;
pub use deep_data::{DeepDataError, DeepDataService};
pub use entry::{EntryError, EntryService};
pub use feed::{FeedCategory, FeedError, FeedService};
pub use search::{SearchFilters, SearchService, MIN_QUERY_LEN};

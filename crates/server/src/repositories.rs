mod cache;
mod entry;

pub use cache::CacheRepository;
pub use entry::EntryRepository;

//! Canonical media model and pure normalization rules.
//!
//! Everything in this crate is side-effect free: provider records go in,
//! canonical [`UnifiedMedia`] / [`DetailedMedia`] records come out. All
//! network and persistence concerns live with the callers.

mod classify;
mod dedup;
mod filters;
mod models;
mod normalize;
mod script;
mod specs;

pub use classify::{classify, Classification};
pub use dedup::dedup_by_key;
pub use filters::is_hidden_gem;
pub use models::{
    CastMember, CrewMember, DetailedMedia, FeedPage, Financials, MediaKind, MediaNamespace,
    Person, Rating, RelatedTitle, SoundtrackEntry, StreamingProvider, UnifiedMedia,
};
pub use normalize::{
    detailed_from_anilist, detailed_from_movie, detailed_from_tv, unified_from_anilist,
    unified_from_movie, unified_from_person_credit, unified_from_tv,
};
pub use script::{predict_script_links, ScriptLink};
pub use specs::{extract_technical_specs, TechnicalSpecs};

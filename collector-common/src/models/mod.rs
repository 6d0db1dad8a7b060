//! Data-transfer models for backend records
//!
//! Every type here is a read-only view over data owned by the collector
//! backend. Decoding is lenient: unknown fields are ignored and missing or
//! `null` counters decode as zero.

pub mod artist;
pub mod collection;
pub mod opportunity;
pub mod process;

pub use artist::Artist;
pub use collection::{BatchArtistOutcome, BatchCollectionResult, CollectionResult, CollectionOutcome};
pub use opportunity::{OpportunitiesResponse, Opportunity, ScoreBreakdown};
pub use process::{ProcessKind, ProcessState, ProcessStatus};

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! Domain types produced by the breaker

pub mod cluster;
pub mod syllable;

pub use cluster::{cluster_key, ClusterIndex, LetterCluster};
pub use syllable::{Syllable, Word};

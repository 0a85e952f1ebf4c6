#![deny(missing_docs)]

//! Core value types shared across the weft crates: vertex keys, the
//! partitioned sequence backing every edge kind, structured errors, and the
//! deterministic RNG handle.

pub mod cut;
pub mod errors;
pub mod key;
pub mod provenance;
pub mod rng;

pub use cut::Cut;
pub use errors::{ErrorInfo, WeftError};
pub use key::VertexKey;
pub use provenance::SchemaVersion;
pub use rng::{derive_substream_seed, RngHandle};

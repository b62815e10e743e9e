//! Origin endpoint resolution
//!
//! Origins hosting the catalog API move between mirror hosts. This
//! module finds a working one for the run:
//!
//! - **Discovery**: fetch the upstream source document that declares
//!   the currently preferred address (best effort).
//! - **Probing**: content-level liveness check of one candidate — an
//!   HTTP success with an empty or malformed catalog body does not
//!   count as live.
//! - **Resolution**: ordered candidate list (preferred, then the
//!   templated numeric fallback range) consumed first-success.
//!
//! The resolved [`crate::models::Origin`] is threaded by value into
//! every later fetch; nothing here is process-global.

pub mod discovery;
pub mod prober;
pub mod resolver;

// Re-exports for convenience
pub use prober::probe;
pub use resolver::{candidate_origins, resolve, HarvestError};

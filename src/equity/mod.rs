//! Precomputed equity tables: the on-disk record format, the read-only
//! lookup store, the offline generator that fills it, and per-deal
//! analysis caches.
pub mod dealt;
pub mod evaluator;
pub mod generator;
pub mod layout;
pub mod progress;
pub mod record;
pub mod store;

pub use dealt::*;
pub use evaluator::*;
pub use generator::*;
pub use layout::*;
pub use progress::*;
pub use record::*;
pub use store::*;

pub mod engine;
pub mod error;
pub mod partition;
pub mod types;

pub use engine::{search, search_with_weights};
pub use error::{SearchError, MIN_PARTICIPANTS};
pub use partition::{partition_count, Partitions};
pub use types::Split;

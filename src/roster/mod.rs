pub mod filter;
pub mod types;

pub use filter::{group_by_position, select_participants, sort_by_skill_desc};
pub use types::Participant;

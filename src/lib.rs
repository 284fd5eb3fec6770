//! Split a roster of rated participants into two evenly matched teams.
//!
//! [`search`] scores every grouping of the required sizes and returns the
//! fairest one, steering away from signatures passed as forbidden.
//! [`MatchupHistory`] keeps the recently accepted signatures so callers can
//! avoid serving the same matchup twice in a row.
//!
//! ```
//! use rand::SeedableRng;
//! use squad_split::{search, MatchupHistory, MemoryStore, Participant, NO_REPEAT_LAST_N};
//!
//! let roster: Vec<Participant> = [90.0, 80.0, 70.0, 60.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &skill)| Participant::new(i as u32 + 1, skill))
//!     .collect();
//!
//! let history = MatchupHistory::open(MemoryStore::new(), 50).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//!
//! let split = search(&roster, &history.recent(NO_REPEAT_LAST_N), &mut rng).unwrap();
//! assert_eq!(split.total_a, split.total_b);
//! history.record(split.signature.clone()).unwrap();
//! ```

pub mod config;
pub mod history;
pub mod output;
pub mod roster;
pub mod scoring;
pub mod search;
pub mod signature;

pub use history::{
    HistoryStore, JsonFileStore, MatchupHistory, MemoryStore, MAX_HISTORY, NO_REPEAT_LAST_N,
};
pub use roster::Participant;
pub use scoring::Weights;
pub use search::{search, search_with_weights, SearchError, Split};
pub use signature::Signature;

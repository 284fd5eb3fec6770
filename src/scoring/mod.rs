pub mod config;
pub mod factors;
pub mod engine;
pub mod validation;

pub use config::*;
pub use factors::SplitMetrics;
pub use engine::{score_split, FactorContribution, ScoreBreakdown, ScoreResult};
pub use validation::validate_scoring;

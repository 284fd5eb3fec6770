pub mod formatter;

pub use formatter::{
    format_breakdown, format_history, format_json, format_roster, format_skill, format_split,
    format_tsv, should_use_colors,
};

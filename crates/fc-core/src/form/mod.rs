//! Field normalizer and matcher: reads and writes control values and
//! matches them against catalog codes.

mod date;
mod matching;
mod normalizer;
mod value;

pub use date::parse_flexible_date;
pub use matching::{LooseMatchPolicy, MatchPolicy, StrictMatchPolicy};
pub use normalizer::{
    compute_selector, discover_inputs, normalize_value, radio_group_selector, read_radio_group,
    read_value, write_value, DiscoveredInput,
};
pub use value::{parse_boolean_like, parse_boolean_str, FieldValue};

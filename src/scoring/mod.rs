pub mod calculations;
pub mod constants;
pub mod ranking;

pub use calculations::{
    compute_score, display_score, format_score, normalize, per_100g, score_breakdown, score_hue,
    stored_score, try_compute_score,
};
pub use constants::*;
pub use ranking::{
    compare_foods, parse_category_filter, rank_foods, ComparisonRow, RankedFood, SortOrder,
};

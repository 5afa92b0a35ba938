pub mod prompts;
pub mod render;

pub use prompts::{prompt_food_name, prompt_yes_no, resolve_food, resolve_foods};
pub use render::{
    display_breakdown, display_comparison, display_ranked_list, display_rescore_summary, score_bar,
};

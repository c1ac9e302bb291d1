mod scoring;
mod selection;

pub use scoring::prioritize_scian_actions;
pub use selection::{fuzzy_sector_match, get_scian_actions, SizeTier};

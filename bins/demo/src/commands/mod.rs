//! Command handlers.

mod info;
mod scenarios;
mod show;

pub use info::run_info;
pub use scenarios::run_scenarios;
pub use show::{ShowInput, run_show};

#[cfg(feature = "cli")]
pub mod config;
pub mod filters;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use filters::{title_proper, Filter, TitleProper};
pub use utils::error::{FilterError, Result};

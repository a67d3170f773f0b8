pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{LinePrompter, LocalStorage};
pub use config::interactive::collect_profile;
pub use config::profile::ProfileConfig;
pub use core::{engine::ReadmeEngine, generator::ReadmeGenerator};
pub use utils::error::{ReadmeError, Result};

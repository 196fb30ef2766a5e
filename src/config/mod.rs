#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{Cli, Command, RecommendArgs, WardrobeCommand};
pub use toml_config::AppConfig;

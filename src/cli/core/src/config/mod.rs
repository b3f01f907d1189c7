/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{CONFIG_FILE, find_orman_config, load_orman_config, parse_orman_config};
pub use types::{OrmanConfig, ProductEntry};

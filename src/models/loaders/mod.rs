pub mod bank_loader;
pub mod toml_loader;

pub use bank_loader::{load_bank, parse_bank};
pub use toml_loader::{load_config_toml, parse_config_toml};

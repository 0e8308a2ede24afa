pub mod charset;
pub mod cli;
pub mod config;
pub mod error;
pub mod harvest;
pub mod logging;
pub mod preset;
pub mod text;

pub use config::HarvestConfig;
pub use error::HarvestError;
pub use harvest::{harvest, HarvestReport, WordHarvester, WordHarvesterBuilder};
pub use preset::Preset;

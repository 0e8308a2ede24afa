use crate::harvest::{WordHarvester, WordHarvesterBuilder};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_OUTPUT: &str = "nepali_words.txt";

/// Harvest settings, as read from a TOML file. Every field is optional.
///
/// ```toml
/// urls = ["https://ekantipur.com/", "https://sahityapost.com/"]
/// output = "nepali_words.txt"
/// strict = false
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    pub urls: Vec<String>,
    pub output: PathBuf,
    pub strict: bool,
    pub timeout_secs: Option<u64>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            urls: vec![],
            output: PathBuf::from(DEFAULT_OUTPUT),
            strict: false,
            timeout_secs: None,
        }
    }
}

impl HarvestConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn into_harvester(self) -> Result<WordHarvester> {
        let mut builder = WordHarvesterBuilder::default();
        builder
            .urls(self.urls)
            .output(self.output)
            .strict(self.strict);
        if let Some(secs) = self.timeout_secs {
            builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder.build()?)
    }
}

use crate::config::HarvestConfig;
use strum::{Display, EnumString};

/// Built-in url lists, selectable by name from the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum Preset {
    /// A single page served from the local web server.
    #[default]
    #[strum(serialize = "localhost")]
    Localhost,
    /// Nepali news and literature sites.
    #[strum(serialize = "nepali")]
    Nepali,
}

const LOCALHOST_URLS: &[&str] = &["http://localhost/nepali-words.html"];

// ekantipur.com/ is listed twice and fetched twice.
const NEPALI_URLS: &[&str] = &[
    "https://ekantipur.com/entertainment",
    "https://ekantipur.com/",
    "https://nepalisahityaghar.com/",
    "https://sahityapost.com/",
    "https://ekantipur.com/",
];

impl Preset {
    pub fn urls(&self) -> &'static [&'static str] {
        match self {
            Preset::Localhost => LOCALHOST_URLS,
            Preset::Nepali => NEPALI_URLS,
        }
    }

    pub fn output(&self) -> &'static str {
        match self {
            Preset::Localhost => "output-words.txt",
            Preset::Nepali => "nepali_words.txt",
        }
    }
}

impl From<Preset> for HarvestConfig {
    fn from(preset: Preset) -> Self {
        Self {
            urls: preset.urls().iter().map(|u| u.to_string()).collect(),
            output: preset.output().into(),
            ..Default::default()
        }
    }
}

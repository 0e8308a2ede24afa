use crate::config::HarvestConfig;
use crate::preset::Preset;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Collect non-ASCII words (e.g. Nepali) from web pages into a text file.
#[derive(Debug, Parser)]
#[command(name = "word-harvest", version, about)]
pub struct Args {
    /// Pages to fetch. Replaces the url list of the config file or preset.
    pub urls: Vec<String>,

    /// File to write the words to, one per line. Truncated on every run.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML config file.
    #[arg(short, long, conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Built-in url list: "localhost" or "nepali".
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Abort when a page has HTML parse errors.
    #[arg(long)]
    pub strict: bool,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Args {
    /// Resolve the effective config: config file or preset first, then
    /// command line overrides.
    pub fn into_config(self) -> Result<HarvestConfig> {
        let mut config = match (&self.config, self.preset) {
            (Some(path), _) => HarvestConfig::load(path)?,
            (None, Some(preset)) => preset.into(),
            (None, None) => HarvestConfig::default(),
        };
        if !self.urls.is_empty() {
            config.urls = self.urls;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        config.strict |= self.strict;
        if self.timeout.is_some() {
            config.timeout_secs = self.timeout;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("word-harvest").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn positional_urls_should_be_used() {
        let config = parse(&["https://ekantipur.com/", "-o", "words.txt"])
            .into_config()
            .unwrap();
        assert_eq!(config.urls, vec!["https://ekantipur.com/"]);
        assert_eq!(config.output, Path::new("words.txt"));
        assert!(!config.strict);
    }

    #[test]
    fn preset_should_supply_urls_and_output() {
        let config = parse(&["--preset", "nepali"]).into_config().unwrap();
        assert_eq!(config, HarvestConfig::from(Preset::Nepali));
    }

    #[test]
    fn flags_should_override_preset() {
        let config = parse(&["-p", "localhost", "--strict", "--timeout", "10", "-o", "x.txt"])
            .into_config()
            .unwrap();
        assert_eq!(config.urls, Preset::Localhost.urls());
        assert_eq!(config.output, Path::new("x.txt"));
        assert!(config.strict);
        assert_eq!(config.timeout_secs, Some(10));
    }

    #[test]
    fn config_file_should_be_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("harvest.toml");
        fs::write(&path, "urls = [\"https://sahityapost.com/\"]\ntimeout_secs = 3\n").unwrap();

        let config = parse(&["-c", path.to_str().unwrap(), "--timeout", "7"])
            .into_config()
            .unwrap();
        assert_eq!(config.urls, vec!["https://sahityapost.com/"]);
        assert_eq!(config.timeout_secs, Some(7));
    }

    #[test]
    fn config_and_preset_should_conflict() {
        let result = Args::try_parse_from(["word-harvest", "-c", "a.toml", "-p", "nepali"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_preset_should_be_rejected() {
        assert!(Args::try_parse_from(["word-harvest", "-p", "english"]).is_err());
    }

    #[test]
    fn no_args_should_give_empty_url_list() {
        let config = parse(&[]).into_config().unwrap();
        assert!(config.urls.is_empty());
    }
}

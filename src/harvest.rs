use crate::charset::decode_body;
use crate::error::HarvestError;
use crate::text::{extract_text, extract_text_strict, non_ascii_words, tokenize};
use derive_builder::Builder;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WordHarvester {
    urls: Vec<String>,
    output: PathBuf,
    /// Fail the run when the HTML parser reports any error.
    #[builder(default)]
    strict: bool,
    /// Per-request timeout. No timeout when unset.
    #[builder(default, setter(into, strip_option))]
    timeout: Option<Duration>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HarvestReport {
    pub pages: usize,
    pub tokens: usize,
    pub words: usize,
}

/// Harvest `urls` into `output` with default client settings.
pub async fn harvest<I, S>(urls: I, output: impl AsRef<Path>) -> Result<HarvestReport, HarvestError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let harvester = WordHarvester {
        urls: urls.into_iter().map(Into::into).collect(),
        output: output.as_ref().to_path_buf(),
        strict: false,
        timeout: None,
    };
    harvester.harvest().await
}

impl WordHarvester {
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Fetch every url, collect the distinct tokens of all pages, then write
    /// the non-ASCII ones to the output file. Nothing is written unless every
    /// page was fetched and parsed.
    pub async fn harvest(&self) -> Result<HarvestReport, HarvestError> {
        let client = self.client()?;
        info!(
            urls = self.urls.len(),
            output = %self.output.display(),
            "starting harvest"
        );

        let mut handles = vec![];
        for url in self.urls.clone() {
            let client = client.clone();
            let strict = self.strict;
            let handle = tokio::spawn(async move {
                let html = fetch(&client, &url).await?;
                let tokens = page_tokens(&url, &html, strict)?;
                debug!(%url, bytes = html.len(), tokens = tokens.len(), "page harvested");
                Ok::<_, HarvestError>(tokens)
            });
            handles.push(handle);
        }

        let aborts = handles
            .iter()
            .map(|h| h.abort_handle())
            .collect::<Vec<_>>();
        let mut tokens = HashSet::new();
        let mut pages = 0;
        for handle in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(e.into()),
            };
            match result {
                Ok(page) => {
                    pages += 1;
                    tokens.extend(page);
                }
                Err(e) => {
                    aborts.iter().for_each(|h| h.abort());
                    return Err(e);
                }
            }
        }

        let words = write_words(&self.output, &tokens)?;
        let report = HarvestReport {
            pages,
            tokens: tokens.len(),
            words,
        };
        info!(
            pages = report.pages,
            tokens = report.tokens,
            words = report.words,
            "harvest finished"
        );
        Ok(report)
    }

    fn client(&self) -> Result<Client, HarvestError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(HarvestError::Client)
    }
}

async fn fetch(client: &Client, url: &str) -> Result<String, HarvestError> {
    let res = client
        .get(url)
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(|e| HarvestError::fetch(url, e))?;
    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = res.bytes().await.map_err(|e| HarvestError::fetch(url, e))?;
    Ok(decode_body(&body, content_type.as_deref()))
}

fn page_tokens(url: &str, html: &str, strict: bool) -> Result<Vec<String>, HarvestError> {
    let text = if strict {
        extract_text_strict(html).map_err(|message| {
            warn!(%url, %message, "html parse errors");
            HarvestError::Parse {
                url: url.to_string(),
                message,
            }
        })?
    } else {
        extract_text(html)
    };
    Ok(tokenize(&text).map(String::from).collect())
}

/// Truncate `path` and write one word per line. Returns the number of words.
fn write_words(path: &Path, tokens: &HashSet<String>) -> Result<usize, HarvestError> {
    let file = File::create(path).map_err(|e| HarvestError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut count = 0;
    for word in non_ascii_words(tokens) {
        writeln!(writer, "{}", word).map_err(|e| HarvestError::write(path, e))?;
        count += 1;
    }
    writer.flush().map_err(|e| HarvestError::write(path, e))?;
    Ok(count)
}

//! CSV loading: the single asynchronous boundary of the chart.

use std::io::Read;
use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::core::RawRow;
use crate::error::{ChartError, ChartResult};

/// Parses CSV text with a header row into ordered raw rows.
///
/// Short records are padded with empty cells and extra cells are dropped, so
/// every row carries exactly the header's columns.
pub fn read_rows(reader: impl Read) -> ChartResult<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != headers.len() {
            warn!(
                line = record.position().map(csv::Position::line),
                expected = headers.len(),
                found = record.len(),
                "ragged csv record"
            );
        }
        rows.push(record_to_row(&headers, &record));
    }
    debug!(columns = headers.len(), rows = rows.len(), "parsed csv");
    Ok(rows)
}

pub fn parse_csv_str(text: &str) -> ChartResult<Vec<RawRow>> {
    read_rows(text.as_bytes())
}

fn record_to_row(headers: &StringRecord, record: &StringRecord) -> RawRow {
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name.to_owned(), record.get(i).unwrap_or_default().to_owned()))
        .collect()
}

/// Where the chart's CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// CSV text already in memory.
    Inline(String),
    File(PathBuf),
    /// `http://` or `https://` URL; fetching needs the `http` feature.
    Http(String),
}

impl DataSource {
    /// Resolves a host attribute value: HTTP(S) URLs fetch over the network,
    /// `file://` URLs and bare paths read from disk.
    pub fn from_attribute(value: &str) -> ChartResult<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ChartError::Config(
                "data source attribute must not be empty".to_owned(),
            ));
        }
        if value.starts_with("http://") || value.starts_with("https://") {
            return Ok(Self::Http(value.to_owned()));
        }
        let path = value.strip_prefix("file://").unwrap_or(value);
        Ok(Self::File(PathBuf::from(path)))
    }

    /// Loads and parses every row of the source.
    pub async fn load_rows(&self) -> ChartResult<Vec<RawRow>> {
        match self {
            Self::Inline(text) => parse_csv_str(text),
            Self::File(path) => {
                let file = std::fs::File::open(path).map_err(|err| {
                    ChartError::Load(format!("cannot open `{}`: {err}", path.display()))
                })?;
                read_rows(std::io::BufReader::new(file))
            }
            Self::Http(url) => fetch_csv(url).await,
        }
    }
}

#[cfg(feature = "http")]
async fn fetch_csv(url: &str) -> ChartResult<Vec<RawRow>> {
    debug!(url, "fetching csv");
    let response = reqwest::get(url)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|err| ChartError::Load(format!("request to `{url}` failed: {err}")))?;
    let text = response
        .text()
        .await
        .map_err(|err| ChartError::Load(format!("reading `{url}` failed: {err}")))?;
    parse_csv_str(&text)
}

#[cfg(not(feature = "http"))]
async fn fetch_csv(url: &str) -> ChartResult<Vec<RawRow>> {
    Err(ChartError::Load(format!(
        "cannot fetch `{url}`: built without the `http` feature"
    )))
}

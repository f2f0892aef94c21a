//! Markup acquisition.
//!
//! Everything that can fail in a conversion happens here, before the tree
//! builder runs. Bytes are decoded as UTF-8 with replacement characters for
//! invalid sequences, so a readable document always converts.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
#[cfg(feature = "fetch")]
use std::time::Duration;

use log::debug;

use crate::{Html2MdError, Result};

/// Timeout for URL sources
#[cfg(feature = "fetch")]
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent sent with URL requests; some sites refuse unknown clients
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Where the markup comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Local file
    File(PathBuf),
    /// HTTP(S) resource
    Url(String),
    /// Markup given directly, or the path of a file holding it
    Literal(String),
    /// Standard input
    Stdin,
}

impl Source {
    /// Pick a source from command line style arguments.
    ///
    /// A literal string wins over a URL, which wins over an input path.
    /// No input path, or `-`, means standard input.
    pub fn from_args(input: Option<&str>, url: Option<&str>, string: Option<&str>) -> Self {
        if let Some(s) = string {
            return Source::Literal(s.to_string());
        }
        if let Some(u) = url {
            return Source::Url(u.to_string());
        }
        match input {
            None | Some("-") => Source::Stdin,
            Some(path) => Source::File(PathBuf::from(path)),
        }
    }

    /// Read and decode the markup
    pub fn read(&self) -> Result<String> {
        match self {
            Source::File(path) => read_file(path),
            Source::Url(url) => fetch(url).map(|bytes| decode(&bytes)),
            Source::Literal(s) => {
                let path = Path::new(s);
                if path.is_file() {
                    debug!("literal names an existing file, reading {}", path.display());
                    read_file(path)
                } else {
                    Ok(s.clone())
                }
            }
            Source::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .map_err(Html2MdError::Stdin)?;
                Ok(decode(&bytes))
            }
        }
    }
}

/// Decode bytes as UTF-8, dropping a BOM and replacing invalid sequences
pub fn decode(bytes: &[u8]) -> String {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        debug!("input contained invalid UTF-8; replaced with U+FFFD");
    }
    text.into_owned()
}

fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Html2MdError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(&bytes))
}

#[cfg(feature = "fetch")]
fn fetch(url: &str) -> Result<Vec<u8>> {
    use reqwest::blocking::Client;

    let http_error = |source: reqwest::Error| Html2MdError::Http {
        url: url.to_string(),
        source,
    };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(http_error)?;

    debug!("fetching {url}");
    let response = client.get(url).send().map_err(http_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(Html2MdError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().map_err(http_error)?;
    Ok(bytes.to_vec())
}

#[cfg(not(feature = "fetch"))]
fn fetch(url: &str) -> Result<Vec<u8>> {
    Err(Html2MdError::FetchDisabled(url.to_string()))
}

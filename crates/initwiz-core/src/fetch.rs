//! Blocking HTTP GET of a generated archive to a local file.
//!
//! Streams the body to `<dest>.part`, checks the response status and byte
//! count, then renames into place so the destination never holds a partial
//! body. Redirects are followed; nothing is retried.

use crate::config::WizardConfig;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str;
use std::time::Duration;
use thiserror::Error;

/// Fetch failure. Fatal to this download; callers surface it, never retry.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    #[error("GET returned HTTP {0}")]
    Http(u32),
    #[error("partial transfer: wrote {received} of {expected} bytes")]
    PartialTransfer { expected: u64, received: u64 },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Transfer knobs for the archive GET, normally built from `WizardConfig`.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_redirects: u32,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(120),
            max_redirects: 10,
            user_agent: None,
        }
    }
}

impl From<&WizardConfig> for FetchOptions {
    fn from(cfg: &WizardConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
            max_redirects: cfg.max_redirects,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// Downloads `url` to `dest` with a single GET. Returns the bytes written.
///
/// The body goes to `<dest>.part` first and is renamed only after the status
/// and byte-count checks pass; on any failure the `.part` file is removed.
pub fn fetch_archive(url: &str, dest: &Path, options: &FetchOptions) -> Result<u64, FetchError> {
    let part = part_path(dest);
    let result = fetch_to_part(url, &part, options).and_then(|written| {
        fs::rename(&part, dest)?;
        Ok(written)
    });
    match result {
        Ok(written) => {
            tracing::debug!("fetched {} bytes from {} to {}", written, url, dest.display());
            Ok(written)
        }
        Err(err) => {
            let _ = fs::remove_file(&part);
            Err(err)
        }
    }
}

fn fetch_to_part(url: &str, part: &Path, options: &FetchOptions) -> Result<u64, FetchError> {
    let file = fs::File::create(part)?;
    let mut writer = BufWriter::new(file);
    let mut written: u64 = 0;
    let mut header_lines: Vec<String> = Vec::new();
    let mut write_error: Option<io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(options.max_redirects)?;
    easy.connect_timeout(options.connect_timeout)?;
    easy.timeout(options.request_timeout)?;
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;
    if let Some(agent) = &options.user_agent {
        easy.useragent(agent)?;
    }

    let perform_result = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(line) = str::from_utf8(data) {
                header_lines.push(line.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| match writer.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(err) => {
                tracing::warn!("archive write failed: {}", err);
                write_error = Some(err);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    if let Some(err) = write_error {
        return Err(FetchError::Io(err));
    }
    perform_result?;

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|err| FetchError::Io(err.into_error()))?;
    file.sync_all()?;

    if let Some(expected) = content_length_from_headers(&header_lines) {
        if expected != written {
            return Err(FetchError::PartialTransfer {
                expected,
                received: written,
            });
        }
    }

    Ok(written)
}

/// In-progress download path: `<dest>.part`, renamed on completion.
fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}

/// Scans collected header lines for Content-Length. The last occurrence wins
/// so redirect hops don't confuse the byte count.
fn content_length_from_headers(lines: &[String]) -> Option<u64> {
    let mut content_length = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.trim().parse::<u64>() {
                    content_length = Some(n);
                }
            }
        }
    }
    content_length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_path_appends_suffix() {
        assert_eq!(
            part_path(Path::new("/tmp/work/demo.zip")),
            PathBuf::from("/tmp/work/demo.zip.part")
        );
    }

    #[test]
    fn content_length_basic() {
        let lines = [
            "HTTP/1.1 200 OK".to_string(),
            "Content-Type: application/zip".to_string(),
            "Content-Length: 4096".to_string(),
        ];
        assert_eq!(content_length_from_headers(&lines), Some(4096));
    }

    #[test]
    fn content_length_last_wins_across_redirects() {
        let lines = [
            "HTTP/1.1 302 Found".to_string(),
            "Content-Length: 0".to_string(),
            "HTTP/1.1 200 OK".to_string(),
            "Content-Length: 1234".to_string(),
        ];
        assert_eq!(content_length_from_headers(&lines), Some(1234));
    }

    #[test]
    fn content_length_missing_or_garbage() {
        let none: [String; 1] = ["HTTP/1.1 200 OK".to_string()];
        assert_eq!(content_length_from_headers(&none), None);

        let garbage = ["Content-Length: lots".to_string()];
        assert_eq!(content_length_from_headers(&garbage), None);
    }

    #[test]
    fn options_from_config() {
        let mut cfg = WizardConfig::default();
        cfg.connect_timeout_secs = 3;
        cfg.request_timeout_secs = 9;
        cfg.max_redirects = 1;
        cfg.user_agent = Some("initwiz-test".to_string());

        let options = FetchOptions::from(&cfg);
        assert_eq!(options.connect_timeout, Duration::from_secs(3));
        assert_eq!(options.request_timeout, Duration::from_secs(9));
        assert_eq!(options.max_redirects, 1);
        assert_eq!(options.user_agent.as_deref(), Some("initwiz-test"));
    }
}

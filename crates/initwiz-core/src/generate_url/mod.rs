//! Generate-request recognition and project naming.
//!
//! Recognizes the generator service's "download archive" request among the
//! URLs an embedded browser emits, and derives a safe local project name
//! from its `name` query parameter.

mod query;
mod sanitize;

pub use query::first_query_param;
pub use sanitize::sanitize_project_name;

/// Query parameter on the generate endpoint that carries the project name.
const NAME_PARAM: &str = "name";

/// A recognized "generate archive" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// The full URL to fetch, exactly as the browser issued it.
    pub url: String,
    /// Project name derived from the `name` parameter (`.zip` suffix
    /// stripped, sanitized for the filesystem).
    pub project_name: String,
}

impl GenerateRequest {
    /// File name the downloaded archive is saved under.
    pub fn archive_file_name(&self) -> String {
        format!("{}.zip", self.project_name)
    }
}

/// Decides whether `url` is a generate-archive request for `generate_path`.
///
/// The URL path must equal `generate_path` exactly (any host matches) and a
/// usable `name` parameter must be present. Returns `None` otherwise; the
/// caller treats `None` as "let the browser handle this request".
pub fn match_generate_request(url: &str, generate_path: &str) -> Option<GenerateRequest> {
    let parsed = match url::Url::parse(url) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!("ignoring unparseable request URL {:?}: {}", url, err);
            return None;
        }
    };

    if parsed.path() != generate_path {
        return None;
    }

    let name = first_query_param(&parsed, NAME_PARAM)?;
    let stem = name.strip_suffix(".zip").unwrap_or(&name);
    let project_name = sanitize_project_name(stem);
    if project_name.is_empty() {
        tracing::debug!("generate request with unusable name parameter: {}", url);
        return None;
    }

    Some(GenerateRequest {
        url: url.to_string(),
        project_name,
    })
}

//! Media path resolution.

use mockall::automock;

/// Turns stored relative media paths into absolute URLs.
#[automock]
pub trait FileResolver: Send + Sync {
    /// Resolve a relative path. An empty input resolves to an empty string.
    fn resolve(&self, relative_path: &str) -> String;
}

/// Resolves paths against a fixed base URL, such as an S3 bucket endpoint.
#[derive(Debug, Clone)]
pub struct BaseUrlFileResolver {
    base_url: String,
}

impl BaseUrlFileResolver {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();

        if !base_url.is_empty() && !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self { base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl FileResolver for BaseUrlFileResolver {
    fn resolve(&self, relative_path: &str) -> String {
        if relative_path.is_empty() {
            return String::new();
        }

        let cleaned = clean_path(relative_path.trim_start_matches('/'));

        format!("{}{cleaned}", self.base_url)
    }
}

/// Lexically normalise a relative path: collapse repeated separators, drop
/// `.` segments and fold `..` into its parent where one exists.
///
/// Segments are kept verbatim: no percent-encoding, and a leading `..` is
/// appended to the base rather than resolved against it.
fn clean_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    segments.join("/")
}

//! Document locations and reference joining
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{ResolveError, ResolverResult};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Where a schema document lives
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// A path on the local filesystem
    File(PathBuf),
    /// An `http://` or `https://` URL
    Url(Url),
}

impl Location {
    /// Parse a user- or document-supplied source string
    pub fn parse(source: &str) -> ResolverResult<Self> {
        if is_network_source(source) {
            let url = Url::parse(source).map_err(|e| ResolveError::unavailable(source, e))?;
            Ok(Self::Url(url))
        } else {
            Ok(Self::File(normalize_path(Path::new(source))))
        }
    }

    /// Resolve `reference` relative to the directory containing this location
    pub fn join(&self, reference: &str) -> ResolverResult<Self> {
        if is_network_source(reference) {
            return Self::parse(reference);
        }

        match self {
            Self::File(path) => {
                let dir = path.parent().unwrap_or_else(|| Path::new(""));
                Ok(Self::File(normalize_path(&dir.join(reference))))
            }
            Self::Url(base) => base
                .join(reference)
                .map(Self::Url)
                .map_err(|e| ResolveError::unavailable(reference, e)),
        }
    }

    /// File extension of the location, if any
    pub fn extension(&self) -> Option<String> {
        let ext = match self {
            Self::File(path) => path.extension()?.to_str()?.to_string(),
            Self::Url(url) => {
                let last = url.path_segments()?.next_back()?;
                Path::new(last).extension()?.to_str()?.to_string()
            }
        };
        Some(ext.to_lowercase())
    }

    /// Whether the location is fetched over the network
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

impl From<PathBuf> for Location {
    fn from(path: PathBuf) -> Self {
        Self::File(normalize_path(&path))
    }
}

impl From<&Path> for Location {
    fn from(path: &Path) -> Self {
        Self::File(normalize_path(path))
    }
}

fn is_network_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Lexically clean a path: drop `.` segments and fold `..` into its parent
fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                match last {
                    Some(Component::Normal(_)) => {
                        out.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => out.push(".."),
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

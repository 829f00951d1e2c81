//! Normalized path handling and logical-path derivation

use std::path::{Path, PathBuf};

use crate::constants::ELIGIBLE_EXTENSIONS;

/// A path normalized to use forward slashes internally.
///
/// Logical paths written into the configuration document must look the same
/// on every platform, so all comparisons happen on the forward-slash form and
/// conversion back to a native path only happens at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Strips Windows verbatim prefixes and converts backslashes to forward
    /// slashes.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let simplified = dunce::simplified(path.as_ref());
        let normalized = simplified.to_string_lossy().replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.is_empty() {
            segment_normalized
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// Return this path with the final extension removed.
    pub fn without_extension(&self) -> Self {
        match self.extension() {
            Some(ext) => Self {
                inner: self.inner[..self.inner.len() - ext.len() - 1].to_string(),
            },
            None => self.clone(),
        }
    }

    /// Express this path relative to `base`, component by component.
    ///
    /// Returns `None` when this path does not live under `base`. Empty and
    /// `.` components are ignored on both sides.
    pub fn relative_to(&self, base: &NormalizedPath) -> Option<Self> {
        let mut own = components(&self.inner);
        for expected in components(&base.inner) {
            if own.next()? != expected {
                return None;
            }
        }
        let rest: Vec<&str> = own.collect();
        if rest.is_empty() {
            return None;
        }
        Some(Self {
            inner: rest.join("/"),
        })
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|c| !c.is_empty() && *c != ".")
}

/// Whether a file takes part in block extraction (`.vue` or `.nvue`).
pub fn is_eligible(path: &NormalizedPath) -> bool {
    path.extension()
        .is_some_and(|ext| ELIGIBLE_EXTENSIONS.contains(&ext))
}

/// Compute the logical path of a component file.
///
/// The logical path is the file's location relative to `source_root` with
/// the component extension stripped, e.g. `src/pages/home/index.vue` under
/// `src` becomes `pages/home/index`. Returns `None` when the file lies
/// outside the source root.
pub fn logical_path(source_root: &NormalizedPath, file: &NormalizedPath) -> Option<String> {
    let relative = file.relative_to(source_root)?;
    let logical = if is_eligible(&relative) {
        relative.without_extension()
    } else {
        relative
    };
    Some(logical.inner)
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

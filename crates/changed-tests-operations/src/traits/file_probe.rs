use std::path::Path;

/// Decides whether a derived test file is present and can be run.
pub trait FileProbe: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

use std::path::Path;

use crate::traits::FileProbe;

#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemProbe;

impl FileProbe for FileSystemProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

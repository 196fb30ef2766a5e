use std::path::{Component, Path, PathBuf};

use uuid::Uuid;

use crate::domain::model::GarmentCategory;
use crate::utils::error::{Result, WardrobeError};

/// Directory of garment photos, one subdirectory per category. Files are
/// named `<uuid>_<original name>` so repeated uploads never collide.
#[derive(Debug, Clone)]
pub struct UploadArchive {
    root: PathBuf,
}

impl UploadArchive {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Copies `source` into the archive and returns where it landed.
    pub fn store(&self, source: &Path, category: GarmentCategory) -> Result<PathBuf> {
        let name = source
            .file_name()
            .and_then(|n| n.to_str())
            .map(safe_file_name)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| WardrobeError::invalid_input(format!("{} has no usable file name", source.display())))?;

        let folder = self.root.join(category.as_str());
        std::fs::create_dir_all(&folder)?;

        let target = folder.join(format!("{}_{}", Uuid::new_v4().simple(), name));
        std::fs::copy(source, &target)?;
        tracing::debug!("archived {} as {}", source.display(), target.display());
        Ok(target)
    }

    /// Deletes `path` when it is a file inside the archive. Paths elsewhere
    /// belong to the user and are left alone.
    pub fn discard<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        let path = path.as_ref();
        let escapes = path.components().any(|c| matches!(c, Component::ParentDir));
        if escapes || !path.starts_with(&self.root) || !path.is_file() {
            return Ok(false);
        }

        std::fs::remove_file(path)?;
        tracing::debug!("deleted archived photo {}", path.display());
        Ok(true)
    }
}

/// Keeps ASCII letters, digits, `.`, `-` and `_`; everything else becomes `_`.
fn safe_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    cleaned.trim_start_matches('.').to_string()
}

//! Sorted, single-level directory listing shared by the icon and property scans

use crate::errors::ManifestError;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// List the regular files directly inside `dir`, sorted by file name
///
/// Non-regular entries (directories, broken links) are skipped with a warning
/// naming `kind`. Fails when `dir` itself cannot be listed.
pub(crate) fn regular_files(dir: &Path, kind: &str) -> Result<Vec<PathBuf>, ManifestError> {
    if !dir.is_dir() {
        return Err(ManifestError::DirectoryAccess {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "not a directory or not present"),
        });
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "directory walk failed"));
                return Err(ManifestError::DirectoryAccess {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                let shown = err
                    .path()
                    .map_or_else(|| dir.display().to_string(), |p| p.display().to_string());
                warn!("{} path '{}' cannot be read ({}). Skipping", kind, shown, err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            warn!(
                "{} path '{}' is not a file. Skipping",
                kind,
                entry.path().display()
            );
            continue;
        }
        files.push(entry.into_path());
    }

    Ok(files)
}

/// File name without its last extension (`a.b.json` -> `a.b`)
pub(crate) fn base_name(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

/// Lowercased last extension
pub(crate) fn extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// File name for log messages
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_files_sorted_and_directories_skipped() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let root = temp_dir.path();
        assert!(fs::write(root.join("b.json"), "{}").is_ok());
        assert!(fs::write(root.join("a.json"), "{}").is_ok());
        assert!(fs::create_dir(root.join("nested")).is_ok());
        assert!(fs::write(root.join("nested").join("c.json"), "{}").is_ok());

        let files = regular_files(root, "Widget").unwrap_or_default();
        let names: Vec<String> = files.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_missing_directory_is_access_error() {
        let result = regular_files(Path::new("/nonexistent/widgets"), "Widget");
        assert!(matches!(result, Err(ManifestError::DirectoryAccess { .. })));
    }

    #[test]
    fn test_name_helpers() {
        let path = Path::new("widgets/my.plugin.JSON");
        assert_eq!(base_name(path).as_deref(), Some("my.plugin"));
        assert_eq!(extension(path).as_deref(), Some("json"));
        assert_eq!(display_name(path), "my.plugin.JSON");
        assert_eq!(extension(Path::new("README")), None);
    }
}

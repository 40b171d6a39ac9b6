//! File discovery.
//!
//! Expands the CLI's path arguments into the final ordered list of files to
//! lint: directories are walked recursively, empty arguments are dropped,
//! and entries are visited in name order so batch output is deterministic.
//! Nonexistent paths are kept in the list; the runner reports them as
//! per-file errors without aborting the batch.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Expand path arguments into an ordered list of candidate files.
pub fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.as_os_str().is_empty() {
            continue;
        }
        if path.is_dir() {
            collect_dir(path, &mut files);
        } else {
            files.push(path.clone());
        }
    }

    files
}

/// Recursively collect the files under a directory, in name order.
fn collect_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot read directory");
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            collect_dir(&path, files);
        } else {
            files.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn plain_files_pass_through() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.json");
        File::create(&file).unwrap();

        let files = expand_paths(&[file.clone()]);
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn directories_expand_recursively_in_name_order() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        File::create(temp.path().join("b.json")).unwrap();
        File::create(temp.path().join("a.json")).unwrap();
        File::create(temp.path().join("nested").join("c.json")).unwrap();

        let files = expand_paths(&[temp.path().to_path_buf()]);

        assert_eq!(
            files,
            vec![
                temp.path().join("a.json"),
                temp.path().join("b.json"),
                temp.path().join("nested").join("c.json"),
            ]
        );
    }

    #[test]
    fn empty_arguments_are_dropped() {
        let files = expand_paths(&[PathBuf::new(), PathBuf::from("kept.json")]);
        assert_eq!(files, vec![PathBuf::from("kept.json")]);
    }

    #[test]
    fn missing_paths_are_kept_for_error_reporting() {
        let files = expand_paths(&[PathBuf::from("no-such-file.json")]);
        assert_eq!(files, vec![PathBuf::from("no-such-file.json")]);
    }
}

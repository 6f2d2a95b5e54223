//! core/library.rs
//! Songs-root listing: immediate subdirectories as candidate beatmap sets.

use std::path::Path;

use super::error::CoreError;

/// List the immediate subdirectory names of the songs root.
///
/// No parsing happens here; every subdirectory is a candidate set until it
/// is actually selected. Plain files and nested depths are excluded. Order
/// is whatever the filesystem hands back; display ordering is the UI's call.
pub fn list_beatmap_sets(root: &Path) -> Result<Vec<String>, CoreError> {
    if root.as_os_str().is_empty() {
        return Err(CoreError::InvalidInput("empty songs root".to_string()));
    }
    if !root.is_dir() {
        return Err(CoreError::NotADirectory(root.to_path_buf()));
    }

    let entries = std::fs::read_dir(root).map_err(|e| CoreError::io(root, e))?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CoreError::io(root, e))?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            out.push(name.to_string());
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lists_subdirectories_and_excludes_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("A - B")).unwrap();
        fs::create_dir(dir.path().join("C - D")).unwrap();
        fs::write(dir.path().join("readme.txt"), b"not a set").unwrap();

        let mut sets = list_beatmap_sets(dir.path()).unwrap();
        sets.sort();

        assert_eq!(sets, vec!["A - B".to_string(), "C - D".to_string()]);
    }

    #[test]
    fn empty_root_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_beatmap_sets(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_not_a_directory() {
        let err = list_beatmap_sets(&PathBuf::from("/nonexistent/songs")).unwrap_err();
        assert!(matches!(err, CoreError::NotADirectory(_)), "{err}");
    }

    #[test]
    fn empty_root_path_is_invalid_input() {
        let err = list_beatmap_sets(Path::new("")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)), "{err}");
    }
}

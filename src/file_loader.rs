//! File loading utilities for maze description files.

use std::{fs, path::Path};

use color_eyre::eyre::{OptionExt as _, Result, WrapErr as _};
use log::{info, warn};

use crate::map::{Map, MAP_EXTENSION};

/// Scans a directory for maze files and loads them.
///
/// This function reads every `.txt` file of the directory in file name order and appends the ones
/// that parse as mazes to `maps`. Files that are not well-formed mazes are skipped with a warning;
/// failures to read the directory or a file are returned.
pub(crate) fn fetch_files(dir: &Path, maps: &mut Vec<Map>) -> Result<()> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).wrap_err_with(|| format!("failed to read {}", dir.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_dir()
            && entry
                .path()
                .extension()
                .is_some_and(|extension| extension == MAP_EXTENSION)
        {
            entries.push(entry);
        }
    }
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let contents = fs::read_to_string(entry.path())
            .wrap_err_with(|| format!("failed to read {}", entry.path().display()))?;

        match Map::new(&entry.file_name(), &contents) {
            Ok(map) => maps.push(map),
            Err(err) => warn!("skipping {}: {err:#}", entry.path().display()),
        }
    }

    info!("{} maps available from {}", maps.len(), dir.display());

    Ok(())
}

/// Loads a single maze file.
///
/// # Errors
///
/// This function may return errors if the file cannot be read, has no `.txt` extension or does
/// not contain a well-formed maze.
pub(crate) fn load_file(path: &Path) -> Result<Map> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .ok_or_eyre("maze path does not name a file")?;

    Map::new(file_name, &contents)
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf, process};

    use super::*;

    /// Creates an empty scratch directory unique to this test run.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("mazesearch-{}-{name}", process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).expect("failed to clear scratch directory");
        }
        fs::create_dir_all(&dir).expect("failed to create scratch directory");
        dir
    }

    #[test]
    fn test_fetch_files_loads_sorted_mazes() {
        let dir = scratch_dir("sorted");
        fs::write(dir.join("b-second.txt"), "A#\n B").expect("failed to write maze");
        fs::write(dir.join("a-first.txt"), "AB").expect("failed to write maze");

        let mut maps = vec![Map::default()];
        fetch_files(&dir, &mut maps).expect("fetching should succeed");
        let keys: Vec<&str> = maps.iter().map(|map| map.key.as_str()).collect();

        assert_eq!(
            keys,
            vec!["Default", "a-first", "b-second"],
            "files should follow existing maps in name order"
        );
        fs::remove_dir_all(&dir).expect("failed to clean up scratch directory");
    }

    #[test]
    fn test_fetch_files_skips_other_files() {
        let dir = scratch_dir("skips");
        fs::write(dir.join("broken.txt"), "no markers here").expect("failed to write maze");
        fs::write(dir.join("notes.md"), "AB").expect("failed to write file");
        fs::create_dir(dir.join("nested.txt")).expect("failed to create directory");
        fs::write(dir.join("good.txt"), "A B").expect("failed to write maze");

        let mut maps = Vec::new();
        fetch_files(&dir, &mut maps).expect("fetching should succeed");

        assert_eq!(maps.len(), 1, "only the well-formed maze file should load");
        assert_eq!(
            maps.first().map(|map| map.key.as_str()),
            Some("good"),
            "the loaded map should be keyed by file stem"
        );
        fs::remove_dir_all(&dir).expect("failed to clean up scratch directory");
    }

    #[test]
    fn test_fetch_files_missing_directory() {
        let dir = env::temp_dir().join(format!("mazesearch-{}-absent", process::id()));

        let result = fetch_files(&dir, &mut Vec::new());

        assert!(result.is_err(), "a missing directory should be an error");
    }

    #[test]
    fn test_load_file() {
        let dir = scratch_dir("load");
        let path = dir.join("single.txt");
        fs::write(&path, "A.#\n..#\n#.B\n").expect("failed to write maze");

        let map = load_file(&path).expect("loading should succeed");

        assert_eq!(map.key, "single", "key should be the file stem");
        assert_eq!(map.maze.height(), 3, "maze should be parsed");
        assert!(
            load_file(&dir.join("absent.txt")).is_err(),
            "a missing file should be an error"
        );
        fs::remove_dir_all(&dir).expect("failed to clean up scratch directory");
    }

    #[test]
    fn test_load_file_malformed() {
        let dir = scratch_dir("malformed");
        let path = dir.join("broken.txt");
        fs::write(&path, "...\n..B").expect("failed to write maze");

        let result = load_file(&path);

        assert!(result.is_err(), "a maze without start should be an error");
        fs::remove_dir_all(&dir).expect("failed to clean up scratch directory");
    }

    #[test]
    fn test_bundled_mazes_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("mazes");

        let mut maps = Vec::new();
        fetch_files(&dir, &mut maps).expect("bundled mazes should load");

        assert_eq!(maps.len(), 4, "every bundled maze should be well-formed");
    }
}

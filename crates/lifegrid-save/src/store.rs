//! Save storage backends.
//!
//! [`SaveStore`] is the seam between save dialogs and wherever save
//! files actually live. [`DirStore`] keeps them as `*.save.json` files
//! in one directory; tests substitute an in-memory store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SaveError;

/// File-name suffix of every save.
pub const SAVE_EXTENSION: &str = ".save.json";

/// Append [`SAVE_EXTENSION`] to a user-chosen save name.
pub fn save_file_name(stem: &str) -> String {
    format!("{stem}{SAVE_EXTENSION}")
}

/// Storage for serialized saves, addressed by file name.
pub trait SaveStore {
    /// Names of all saves in the store, sorted.
    fn list(&self) -> Result<Vec<String>, SaveError>;

    /// Contents of the save called `name`.
    fn read(&self, name: &str) -> Result<String, SaveError>;

    /// Create or overwrite the save called `name`.
    fn write(&self, name: &str, contents: &str) -> Result<(), SaveError>;
}

impl<S: SaveStore + ?Sized> SaveStore for &S {
    fn list(&self) -> Result<Vec<String>, SaveError> {
        (**self).list()
    }

    fn read(&self, name: &str) -> Result<String, SaveError> {
        (**self).read(name)
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), SaveError> {
        (**self).write(name, contents)
    }
}

/// A [`SaveStore`] backed by a directory on disk.
#[derive(Clone, Debug)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Use `dir` for saves. It is created on first write if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory saves are kept in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_of(&self, name: &str) -> Result<PathBuf, SaveError> {
        let escapes = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(&['/', '\\'][..])
            || name.contains("..");
        if escapes {
            return Err(SaveError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(self.dir.join(name))
    }
}

impl SaveStore for DirStore {
    fn list(&self) -> Result<Vec<String>, SaveError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(SAVE_EXTENSION) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<String, SaveError> {
        let path = self.path_of(name)?;
        if !path.is_file() {
            return Err(SaveError::NotFound {
                name: name.to_string(),
            });
        }
        Ok(fs::read_to_string(path)?)
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), SaveError> {
        let path = self.path_of(name)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, contents)?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote save file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_file_name_appends_extension() {
        assert_eq!(save_file_name("testsave1"), "testsave1.save.json");
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DirStore::new(tmp.path().join("absent"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn lists_only_save_files_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DirStore::new(tmp.path());
        store.write("b.save.json", "{}").unwrap();
        store.write("a.save.json", "{}").unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(tmp.path().join("dir.save.json")).unwrap();

        assert_eq!(store.list().unwrap(), vec!["a.save.json", "b.save.json"]);
    }

    #[test]
    fn write_then_read() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DirStore::new(tmp.path().join("nested"));
        store.write("x.save.json", "payload").unwrap();
        assert_eq!(store.read("x.save.json").unwrap(), "payload");
    }

    #[test]
    fn read_missing_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DirStore::new(tmp.path());
        assert!(matches!(
            store.read("nope.save.json"),
            Err(SaveError::NotFound { .. })
        ));
    }

    #[test]
    fn rejects_escaping_names() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DirStore::new(tmp.path());
        for name in ["", "..", "../x.save.json", "a/b.save.json", "a\\b"] {
            assert!(
                matches!(store.write(name, "x"), Err(SaveError::InvalidName { .. })),
                "{name:?} accepted"
            );
        }
    }
}

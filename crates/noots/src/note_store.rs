// Chunk: docs/chunks/note_store - One plain text file per note
//!
//! Flat-file note persistence.
//!
//! Every note is a UTF-8 file `<title>.noot` directly under the note root.
//! The store keeps no state besides the root path: titles are listed by
//! scanning the directory and bodies are read on demand.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File extension of note files, without the leading dot.
pub const NOTE_EXTENSION: &str = "noot";

/// Errors from reading or writing a single note.
#[derive(Debug, Error)]
pub enum NoteError {
    /// The title is empty or no file exists for it.
    #[error("note not found: {title:?}")]
    NotFound { title: String },

    /// The title cannot be used as a file name.
    #[error("invalid note title: {title:?}")]
    InvalidTitle { title: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Replaces whitespace with underscores after trimming the ends.
///
/// This is the form used both for matching and for the file name on save, so
/// `"my note"` typed in the search line finds and writes `my_note.noot`.
pub fn normalize_title(title: &str) -> String {
    title
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Reads and writes notes under a single root directory.
#[derive(Debug, Clone)]
pub struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists the titles of all notes, sorted ascending.
    ///
    /// Directories, dotfiles and files without the note extension are skipped.
    /// An unreadable root yields an empty list.
    pub fn list_titles(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(root = %self.root.display(), %err, "note directory unreadable");
                return Vec::new();
            }
        };

        let suffix = format!(".{NOTE_EXTENSION}");
        let mut titles: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !name.starts_with('.'))
            .filter_map(|name| name.strip_suffix(&suffix).map(str::to_string))
            .filter(|title| !title.is_empty())
            .collect();
        titles.sort();
        titles
    }

    /// Reads the body of the note called `title`.
    ///
    /// The title is used as listed, without normalization, so notes created by
    /// other tools with spaces in their names still load.
    pub fn read(&self, title: &str) -> Result<String, NoteError> {
        if title.is_empty() {
            return Err(NoteError::NotFound {
                title: String::new(),
            });
        }
        let path = self.note_path(title)?;
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => NoteError::NotFound {
                title: title.to_string(),
            },
            _ => NoteError::Io { path, source },
        })
    }

    /// Creates or overwrites the note for `title` and returns its path.
    ///
    /// The title is normalized first. Content goes to a sibling `.tmp` file
    /// that is renamed over the target, so a failed write never leaves a
    /// truncated note behind.
    pub fn write(&self, title: &str, content: &str) -> Result<PathBuf, NoteError> {
        self.overwrite(&normalize_title(title), content)
    }

    /// Like [`write`](Self::write) but keeps `title` as given.
    ///
    /// Used for notes already in the title list, whose file names may not be
    /// in normalized form.
    pub fn overwrite(&self, title: &str, content: &str) -> Result<PathBuf, NoteError> {
        let path = self.note_path(title)?;
        let temp_path = path.with_extension(format!("{NOTE_EXTENSION}.tmp"));

        fs::write(&temp_path, content).map_err(|source| NoteError::Io {
            path: temp_path.clone(),
            source,
        })?;
        if let Err(source) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(NoteError::Io { path, source });
        }
        Ok(path)
    }

    /// Path of the file backing `title`.
    pub fn note_path(&self, title: &str) -> Result<PathBuf, NoteError> {
        let invalid = title.is_empty()
            || title.starts_with('.')
            || title.contains(|c: char| matches!(c, '/' | '\\' | '\0'));
        if invalid {
            return Err(NoteError::InvalidTitle {
                title: title.to_string(),
            });
        }
        Ok(self.root.join(format!("{title}.{NOTE_EXTENSION}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, NoteStore) {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::new(dir.path());
        (dir, store)
    }

    // =========================================================================
    // normalize_title
    // =========================================================================

    #[test]
    fn test_normalize_replaces_inner_whitespace() {
        assert_eq!(normalize_title("my note"), "my_note");
        assert_eq!(normalize_title("a\tb c"), "a_b_c");
    }

    #[test]
    fn test_normalize_trims_ends() {
        assert_eq!(normalize_title("  padded  "), "padded");
        assert_eq!(normalize_title("   "), "");
    }

    // =========================================================================
    // list_titles
    // =========================================================================

    #[test]
    fn test_list_titles_strips_extension_and_sorts() {
        let (dir, store) = store();
        for name in ["zebra.noot", "apple.noot", "mango.noot"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        assert_eq!(store.list_titles(), vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_list_titles_skips_other_entries() {
        let (dir, store) = store();
        fs::write(dir.path().join("keep.noot"), "").unwrap();
        fs::write(dir.path().join("readme.txt"), "").unwrap();
        fs::write(dir.path().join(".hidden.noot"), "").unwrap();
        fs::write(dir.path().join("draft.noot.tmp"), "").unwrap();
        fs::create_dir(dir.path().join("folder.noot")).unwrap();
        assert_eq!(store.list_titles(), vec!["keep"]);
    }

    #[test]
    fn test_list_titles_missing_root_is_empty() {
        let (dir, _) = store();
        let store = NoteStore::new(dir.path().join("does-not-exist"));
        assert!(store.list_titles().is_empty());
    }

    // =========================================================================
    // read / write
    // =========================================================================

    #[test]
    fn test_write_then_read_round_trips() {
        let (_dir, store) = store();
        let body = "line one\nline two\n\ttabbed ünïcode\n";
        store.write("journal", body).unwrap();
        assert_eq!(store.read("journal").unwrap(), body);
    }

    #[test]
    fn test_write_normalizes_title() {
        let (dir, store) = store();
        let path = store.write("my note", "hello").unwrap();
        assert_eq!(path, dir.path().join("my_note.noot"));
        assert!(path.exists());
        assert_eq!(store.list_titles(), vec!["my_note"]);
    }

    #[test]
    fn test_write_overwrites_in_place() {
        let (_dir, store) = store();
        store.write("todo", "first").unwrap();
        store.write("todo", "second").unwrap();
        assert_eq!(store.read("todo").unwrap(), "second");
        assert_eq!(store.list_titles(), vec!["todo"]);
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let (dir, store) = store();
        store.write("clean", "body").unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("clean.noot")]);
    }

    #[test]
    fn test_write_into_missing_directory_is_io_error() {
        let (dir, _) = store();
        let store = NoteStore::new(dir.path().join("missing"));
        let err = store.write("note", "body").unwrap_err();
        assert!(matches!(err, NoteError::Io { .. }));
    }

    #[test]
    fn test_write_rejects_unusable_titles() {
        let (_dir, store) = store();
        for title in ["", "   ", "../escape", "a/b", ".hidden"] {
            let err = store.write(title, "x").unwrap_err();
            assert!(
                matches!(err, NoteError::InvalidTitle { .. }),
                "title {title:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_overwrite_keeps_listed_title() {
        let (dir, store) = store();
        fs::write(dir.path().join("with space.noot"), "old").unwrap();
        let path = store.overwrite("with space", "new").unwrap();
        assert_eq!(path, dir.path().join("with space.noot"));
        assert_eq!(store.read("with space").unwrap(), "new");
        assert_eq!(store.list_titles(), vec!["with space"]);
    }

    #[test]
    fn test_read_nonexistent_is_not_found() {
        let (_dir, store) = store();
        let err = store.read("nonexistent").unwrap_err();
        assert!(matches!(err, NoteError::NotFound { ref title } if title == "nonexistent"));
    }

    #[test]
    fn test_read_empty_title_is_not_found() {
        let (_dir, store) = store();
        assert!(matches!(store.read(""), Err(NoteError::NotFound { .. })));
    }

    #[test]
    fn test_read_uses_title_verbatim() {
        let (dir, store) = store();
        fs::write(dir.path().join("with space.noot"), "external").unwrap();
        assert_eq!(store.list_titles(), vec!["with space"]);
        assert_eq!(store.read("with space").unwrap(), "external");
    }
}

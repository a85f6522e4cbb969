// Chunk: docs/chunks/external_editor - Hand a note to the user's editor
//! Single-quote shell escaping for note paths.

/// Wraps `path` in single quotes so `sh -c` sees it as one word.
///
/// Embedded single quotes become `'\''` (close, escaped quote, reopen).
pub fn shell_escape_path(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len() + 2);
    escaped.push('\'');
    for c in path.chars() {
        if c == '\'' {
            escaped.push_str("'\\''");
        } else {
            escaped.push(c);
        }
    }
    escaped.push('\'');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_note_path() {
        assert_eq!(
            shell_escape_path("/home/me/notes/todo.noot"),
            "'/home/me/notes/todo.noot'"
        );
    }

    #[test]
    fn test_note_title_with_quote() {
        assert_eq!(
            shell_escape_path("/notes/mom's_recipes.noot"),
            "'/notes/mom'\\''s_recipes.noot'"
        );
    }

    #[test]
    fn test_directory_with_spaces_and_dollar() {
        assert_eq!(
            shell_escape_path("/My Notes/$HOME.noot"),
            "'/My Notes/$HOME.noot'"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(shell_escape_path(""), "''");
    }
}

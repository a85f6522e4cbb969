// Chunk: docs/chunks/help_text - Static help and footer text

/// Figlet rendering of the program name.
pub const LOGO: &str = r"    _   __            __
   / | / /___  ____  / /______
  /  |/ / __ \/ __ \/ __/ ___/
 / /|  / /_/ / /_/ / /_(__  )
/_/ |_/\____/\____/\__/____/";

const KEYS: &str = "\
Ctrl-D anytime to save current note.
Ctrl-P to focus search/title bar.
Ctrl-E to focus note editor.
Ctrl-O to open the note in your editor.
Esc to clear, Ctrl-Q to quit.";

/// Footer line under the note body.
pub const FOOTER: &str = "Noots  |  (?) help menu";

/// Logo followed by the key summary.
pub fn help_text() -> String {
    format!("{LOGO}\n\n{KEYS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_starts_with_logo_and_lists_keys() {
        let text = help_text();
        assert!(text.starts_with(LOGO));
        assert!(text.contains("Ctrl-D"));
        assert!(text.contains("Ctrl-E"));
        assert!(text.contains("Ctrl-P"));
    }
}

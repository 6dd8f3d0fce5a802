use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;

use crate::clean::CleanMode;
use crate::Clipboard;

/// Where a cleaned script goes: clipboard (copy), file (download), stdout
#[derive(Debug, Clone, Default)]
pub struct IoOptions {
    pub clipboard: bool,
    pub file: Option<String>,
    pub quiet: bool,
}

impl IoOptions {
    /// Create IoOptions from command line arguments
    pub fn new(clipboard: bool, file: Option<&str>, quiet: bool) -> Self {
        Self {
            clipboard,
            file: file.map(|s| s.to_string()),
            quiet,
        }
    }

    /// Deliver cleaned content to every requested destination
    pub fn deliver(&self, content: &str, mode: CleanMode, start: Instant) -> Result<()> {
        let is_tty = std::env::var("YTCREATOR_TEST_MODE")
            .map(|v| v == "tty")
            .unwrap_or_else(|_| std::io::stdout().is_terminal());

        let mut clipboard_success = false;
        if self.clipboard {
            let mut clipboard_handler = Clipboard::new();
            clipboard_success = clipboard_handler.copy_to_clipboard(content)?;
            if !self.quiet {
                if clipboard_success {
                    eprintln!("Copied to clipboard ({}ms)", start.elapsed().as_millis());
                } else {
                    eprintln!("Clipboard unavailable - showing content below:");
                }
            }
        }

        if let Some(path) = &self.file {
            let file_path = self.resolve_file_path(path, mode);
            std::fs::write(&file_path, with_trailing_newline(content))
                .with_context(|| format!("Failed to write '{}'", file_path.display()))?;
            if !self.quiet {
                eprintln!(
                    "Wrote to '{}' ({}ms)",
                    file_path.display(),
                    start.elapsed().as_millis()
                );
            }
        }

        if self.should_print(is_tty, clipboard_success) {
            println!("{}", content);
        }

        Ok(())
    }

    fn should_print(&self, is_tty: bool, clipboard_success: bool) -> bool {
        if !self.has_output_operations() {
            return true;
        }
        if self.file.is_some() && !self.clipboard {
            // downloading: stdout stays clean unless piped
            return !is_tty;
        }
        if self.clipboard {
            return !clipboard_success || !is_tty;
        }
        true
    }

    /// Check if any output operations are specified
    pub fn has_output_operations(&self) -> bool {
        self.clipboard || self.file.is_some()
    }

    /// An empty path asks for a generated name next to the current directory
    fn resolve_file_path(&self, path: &str, mode: CleanMode) -> PathBuf {
        if path.is_empty() {
            PathBuf::from(smart_filename(mode))
        } else {
            PathBuf::from(path)
        }
    }
}

/// File name used when `-f` is given without a path
pub fn smart_filename(mode: CleanMode) -> String {
    format!("script-{}.txt", mode)
}

fn with_trailing_newline(content: &str) -> String {
    if content.is_empty() || content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{}\n", content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_io_options_creation() {
        let opts = IoOptions::new(true, Some("script.txt"), false);
        assert!(opts.clipboard);
        assert_eq!(opts.file, Some("script.txt".to_string()));
        assert!(!opts.quiet);
    }

    #[test]
    fn test_should_print() {
        // plain run prints everywhere
        let opts = IoOptions::new(false, None, false);
        assert!(opts.should_print(true, false));
        assert!(opts.should_print(false, false));

        // file only: print only when piped
        let opts = IoOptions::new(false, Some("out.txt"), false);
        assert!(!opts.should_print(true, false));
        assert!(opts.should_print(false, false));

        // clipboard: fall back to printing when the copy failed
        let opts = IoOptions::new(true, None, false);
        assert!(!opts.should_print(true, true));
        assert!(opts.should_print(true, false));
        assert!(opts.should_print(false, true));
    }

    #[test]
    fn test_has_output_operations() {
        assert!(!IoOptions::new(false, None, false).has_output_operations());
        assert!(IoOptions::new(true, None, false).has_output_operations());
        assert!(IoOptions::new(false, Some(""), false).has_output_operations());
    }

    #[test]
    fn test_smart_filename() {
        assert_eq!(smart_filename(CleanMode::Basic), "script-basic.txt");
        let opts = IoOptions::new(false, Some(""), true);
        assert_eq!(
            opts.resolve_file_path("", CleanMode::Enhanced),
            PathBuf::from("script-enhanced.txt")
        );
        assert_eq!(
            opts.resolve_file_path("voiceover.txt", CleanMode::Enhanced),
            PathBuf::from("voiceover.txt")
        );
    }

    #[test]
    fn test_deliver_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clean.txt");
        let opts = IoOptions::new(false, Some(path.to_str().unwrap()), true);
        opts.deliver("Hello there", CleanMode::Basic, Instant::now())
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Hello there\n");
    }
}

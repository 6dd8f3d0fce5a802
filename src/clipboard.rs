//! System clipboard integration
//!
//! Backs the "copy clean script" action. The clipboard is optional: headless
//! machines have none, and callers fall back to printing.

use anyhow::Result;
use copypasta::{ClipboardContext, ClipboardProvider};

pub struct Clipboard {
    context: Option<ClipboardContext>,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard {
    pub fn new() -> Self {
        // A missing display server is not an error here
        let context = ClipboardContext::new().ok();
        Self { context }
    }

    pub fn is_available(&self) -> bool {
        self.context.is_some()
    }

    /// Copy `content`; `Ok(false)` means no clipboard is available
    pub fn copy_to_clipboard(&mut self, content: &str) -> Result<bool> {
        match self.context {
            Some(ref mut ctx) => {
                ctx.set_contents(content.to_string())
                    .map_err(|e| anyhow::anyhow!("Failed to copy to clipboard: {}", e))?;
                tracing::debug!(chars = content.len(), "Copied to clipboard");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_creation() {
        // Must not panic on machines without a clipboard
        let clipboard = Clipboard::new();
        let _ = clipboard.is_available();
    }
}

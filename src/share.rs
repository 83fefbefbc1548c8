//! Sharing the currently displayed quote.
//!
//! Fire-and-forget by design: when a share command is configured it is
//! spawned detached and its outcome is never observed; otherwise the
//! composed text goes to the system clipboard and success is only logged.
//! No share failure is ever shown to the user.

use std::process::{Command, Stdio};

use arboard::Clipboard;
use tracing::{debug, info};

/// Title handed to an external share command.
pub const SHARE_TITLE: &str = "Inspirational Quote";

/// Compose the shareable string for a quote.
pub fn compose_share_text(content: &str, author: &str) -> String {
    format!("\"{content}\" - {author}")
}

/// Dispatches share requests to an external command or the clipboard.
///
/// The clipboard connection is opened on the first clipboard share and then
/// held for the rest of the session: on X11/Wayland the copied text is
/// hosted by the `Clipboard` instance and vanishes for other applications
/// once that instance is dropped.
pub struct QuoteSharer {
    command: Option<String>,
    page_url: String,
    clipboard: Option<Clipboard>,
}

impl QuoteSharer {
    /// `command` is the optional platform share capability; `page_url` is
    /// passed along as the quote's provenance.
    pub fn new(command: Option<String>, page_url: String) -> Self {
        Self {
            command,
            page_url,
            clipboard: None,
        }
    }

    /// Share `content`/`author` as one composed string.
    pub fn share(&mut self, content: &str, author: &str) {
        let text = compose_share_text(content, author);

        if let Some(command) = &self.command {
            match Command::new(command)
                .arg(SHARE_TITLE)
                .arg(&text)
                .arg(&self.page_url)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(_) => debug!(command, "share command spawned"),
                Err(err) => debug!(command, error = %err, "share command failed to spawn"),
            }
            return;
        }

        // A failed open is retried on the next share; headless sessions
        // simply log and move on.
        if self.clipboard.is_none() {
            match Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(err) => {
                    debug!(error = %err, "clipboard unavailable");
                    return;
                }
            }
        }
        if let Some(clipboard) = &mut self.clipboard {
            match clipboard.set_text(text) {
                Ok(()) => info!("quote copied to clipboard"),
                Err(err) => debug!(error = %err, "clipboard write failed"),
            }
        }
    }
}

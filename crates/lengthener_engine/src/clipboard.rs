use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Write access to a text clipboard. Implementations may block.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating-system clipboard, opened on first use.
///
/// The `arboard` handle is kept alive afterwards; on X11 the copied text is
/// only served while its owner exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;

        if guard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
            *guard = Some(clipboard);
        }

        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|err| ClipboardError::WriteFailed(err.to_string())),
            None => Err(ClipboardError::Unavailable("clipboard not initialized".to_string())),
        }
    }
}

/// In-process clipboard that records the last written text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: Mutex<Option<String>>,
    fail_with: Option<ClipboardError>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `error`.
    pub fn failing(error: ClipboardError) -> Self {
        Self {
            content: Mutex::new(None),
            fail_with: Some(error),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.content.lock().ok().and_then(|content| content.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        let mut content = self
            .content
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;
        *content = Some(text.to_owned());
        Ok(())
    }
}

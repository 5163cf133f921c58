//! Lengthener engine: executes core effects against HTTP, the clipboard and timers.
mod api;
mod clipboard;
mod engine;
mod settings;
mod types;

pub use api::{LengthenApi, ReqwestLengthenApi, LENGTHEN_PATH};
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use engine::EngineHandle;
pub use settings::{ApiSettings, SettingsError, API_URL_ENV, DEFAULT_API_URL};
pub use types::{AckId, ApiError, EngineError, EngineEvent, FailureKind, RequestId};

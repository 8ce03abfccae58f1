//! Dialog components emulating browser `alert`, `confirm` and `prompt`
//!
//! `SimpleDialog` is the generic renderer: it takes an ordered list of
//! button descriptors and owns the inline messages their handlers return.
//! `AlertDialog`, `ConfirmDialog` and `PromptDialog` are compositions over
//! it that map their buttons onto a fixed `on_close` payload.
//!
//! Visibility is owned by the parent: a dialog is shown for as long as it is
//! mounted and the parent drops it once `on_close` fires.

pub mod alert;
pub mod button;
pub mod confirm;
pub mod message;
pub mod prompt;
pub mod simple;
pub mod types;

pub use alert::{AlertDialog, AlertDialogProps};
pub use button::{ButtonEvent, ButtonKind, DialogButton, Navigator, SystemBrowser, Trigger};
pub use confirm::{ConfirmDialog, ConfirmDialogProps};
pub use message::{Message, MessageSeverity};
pub use prompt::{PromptDialog, PromptDialogProps, TextFieldOverrides};
pub use simple::{SimpleDialog, SimpleDialogProps};
pub use types::*;

//! Drag-and-drop overlay component for Dioxus apps.
//!
//! [`DropZone`] covers the viewport while a file drag is over the page,
//! validates dropped files against a MIME-type list and a size limit, and
//! reports the outcome through `on_process` and `on_error`.

pub mod classify;
pub mod config;
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod listener;
pub mod notify;
pub mod overlay;

mod component;

pub use classify::{classify, Classification};
pub use component::*;
pub use config::{ConfigError, DropZoneConfig};
pub use file::{DroppedFile, FileDescriptor};
pub use notify::{DropNotification, ErrorResult, ProcessResult};
pub use overlay::{OverlayEvent, Visibility};

/*
[INPUT]:  Public API exports for taskdeck-app crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod controller;
pub mod notify;
pub mod poller;
pub mod tui;

// Re-export main types for convenience
pub use config::AppConfig;
pub use controller::{ConfirmPrompt, Confirmed, StaticAnswer, TaskBoard, TaskFilter};
pub use notify::{NotificationCenter, Severity};
pub use poller::{PollEvent, PollerHandle};

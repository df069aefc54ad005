/*
[INPUT]:  Board state, poll events, and log buffer
[OUTPUT]: Ratatui-based TUI for the task board, health, and logs
[POS]:    TUI module root
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{
    run_tui_with_log, LogBuffer, LogBufferHandle, LogWriter, LogWriterFactory, LOG_BUFFER_CAPACITY,
};

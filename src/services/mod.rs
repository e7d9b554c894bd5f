//! Process-level services: log locations, tracing and terminal modes

pub mod log_dirs;
#[cfg(feature = "runtime")]
pub mod terminal_modes;
#[cfg(feature = "runtime")]
pub mod tracing_setup;

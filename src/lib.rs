//! Desktop client for a remote breast-cancer cell classification service.

/// Application directories under the user's config dir.
pub mod app_dirs;
/// Persisted client settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent and retry helpers.
pub mod http_client;
/// Tracing subscriber setup and log file rotation.
pub mod logging;
/// Classification service client.
pub mod service;
/// Session state machine for the sample board.
pub mod session;

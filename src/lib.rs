//! ink!jet
//!
//! A browser-based editor for ink! smart contracts: a title banner, a code
//! editor pane and a chat panel, rendered server-side and served over HTTP.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server serving the page and static assets
//! - **UI**: Leptos SSR components, a `<code-editor>` Web Component hosting Monaco
//! - **Editor**: Widget capability trait, options and log-only lifecycle hooks
//!
//! # Modules
//!
//! - [`chat`]: Chat message records and fixtures
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`editor`]: Editor widget abstraction and lifecycle hooks
//! - [`error`]: Server error type
//! - [`server`]: Router and handlers
//! - [`telemetry`]: Logging setup
//! - [`ui`]: Page components

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

pub mod chat;
pub mod config;
pub mod editor;
pub mod error;
pub mod server;
pub mod telemetry;
pub mod ui;

use crate::config::AppConfig;
use crate::editor::EditorHooks;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Rendered editor page. Rendering depends only on configuration, so it
    /// happens once.
    pub page: Arc<str>,
    /// Lifecycle handlers of the code editor pane.
    pub hooks: EditorHooks,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let page = ui::render_page(&config);
        Self {
            page: Arc::from(page),
            hooks: EditorHooks::new(),
            config,
        }
    }
}

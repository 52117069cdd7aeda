//! UI components and layouts.
//!
//! Leptos SSR components for the editor page, following ShadCN-UI design
//! principles.
//!
//! # Structure
//!
//! - [`app`]: Page root and HTML shell
//! - [`header`]: Title banner
//! - [`editor`]: Code editor pane
//! - [`chat`]: Chat history panel
//! - [`terminal`]: Reserved terminal region
//! - [`components`]: Reusable ShadCN-style UI components

pub mod app;
pub mod chat;
pub mod components;
pub mod editor;
pub mod header;
pub mod terminal;

pub use app::{App, render_page};


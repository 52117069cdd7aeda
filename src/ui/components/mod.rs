//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable, accessible UI components
//! inspired by shadcn/ui, rendered via Leptos SSR and styled by
//! `static/app.css`.
//!
//! # Components
//!
//! - [`Button`]: Clickable button, optionally posting to a URL
//! - [`Card`], [`CardHeader`], [`CardContent`], [`CardFooter`]: Card container
//! - [`Input`]: Text input field
//! - [`Select`]: Native dropdown
//! - [`Badge`]: Label pill
//! - [`ScrollArea`]: Scrollable container
//! - [`Separator`]: Visual separator line
//! - [`icons`]: SVG icon components

mod badge;
mod button;
mod card;
mod icons;
mod input;
mod scroll_area;
mod select;
mod separator;

pub use badge::Badge;
pub use button::Button;
pub use card::{Card, CardContent, CardFooter, CardHeader};
pub use icons::*;
pub use input::Input;
pub use scroll_area::ScrollArea;
pub use select::Select;
pub use separator::Separator;

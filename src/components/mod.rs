//! UI Components
//!
//! Leptos islands mounted into the server-rendered dashboard pages.

mod island;
mod list_entry;
mod pagination_strip;
mod placeholder;
mod sprite_icon;
mod task_row;

pub mod builders_view;
pub mod creation_dialog;
pub mod jobs_view;
pub mod namespaces_view;
pub mod summit_list;
pub mod timeline;

pub use creation_dialog::DialogController;

//! UI Components
//!
//! Leptos components for the header, forms and nested list view.

mod header;
mod list_section;
mod new_list_form;
mod new_todo_form;
mod status_banner;
mod todo_row;

pub use header::Header;
pub use list_section::ListSection;
pub use new_list_form::NewListForm;
pub use new_todo_form::NewTodoForm;
pub use status_banner::StatusBanner;
pub use todo_row::TodoRow;

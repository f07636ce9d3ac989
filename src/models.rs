//! Frontend Models
//!
//! Records come from the client crate; drafts hold raw form input.

pub use tododoo_client::{List, NewTodo, Todo};

/// Todo form contents before submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoDraft {
    pub title: String,
    pub deadline: String,
    pub content: String,
    /// `None` until the user touches the list selector
    pub list_id: Option<String>,
}

impl TodoDraft {
    /// The list the selector currently shows: the chosen one while it is still
    /// offered, else the first list
    pub fn selected_list_id(&self, lists: &[List]) -> String {
        self.list_id
            .as_deref()
            .and_then(|id| lists.iter().find(|list| list.id == id))
            .or_else(|| lists.first())
            .map(|list| list.id.clone())
            .unwrap_or_default()
    }

    pub fn to_new_todo(&self, lists: &[List]) -> NewTodo {
        NewTodo::new(
            self.title.clone(),
            self.selected_list_id(lists),
            self.deadline.clone(),
            self.content.clone(),
        )
    }

    /// Clear text inputs after a successful create; the selection stays
    pub fn reset_inputs(&mut self) {
        self.title.clear();
        self.deadline.clear();
        self.content.clear();
    }
}

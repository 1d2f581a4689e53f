use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Session-unique identifier of a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Seq(u64),
    Uuid(Uuid),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seq(n) => write!(f, "{}", n),
            Self::Uuid(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    id: TodoId,
    text: String,
    completed: bool,
}

impl TodoItem {
    pub fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// The ordered list of todos. New items go to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoState {
    pub(crate) todos: Vec<TodoItem>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.todos.iter()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|item| item.is_completed()).count()
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.todos.iter().any(|item| item.id == id)
    }
}

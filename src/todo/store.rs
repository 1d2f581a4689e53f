use super::ids::{IdSource, IdStrategy};
use super::intent::Intent;
use super::models::{TodoItem, TodoState};
use tracing::debug;

/// Applies one intent to `state` and returns the resulting state.
///
/// Deleting or toggling an id that is not present, and any unknown intent,
/// return the state unchanged.
pub fn reduce(mut state: TodoState, intent: Intent, ids: &mut IdSource) -> TodoState {
    match intent {
        Intent::Add(text) => {
            state.todos.push(TodoItem::new(ids.next_id(), text));
        }
        Intent::Delete(id) => {
            state.todos.retain(|item| item.id() != id);
        }
        Intent::Toggle(id) => {
            if let Some(item) = state.todos.iter_mut().find(|item| item.id() == id) {
                item.toggle();
            }
        }
        Intent::Unknown => {}
    }
    state
}

/// Owns the current todo list for a session. All changes go through
/// [`TodoStore::dispatch`].
#[derive(Debug)]
pub struct TodoStore {
    state: TodoState,
    ids: IdSource,
}

impl TodoStore {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            state: TodoState::new(),
            ids: IdSource::new(strategy),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn into_state(self) -> TodoState {
        self.state
    }

    pub fn dispatch(&mut self, intent: Intent) {
        debug!(intent = intent.name(), "dispatching intent");
        if let Intent::Delete(id) | Intent::Toggle(id) = &intent {
            if !self.state.contains(*id) {
                debug!(%id, "no todo with this id");
            }
        }
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, intent, &mut self.ids);
        debug!(todos = self.state.len(), completed = self.state.completed_count(), "state updated");
    }
}

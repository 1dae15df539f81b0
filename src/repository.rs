use std::sync::Mutex;

use thiserror::Error;

use crate::models::Todo;

/// The persistence collaborator behind the todo handlers.
///
/// Implementations must tolerate concurrent calls; the handlers hold no
/// state of their own.
pub trait TodoRepository: Send + Sync {
    /// All todos, in insertion order.
    fn find_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// Persists a todo and returns the stored record. A todo without an id
    /// gets the next free one; a todo carrying an id replaces the record
    /// under that id, or is inserted if none exists.
    fn save(&self, todo: Todo) -> Result<Todo, StoreError>;

    /// Removes the record with the given id. No-op when the id is unknown.
    fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}

/// Store-layer error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),
}

/// In-memory repository (development/test use).
#[derive(Default)]
pub struct InMemoryTodoRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    todos: Vec<Todo>,
}

impl TodoRepository for InMemoryTodoRepository {
    fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.inner.lock().unwrap().todos.clone())
    }

    fn save(&self, mut todo: Todo) -> Result<Todo, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match todo.id {
            None => {
                inner.next_id += 1;
                todo.id = Some(inner.next_id);
                inner.todos.push(todo.clone());
            }
            Some(id) => {
                if let Some(existing) = inner.todos.iter_mut().find(|t| t.id == Some(id)) {
                    *existing = todo.clone();
                } else {
                    // Keep the counter ahead of explicitly chosen ids.
                    inner.next_id = inner.next_id.max(id);
                    inner.todos.push(todo.clone());
                }
            }
        }
        Ok(todo)
    }

    fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.todos.retain(|t| t.id != Some(id));
        Ok(())
    }
}

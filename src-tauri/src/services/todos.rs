//! Todos service
//!
//! Upsert, toggle and delete over the todos collection, plus the
//! filter/sort and stats computations the list screen needs.

use crate::error::{AppError, Result};
use crate::models::{Priority, Todo};
use crate::services::parse_date_input;
use crate::storage::CollectionStore;
use serde::{Deserialize, Serialize};

/// Which slice of the collection the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

/// Raw editor state for a todo save.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    pub category: String,
    /// Due date as typed, `YYYY-MM-DD`; empty clears it.
    #[serde(default)]
    pub due_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodoStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Filter, then stable-sort: incomplete first, then priority
/// (High before Medium before Low), then newest first.
pub fn filter_and_sort(todos: &[Todo], filter: TodoFilter) -> Vec<Todo> {
    let mut result: Vec<Todo> = todos
        .iter()
        .filter(|t| match filter {
            TodoFilter::All => true,
            TodoFilter::Active => !t.completed,
            TodoFilter::Completed => t.completed,
        })
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then(a.priority.rank().cmp(&b.priority.rank()))
            .then(b.created_at.cmp(&a.created_at))
    });

    result
}

pub fn todo_stats(todos: &[Todo]) -> TodoStats {
    let total = todos.len();
    let completed = todos.iter().filter(|t| t.completed).count();
    TodoStats {
        total,
        active: total - completed,
        completed,
    }
}

/// Service for managing todos
#[derive(Clone)]
pub struct TodosService {
    store: CollectionStore<Vec<Todo>>,
}

impl TodosService {
    pub fn new(store: CollectionStore<Vec<Todo>>) -> Self {
        Self { store }
    }

    /// List todos for display, filtered and sorted
    pub async fn list(&self, filter: TodoFilter) -> Vec<Todo> {
        filter_and_sort(&self.store.load_or_default().await, filter)
    }

    pub async fn stats(&self) -> TodoStats {
        todo_stats(&self.store.load_or_default().await)
    }

    /// Create or update a todo. The title is the one required field;
    /// `createdAt` and `completed` survive edits untouched.
    pub async fn save(&self, draft: TodoDraft) -> Result<Todo> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::InvalidInput("Please enter a title".to_string()));
        }

        let description = draft.description.trim().to_string();
        let due_date_text = draft.due_date.trim().to_string();
        let due_date_timestamp = parse_date_input(&due_date_text);
        let due_date = if due_date_text.is_empty() {
            None
        } else {
            Some(due_date_text)
        };

        let mut todos = self.store.load_or_default().await;

        let todo = match draft.id {
            Some(id) => {
                let existing = todos
                    .iter_mut()
                    .find(|t| t.id == id)
                    .ok_or_else(|| AppError::NotFound(format!("todo {id}")))?;
                existing.title = title;
                existing.description = Some(description);
                existing.priority = draft.priority;
                existing.category = draft.category;
                existing.due_date = due_date;
                existing.due_date_timestamp = due_date_timestamp;
                existing.clone()
            }
            None => {
                let now = chrono::Utc::now().timestamp_millis();
                let todo = Todo {
                    id: format!("todo-{now}"),
                    title,
                    description: Some(description),
                    completed: false,
                    priority: draft.priority,
                    category: draft.category,
                    due_date,
                    due_date_timestamp,
                    created_at: now,
                };
                todos.push(todo.clone());
                tracing::info!("Created todo {}", todo.id);
                todo
            }
        };

        self.store.save(&todos).await;
        Ok(todo)
    }

    /// Flip a todo's completed flag
    pub async fn toggle(&self, id: &str) -> Result<Todo> {
        let mut todos = self.store.load_or_default().await;

        let todo = {
            let existing = todos
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| AppError::NotFound(format!("todo {id}")))?;
            existing.completed = !existing.completed;
            existing.clone()
        };

        self.store.save(&todos).await;
        Ok(todo)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut todos = self.store.load_or_default().await;
        todos.retain(|t| t.id != id);
        self.store.save(&todos).await;

        tracing::info!("Deleted todo {}", id);
        Ok(())
    }
}

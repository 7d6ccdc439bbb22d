//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todoapp-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use todoapp_domain::todo::{NewTodo, Todo, TodoId};

use crate::{error::InfraError, repository::TodoRepository};

// ===== MockTodoRepository =====

/// インメモリの TodoRepository
///
/// ID は 1 から連番で採番する。`insert` の呼び出し回数を記録しており、
/// バリデーションエラー時に永続化が行われないことの検証に使う。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
    todos:        Arc<Mutex<Vec<Todo>>>,
    next_id:      Arc<AtomicUsize>,
    insert_calls: Arc<AtomicUsize>,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 採番済みの Todo を直接追加する（テストの前提データ用）
    pub fn add_todo(&self, todo: Todo) {
        let id = usize::try_from(todo.id().as_i64()).unwrap_or_default();
        self.next_id.fetch_max(id, Ordering::SeqCst);
        self.todos.lock().unwrap().push(todo);
    }

    /// 現在保持している Todo の一覧
    pub fn todos(&self) -> Vec<Todo> {
        self.todos.lock().unwrap().clone()
    }

    /// `insert` が呼ばれた回数
    pub fn insert_call_count(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let id = i64::try_from(id).map_err(|e| InfraError::unexpected(e.to_string()))?;
        let todo = Todo::persisted(TodoId::from_i64(id), new_todo.clone());
        self.todos.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let mut todos = self.todos.lock().unwrap().clone();
        todos.sort_by_key(|t| t.id());
        Ok(todos)
    }

    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError> {
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| t.id() != *id);
        Ok(todos.len() < before)
    }
}

//! # Todo
//!
//! Todo 管理の唯一のエンティティ。
//!
//! ## ライフサイクル
//!
//! ```text
//! NewTodo（ID なし） ──insert──▶ Todo（DB が ID を採番）
//! ```
//!
//! 永続化前の状態を [`NewTodo`]、永続化済みの状態を [`Todo`] として型で区別する。
//! これにより「永続化済みの Todo は必ず ID と空でないタイトルを持つ」という
//! 不変条件をコンパイル時に保証する。
//!
//! ## 使用例
//!
//! ```rust
//! use todoapp_domain::todo::{NewTodo, Todo, TodoId, TodoTitle};
//!
//! let new_todo = NewTodo::new(
//!     TodoTitle::new("Test Todo").unwrap(),
//!     Some("Test Description".to_string()),
//! );
//!
//! // リポジトリが ID を採番した後
//! let todo = Todo::persisted(TodoId::from_i64(1), new_todo);
//! assert_eq!(todo.id().as_i64(), 1);
//! assert_eq!(todo.title().as_str(), "Test Todo");
//! ```

use crate::DomainError;

// =========================================================================
// TodoId
// =========================================================================

/// Todo の一意識別子
///
/// DB の `BIGSERIAL` で採番される。アプリケーション側では生成しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
    /// 既存の値から ID を作成する（DB の値やパスパラメータから復元）
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

// =========================================================================
// TodoTitle
// =========================================================================

/// タイトルの最大文字数（DB: `VARCHAR(255)`）
pub const MAX_TODO_TITLE_LENGTH: usize = 255;

/// Todo のタイトル（値オブジェクト）
///
/// # 不変条件
///
/// - 前後の空白を除いた結果が空文字列ではない
/// - 最大 255 文字
/// - NUL 文字（`\0`）を含まない（PostgreSQL のテキスト型が受け付けない）
///
/// 空白判定はトリム後の値で行うが、保持するのはクライアントが送った値そのもの。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "タイトルを入力してください".to_string(),
            ));
        }

        if value.chars().count() > MAX_TODO_TITLE_LENGTH {
            return Err(DomainError::Validation(format!(
                "タイトルは {MAX_TODO_TITLE_LENGTH} 文字以内で入力してください"
            )));
        }

        if value.contains('\0') {
            return Err(DomainError::Validation(
                "タイトルに NUL 文字は使用できません".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// NewTodo（永続化前）
// =========================================================================

/// 永続化前の Todo
///
/// ID はまだ存在しない。タイトルは [`TodoTitle`] の時点で検証済み。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title:       TodoTitle,
    description: Option<String>,
}

impl NewTodo {
    pub fn new(title: TodoTitle, description: Option<String>) -> Self {
        Self { title, description }
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

// =========================================================================
// Todo（永続化済み）
// =========================================================================

/// 永続化済みの Todo エンティティ
///
/// # 不変条件
///
/// - `id` は DB が採番した値であり、以降変更されない
/// - `title` は空白のみではない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:          TodoId,
    title:       TodoTitle,
    description: Option<String>,
}

impl Todo {
    /// 採番された ID と永続化前の Todo から Todo を組み立てる
    pub fn persisted(id: TodoId, new_todo: NewTodo) -> Self {
        Self {
            id,
            title: new_todo.title,
            description: new_todo.description,
        }
    }

    /// データベースから Todo を復元する
    pub fn from_db(id: TodoId, title: TodoTitle, description: Option<String>) -> Self {
        Self {
            id,
            title,
            description,
        }
    }

    // --- ゲッター ---

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

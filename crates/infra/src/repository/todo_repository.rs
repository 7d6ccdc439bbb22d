//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID は DB が採番**: `INSERT ... RETURNING` で採番結果を受け取る
//! - **一覧は ID 昇順**: 作成順に安定した並びを返す
//! - **削除結果は bool**: 対象が存在しなかった場合の扱いはユースケース層が決める

use async_trait::async_trait;
use sqlx::PgPool;
use todoapp_domain::todo::{NewTodo, Todo, TodoId, TodoTitle};

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Todo を挿入し、採番済みの Todo を返す
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError>;

    /// すべての Todo を ID 昇順で取得する
    ///
    /// 0 件の場合は空の Vec を返す。
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を削除する
    ///
    /// # 戻り値
    ///
    /// - `Ok(true)`: 削除した
    /// - `Ok(false)`: 該当する Todo が存在しなかった
    /// - `Err(_)`: データベースエラー
    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError>;
}

/// DB の todos テーブルの行を表す中間構造体
///
/// `TryFrom` で `Todo` への変換ロジックを一箇所に集約する。
#[derive(sqlx::FromRow)]
struct TodoRow {
    id:          i64,
    title:       String,
    description: Option<String>,
}

impl TryFrom<TodoRow> for Todo {
    type Error = InfraError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        Ok(Todo::from_db(
            TodoId::from_i64(row.id),
            TodoTitle::new(row.title).map_err(|e| InfraError::unexpected(e.to_string()))?,
            row.description,
        ))
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description
            "#,
        )
        .bind(new_todo.title().as_str())
        .bind(new_todo.description())
        .fetch_one(&self.pool)
        .await?;

        Todo::try_from(row)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description
            FROM todos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Todo::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

//! # ユースケース層
//!
//! Todo Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラテストでスタブに差し替えられるようにトレイトを定義
//! - **依存性注入**: リポジトリは `main.rs` で組み立てて外部から注入
//! - **薄いハンドラ**: ハンドラは DTO 変換のみ、検証と永続化の順序はユースケースに集約

pub mod todo;

use async_trait::async_trait;
pub use todo::{CreateTodoInput, TodoUseCaseImpl};
use todoapp_domain::todo::{Todo, TodoId};

use crate::error::TodoError;

/// Todo ユースケーストレイト
#[async_trait]
pub trait TodoUseCase: Send + Sync {
    /// Todo を作成する
    ///
    /// タイトルが未指定・空白のみ・255 文字超の場合は `TodoError::Validation` を返し、
    /// 永続化は行わない。
    async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, TodoError>;

    /// すべての Todo を取得する
    async fn list_todos(&self) -> Result<Vec<Todo>, TodoError>;

    /// Todo を削除する
    ///
    /// 該当する Todo が存在しない場合は `TodoError::NotFound` を返す。
    async fn delete_todo(&self, id: TodoId) -> Result<(), TodoError>;
}

#[async_trait]
impl TodoUseCase for TodoUseCaseImpl {
    async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, TodoError> {
        self.create_todo(input).await
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.list_todos().await
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), TodoError> {
        self.delete_todo(id).await
    }
}

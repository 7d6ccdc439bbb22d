//! # Todo ユースケース
//!
//! タイトルの検証はリポジトリ呼び出しより前に行う。
//! 検証に失敗したリクエストがストレージに到達することはない。

use std::sync::Arc;

use todoapp_domain::{
    DomainError,
    todo::{NewTodo, Todo, TodoId, TodoTitle},
};
use todoapp_infra::repository::TodoRepository;

use crate::error::TodoError;

/// Todo 作成の入力
///
/// `title` は JSON で省略・`null` が許されるため `Option` で受け取る。
#[derive(Debug, Clone, Default)]
pub struct CreateTodoInput {
    pub title:       Option<String>,
    pub description: Option<String>,
}

/// Todo ユースケースの実装
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    pub async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, TodoError> {
        let title = input
            .title
            .ok_or_else(|| DomainError::Validation("タイトルは必須です".to_string()))?;
        let title = TodoTitle::new(title)?;
        if input.description.as_deref().is_some_and(|d| d.contains('\0')) {
            return Err(DomainError::Validation("説明に NUL 文字は使用できません".to_string()).into());
        }
        let new_todo = NewTodo::new(title, input.description);

        let todo = self.todo_repository.insert(&new_todo).await?;
        tracing::info!(todo_id = %todo.id(), "Todo を作成しました");
        Ok(todo)
    }

    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.todo_repository.find_all().await?)
    }

    pub async fn delete_todo(&self, id: TodoId) -> Result<(), TodoError> {
        if !self.todo_repository.delete(&id).await? {
            return Err(DomainError::NotFound {
                entity_type: "Todo",
                id:          id.to_string(),
            }
            .into());
        }

        tracing::info!(todo_id = %id, "Todo を削除しました");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use todoapp_infra::{InfraError, mock::MockTodoRepository};

    use super::*;

    fn input(title: Option<&str>, description: Option<&str>) -> CreateTodoInput {
        CreateTodoInput {
            title:       title.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    /// 常に DB エラーを返すリポジトリ
    struct FailingTodoRepository;

    #[async_trait]
    impl TodoRepository for FailingTodoRepository {
        async fn insert(&self, _new_todo: &NewTodo) -> Result<Todo, InfraError> {
            Err(sqlx::Error::PoolTimedOut.into())
        }

        async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
            Err(sqlx::Error::PoolTimedOut.into())
        }

        async fn delete(&self, _id: &TodoId) -> Result<bool, InfraError> {
            Err(sqlx::Error::PoolTimedOut.into())
        }
    }

    // ===== create_todo =====

    #[tokio::test]
    async fn test_create_todo_正常なタイトルで作成できる() {
        // Given
        let repo = MockTodoRepository::new();
        let sut = TodoUseCaseImpl::new(Arc::new(repo.clone()));

        // When
        let todo = sut
            .create_todo(input(Some("Test Todo"), Some("Test Description")))
            .await
            .unwrap();

        // Then
        assert_eq!(todo.id(), TodoId::from_i64(1));
        assert_eq!(todo.title().as_str(), "Test Todo");
        assert_eq!(todo.description(), Some("Test Description"));
        assert_eq!(repo.insert_call_count(), 1);
    }

    #[rstest]
    #[case(None, "未指定")]
    #[case(Some(""), "空文字列")]
    #[case(Some("   "), "空白のみ")]
    #[tokio::test]
    async fn test_create_todo_不正なタイトルは永続化されない(
        #[case] title: Option<&str>,
        #[case] _description: &str,
    ) {
        // Given
        let repo = MockTodoRepository::new();
        let sut = TodoUseCaseImpl::new(Arc::new(repo.clone()));

        // When
        let result = sut.create_todo(input(title, Some("Description"))).await;

        // Then
        assert!(matches!(result, Err(TodoError::Validation(_))));
        assert_eq!(repo.insert_call_count(), 0);
    }

    #[rstest]
    #[case(Some("買い\0物"), Some("Description"), "タイトルに NUL")]
    #[case(Some("買い物"), Some("説明\0"), "説明に NUL")]
    #[tokio::test]
    async fn test_create_todo_nul文字を含む入力は永続化されない(
        #[case] title: Option<&str>,
        #[case] description: Option<&str>,
        #[case] _case: &str,
    ) {
        // Given
        let repo = MockTodoRepository::new();
        let sut = TodoUseCaseImpl::new(Arc::new(repo.clone()));

        // When
        let result = sut.create_todo(input(title, description)).await;

        // Then
        assert!(matches!(result, Err(TodoError::Validation(_))));
        assert_eq!(repo.insert_call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_todo_説明なしで作成できる() {
        let sut = TodoUseCaseImpl::new(Arc::new(MockTodoRepository::new()));

        let todo = sut.create_todo(input(Some("牛乳を買う"), None)).await.unwrap();

        assert_eq!(todo.description(), None);
    }

    #[tokio::test]
    async fn test_create_todo_dbエラーはdatabaseエラーになる() {
        let sut = TodoUseCaseImpl::new(Arc::new(FailingTodoRepository));

        let result = sut.create_todo(input(Some("Test Todo"), None)).await;

        assert!(matches!(result, Err(TodoError::Database(_))));
    }

    // ===== list_todos =====

    #[tokio::test]
    async fn test_list_todos_空の場合は空のvecを返す() {
        let sut = TodoUseCaseImpl::new(Arc::new(MockTodoRepository::new()));

        let todos = sut.list_todos().await.unwrap();

        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_list_todos_作成した件数と順序で返す() {
        // Given
        let sut = TodoUseCaseImpl::new(Arc::new(MockTodoRepository::new()));
        sut.create_todo(input(Some("Todo 1"), None)).await.unwrap();
        sut.create_todo(input(Some("Todo 2"), None)).await.unwrap();

        // When
        let todos = sut.list_todos().await.unwrap();

        // Then
        let titles: Vec<&str> = todos.iter().map(|t| t.title().as_str()).collect();
        assert_eq!(titles, vec!["Todo 1", "Todo 2"]);
    }

    #[tokio::test]
    async fn test_list_todos_書き込みがなければ同じ結果を返す() {
        let sut = TodoUseCaseImpl::new(Arc::new(MockTodoRepository::new()));
        sut.create_todo(input(Some("Todo 1"), None)).await.unwrap();

        let first = sut.list_todos().await.unwrap();
        let second = sut.list_todos().await.unwrap();

        assert_eq!(first, second);
    }

    // ===== delete_todo =====

    #[tokio::test]
    async fn test_delete_todo_存在するtodoを削除できる() {
        // Given
        let repo = MockTodoRepository::new();
        let sut = TodoUseCaseImpl::new(Arc::new(repo.clone()));
        let todo = sut.create_todo(input(Some("削除対象"), None)).await.unwrap();

        // When
        sut.delete_todo(todo.id()).await.unwrap();

        // Then
        assert!(repo.todos().is_empty());
    }

    #[tokio::test]
    async fn test_delete_todo_存在しないidはnot_found() {
        let sut = TodoUseCaseImpl::new(Arc::new(MockTodoRepository::new()));

        let result = sut.delete_todo(TodoId::from_i64(42)).await;

        assert!(matches!(result, Err(TodoError::NotFound(_))));
    }
}

//! # Todo ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /api/todos` - Todo 作成
//! - `GET /api/todos` - Todo 一覧
//! - `DELETE /api/todos/{id}` - Todo 削除
//!
//! JSON ボディやパスパラメータの抽出に失敗した場合も、axum 既定の
//! 415 / 422 ではなくボディなしの 400 を返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todoapp_domain::todo::{Todo, TodoId};

use crate::{
    error::TodoError,
    usecase::{CreateTodoInput, TodoUseCase},
};

/// Todo ハンドラの共有状態
pub struct TodoState {
    pub usecase: Arc<dyn TodoUseCase>,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成リクエスト
///
/// クライアントが送る `id` を含め、未知のフィールドは無視する。
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title:       Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Todo の JSON 表現
///
/// `description` は未設定でも `null` として常に出力する。
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoDto {
    pub id:          i64,
    pub title:       String,
    pub description: Option<String>,
}

impl From<Todo> for TodoDto {
    fn from(todo: Todo) -> Self {
        Self {
            id:          todo.id().as_i64(),
            title:       todo.title().as_str().to_string(),
            description: todo.description().map(str::to_string),
        }
    }
}

// --- ハンドラ ---

/// POST /api/todos
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let Json(req) = payload.map_err(|rejection| TodoError::BadRequest(rejection.body_text()))?;

    let todo = state
        .usecase
        .create_todo(CreateTodoInput {
            title:       req.title,
            description: req.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TodoDto::from(todo))))
}

/// GET /api/todos
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, TodoError> {
    let todos = state.usecase.list_todos().await?;
    let dtos: Vec<TodoDto> = todos.into_iter().map(TodoDto::from).collect();
    Ok(Json(dtos))
}

/// DELETE /api/todos/{id}
#[tracing::instrument(skip_all)]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let Path(id) = id.map_err(|rejection| TodoError::BadRequest(rejection.body_text()))?;

    state.usecase.delete_todo(TodoId::from_i64(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! クライアント起因のエラー（400 / 404）はステータスコードのみを返し、ボディは空。
//! サーバー起因のエラー（500）は固定 detail の Problem Details を返し、
//! 原因は SpanTrace とともにログに出力する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todoapp_domain::DomainError;
use todoapp_infra::InfraError;
use todoapp_shared::ErrorResponse;

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum TodoError {
    /// 入力値がドメインルールに違反している
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// リクエストの形式が不正（JSON 構文エラー、型不一致、パスパラメータ不正など）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for TodoError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(msg) => Self::Validation(msg),
            e @ DomainError::NotFound { .. } => Self::NotFound(e.to_string()),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        match &self {
            TodoError::Validation(msg) | TodoError::BadRequest(msg) => {
                tracing::debug!(reason = %msg, "リクエストを拒否しました");
                StatusCode::BAD_REQUEST.into_response()
            }
            TodoError::NotFound(msg) => {
                tracing::debug!(reason = %msg, "リソースが見つかりません");
                StatusCode::NOT_FOUND.into_response()
            }
            TodoError::Database(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal_error()),
                )
                    .into_response()
            }
        }
    }
}

//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! JSON ボディを伴うエラーレスポンスの構造体。
//!
//! Todo API のクライアントエラー（400 / 404）はボディを返さないため、
//! 現状このボディを使うのは 5xx 系のみ。

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://todoapp.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// `type` フィールドは URI で問題の種類を識別する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
}

impl ErrorResponse {
    /// `error_type_suffix` はベース URI に付加される（例: `"internal-error"`）。
    pub fn new(
        error_type_suffix: &str,
        title: impl Into<String>,
        status: u16,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
            title: title.into(),
            status,
            detail: detail.into(),
        }
    }

    /// 500 Internal Server Error
    ///
    /// detail は固定値。原因はサーバーログにのみ出力する。
    pub fn internal_error() -> Self {
        Self::new(
            "internal-error",
            "Internal Server Error",
            500,
            "内部エラーが発生しました",
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_internal_errorが500と固定detailを返す() {
        let error = ErrorResponse::internal_error();

        assert_eq!(
            error.error_type,
            "https://todoapp.example.com/errors/internal-error"
        );
        assert_eq!(error.title, "Internal Server Error");
        assert_eq!(error.status, 500);
        assert_eq!(error.detail, "内部エラーが発生しました");
    }

    #[test]
    fn test_newでベースuriにサフィックスが付加される() {
        let error = ErrorResponse::new("custom-error", "Custom Error", 418, "カスタムエラー");

        assert_eq!(
            error.error_type,
            "https://todoapp.example.com/errors/custom-error"
        );
        assert_eq!(error.status, 418);
    }

    #[test]
    fn test_serializeでtypeフィールドにリネームされる() {
        let json = serde_json::to_value(ErrorResponse::internal_error()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "https://todoapp.example.com/errors/internal-error",
                "title": "Internal Server Error",
                "status": 500,
                "detail": "内部エラーが発生しました"
            })
        );
    }
}

//! # アプリケーション構築
//!
//! ルーターとミドルウェアの組み立てを担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};
use todoapp_shared::{canonical_log::CanonicalLogLineLayer, observability::make_request_span};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    ReadinessState,
    TodoState,
    create_todo,
    delete_todo,
    health_check,
    list_todos,
    readiness_check,
};

/// ルーターを構築する
///
/// ## ルート
///
/// - `GET /health`, `GET /health/ready`
/// - `POST /api/todos`, `GET /api/todos`, `DELETE /api/todos/{id}`
pub fn build_app(todo_state: Arc<TodoState>, readiness_state: Arc<ReadinessState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", delete(delete_todo))
        .with_state(todo_state)
        // 下に書いたものが外側
        // 1. CorsLayer（最外）: プリフライトはここで応答する
        // 2. SetRequestIdLayer: x-request-id を採番（クライアント提供値があればそれを使う）
        // 3. TraceLayer: request_id を含むスパンを作成
        // 4. CanonicalLogLineLayer: スパン内でリクエスト完了サマリを出力
        // 5. PropagateRequestIdLayer: レスポンスヘッダーに x-request-id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors_layer())
}

/// すべてのオリジン・メソッド・ヘッダーを許可する
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

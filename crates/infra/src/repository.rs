//! # リポジトリ実装
//!
//! 永続化操作のトレイトと PostgreSQL による具体実装を提供する。
//!
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計（[`crate::mock`]）

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoRepository};

//! # TodoApp ドメイン層
//!
//! Todo 管理の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 永続化済みの [`todo::Todo`] は必ず ID を持つ
//! - **値オブジェクト**: [`todo::TodoTitle`] は生成時にバリデーションを行う
//! - **ドメインエラー**: ビジネスルール違反を [`DomainError`] で表現する
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use todoapp_domain::{DomainError, todo::TodoTitle};
//!
//! let title = TodoTitle::new("牛乳を買う").unwrap();
//! assert_eq!(title.as_str(), "牛乳を買う");
//!
//! let error = TodoTitle::new("   ").unwrap_err();
//! assert!(matches!(error, DomainError::Validation(_)));
//! ```

pub mod error;
pub mod todo;

pub use error::DomainError;

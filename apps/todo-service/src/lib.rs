//! # Todo Service ライブラリ
//!
//! ルーター構築・ハンドラ・ユースケースを公開する。
//! `tests/` の API テストからも同じルーターを組み立てて使う。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

//! App - アプリケーション層
//!
//! # 主要コンポーネント
//! - **MediatorBuilder**: Handler の登録と起動時検証
//! - **Mediator**: Request を Handler に振り分ける
//! - **MediatorConfig**: JSON から読み込む設定

pub mod builder;
pub mod config;
pub mod mediator;

pub use self::builder::{BuildError, MediatorBuilder};
pub use self::config::{ConfigError, MediatorConfig};
pub use self::mediator::Mediator;

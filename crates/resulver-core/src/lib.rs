//! resulver-core
//!
//! Result-style requests on top of a small in-process mediator.
//!
//! # モジュール構成
//! - **outcome**: `Outcome<T>` / `Failure` / `ResultError`
//! - **typed**: `Request` と `Handler<R>`、型消去された registry
//! - **result**: `ResultRequest` / `ResultHandler` マーカー
//! - **app**: `MediatorBuilder`, `Mediator`, `MediatorConfig`
//! - **observability**: dispatch counters
//! - **error**: mediator 自身のエラー

pub mod outcome;
pub mod typed;
pub mod result;
pub mod app;
pub mod error;
pub mod observability;

pub use app::{Mediator, MediatorBuilder, MediatorConfig};
pub use error::MediatorError;
pub use outcome::{ErrorKind, Failure, Outcome, ResultError};
pub use result::{ResultHandler, ResultRequest};
pub use typed::{Handler, Request};

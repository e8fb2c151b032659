//! Typed - 型付き Request/Handler API
//!
//! Request と Handler の対応付けを静的に保証し、mediator 内部では
//! 型消去された `DynHandler` として扱います。

pub mod request;
pub mod handler;
pub mod registry;

pub use self::request::Request;
pub use self::handler::{AnyBox, DynHandler, Handler, TypedHandler};
pub use self::registry::{DuplicatePolicy, RegistryError, TypedRegistry};

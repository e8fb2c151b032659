//! Result - outcome を返す Request/Handler のマーカー
//!
//! Two marker traits layered on [`crate::typed`]:
//! - [`ResultRequest`]: the request answers with `Outcome<Content>`
//! - [`ResultHandler`]: the handler produces exactly that outcome
//!
//! The payload-less form is simply `Content = ()`.

pub mod request;
pub mod handler;

pub use self::request::ResultRequest;
pub use self::handler::ResultHandler;

//! Handler trait - Request を処理する Handler の定義
//!
//! # 二層構造
//! - `Handler<R>`: generic, typed surface
//! - `DynHandler`: object-safe surface stored in the registry
//! - `TypedHandler<R, H>`: type erasure from the former to the latter

use std::any::Any;
use std::marker::PhantomData;

use async_trait::async_trait;

use super::request::{Request, request_name};
use crate::error::MediatorError;

/// Handler は Request を受け取り、その Request が宣言した Response を返す
///
/// # 使用例
/// ```
/// use async_trait::async_trait;
/// use resulver_core::typed::{Handler, Request};
///
/// struct Echo(String);
///
/// impl Request for Echo {
///     type Response = String;
/// }
///
/// struct EchoHandler;
///
/// #[async_trait]
/// impl Handler<Echo> for EchoHandler {
///     async fn handle(&self, request: Echo) -> String {
///         request.0
///     }
/// }
/// ```
///
/// - `Handler<Echo>` は `Echo` しか受け取れない
/// - 戻り値は `Echo::Response` に固定される
#[async_trait]
pub trait Handler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> R::Response;
}

/// Boxed value crossing the type-erased boundary.
pub type AnyBox = Box<dyn Any + Send>;

/// DynHandler は object-safe な Handler の抽象化
///
/// `HashMap<TypeId, Arc<dyn DynHandler>>` に格納するための層です。
#[async_trait]
pub trait DynHandler: Send + Sync {
    async fn handle_any(&self, request: AnyBox) -> Result<AnyBox, MediatorError>;
    fn request_type(&self) -> &'static str;
}

pub struct TypedHandler<R: Request, H: Handler<R>> {
    handler: H,
    // fn() -> R keeps TypedHandler Send + Sync regardless of R
    _marker: PhantomData<fn() -> R>,
}

impl<R: Request, H: Handler<R>> TypedHandler<R, H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Request, H: Handler<R>> DynHandler for TypedHandler<R, H> {
    async fn handle_any(&self, request: AnyBox) -> Result<AnyBox, MediatorError> {
        let request = request
            .downcast::<R>()
            .map_err(|_| MediatorError::RequestTypeMismatch {
                expected: request_name::<R>(),
            })?;
        let response = self.handler.handle(*request).await;
        Ok(Box::new(response))
    }

    fn request_type(&self) -> &'static str {
        request_name::<R>()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{AddHandler, EchoHandler};
    use super::*;
    use crate::typed::request::fixtures::{Add, Echo};

    #[tokio::test]
    async fn typed_handler_round_trips_through_any() {
        let typed = TypedHandler::<Echo, _>::new(EchoHandler);

        let request: AnyBox = Box::new(Echo {
            text: "hello".to_string(),
        });
        let response = typed.handle_any(request).await.unwrap();
        assert_eq!(*response.downcast::<String>().unwrap(), "hello");
    }

    #[tokio::test]
    async fn typed_handler_rejects_foreign_request() {
        let typed = TypedHandler::<Add, _>::new(AddHandler);

        let request: AnyBox = Box::new(Echo {
            text: "nope".to_string(),
        });
        let err = typed.handle_any(request).await.unwrap_err();
        assert!(matches!(err, MediatorError::RequestTypeMismatch { .. }));
    }

    #[test]
    fn typed_handler_reports_request_type() {
        let typed = TypedHandler::<Add, _>::new(AddHandler);
        assert!(typed.request_type().ends_with("Add"));
    }
}

//! ResultHandler - ResultRequest を処理する Handler のマーカー
//!
//! `ResultHandler<R>` only accepts an `R` that is a [`ResultRequest`] and its
//! `handle` must return `Outcome<R::Content>`. Every result handler is also a
//! plain [`Handler<R>`] through the blanket impl, so it registers on the
//! mediator like any other handler.

use async_trait::async_trait;

use super::request::ResultRequest;
use crate::outcome::Outcome;
use crate::typed::Handler;

/// Handles a [`ResultRequest`], answering with the outcome the request declares.
///
/// Failures are returned as `Err(Failure)`; the handler converts any
/// underlying error itself (see [`Failure::from_error`](crate::outcome::Failure::from_error)).
///
/// # 使用例
/// ```
/// use async_trait::async_trait;
/// use resulver_core::outcome::Outcome;
/// use resulver_core::result::{ResultHandler, ResultRequest};
///
/// struct GetValue;
///
/// impl ResultRequest for GetValue {
///     type Content = i32;
/// }
///
/// struct GetValueHandler;
///
/// #[async_trait]
/// impl ResultHandler<GetValue> for GetValueHandler {
///     async fn handle(&self, _request: GetValue) -> Outcome<i32> {
///         Ok(42)
///     }
/// }
/// ```
///
/// The return type is fixed by the request. A payload-less request cannot be
/// answered with a payload:
///
/// ```compile_fail
/// use async_trait::async_trait;
/// use resulver_core::outcome::Outcome;
/// use resulver_core::result::{ResultHandler, ResultRequest};
///
/// struct Ping;
///
/// impl ResultRequest for Ping {
///     type Content = ();
/// }
///
/// struct PingHandler;
///
/// #[async_trait]
/// impl ResultHandler<Ping> for PingHandler {
///     async fn handle(&self, _request: Ping) -> Outcome<i32> {
///         Ok(1)
///     }
/// }
/// ```
///
/// nor a typed request with a different content type:
///
/// ```compile_fail
/// use async_trait::async_trait;
/// use resulver_core::outcome::Outcome;
/// use resulver_core::result::{ResultHandler, ResultRequest};
///
/// struct GetValue;
///
/// impl ResultRequest for GetValue {
///     type Content = i32;
/// }
///
/// struct GetValueHandler;
///
/// #[async_trait]
/// impl ResultHandler<GetValue> for GetValueHandler {
///     async fn handle(&self, _request: GetValue) -> Outcome<String> {
///         Ok("42".to_string())
///     }
/// }
/// ```
///
/// A plain request that is not a result request cannot get a result handler:
///
/// ```compile_fail
/// use async_trait::async_trait;
/// use resulver_core::outcome::Outcome;
/// use resulver_core::result::ResultHandler;
/// use resulver_core::typed::Request;
///
/// struct Echo;
///
/// impl Request for Echo {
///     type Response = String;
/// }
///
/// struct EchoHandler;
///
/// #[async_trait]
/// impl ResultHandler<Echo> for EchoHandler {
///     async fn handle(&self, _request: Echo) -> Outcome<String> {
///         Ok(String::new())
///     }
/// }
/// ```
#[async_trait]
pub trait ResultHandler<R: ResultRequest>: Send + Sync {
    async fn handle(&self, request: R) -> Outcome<R::Content>;
}

#[async_trait]
impl<R, H> Handler<R> for H
where
    R: ResultRequest,
    H: ResultHandler<R>,
{
    async fn handle(&self, request: R) -> Outcome<R::Content> {
        <H as ResultHandler<R>>::handle(self, request).await
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{FindUserHandler, GetValueHandler, PingHandler};
    use super::*;
    use crate::outcome::ErrorKind;
    use crate::result::request::fixtures::{FindUser, GetValue, Ping};
    use crate::typed::{DynHandler, TypedHandler};

    #[tokio::test]
    async fn result_handler_is_a_handler() {
        let outcome = <PingHandler as Handler<Ping>>::handle(&PingHandler, Ping).await;
        assert_eq!(outcome, Ok(()));

        let outcome = <GetValueHandler as Handler<GetValue>>::handle(&GetValueHandler, GetValue).await;
        assert_eq!(outcome, Ok(42));
    }

    #[tokio::test]
    async fn failure_passes_through_untouched() {
        let outcome = ResultHandler::handle(&FindUserHandler, FindUser { id: 7 }).await;
        let failure = outcome.unwrap_err();
        assert_eq!(failure.primary().kind, ErrorKind::NotFound);
        assert_eq!(failure.to_string(), "user: user 7 does not exist");
    }

    #[tokio::test]
    async fn result_handler_erases_like_any_handler() {
        let typed = TypedHandler::<GetValue, _>::new(GetValueHandler);
        let response = typed.handle_any(Box::new(GetValue)).await.unwrap();
        let outcome = response.downcast::<Outcome<i32>>().unwrap();
        assert_eq!(*outcome, Ok(42));
    }
}

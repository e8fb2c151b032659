//! ResultRequest - outcome を返す Request のマーカー
//!
//! Implementing `ResultRequest` is the only thing a result-style request
//! does. The blanket impl below turns it into a [`Request`] whose response is
//! `Outcome<Self::Content>`, so a request can never declare a content type
//! and some other response at the same time.

use crate::outcome::Outcome;
use crate::typed::Request;

/// Marks a request whose handler answers with an [`Outcome`].
///
/// - payload なし: `type Content = ();` → `Outcome`
/// - payload あり: `type Content = T;` → `Outcome<T>`
///
/// # 使用例
/// ```
/// use resulver_core::result::ResultRequest;
///
/// struct Ping;
///
/// impl ResultRequest for Ping {
///     type Content = ();
/// }
///
/// struct GetValue;
///
/// impl ResultRequest for GetValue {
///     type Content = i32;
/// }
/// ```
///
/// A result request is already a `Request`; implementing `Request` on top of
/// it is rejected:
///
/// ```compile_fail
/// use resulver_core::result::ResultRequest;
/// use resulver_core::typed::Request;
///
/// struct GetValue;
///
/// impl ResultRequest for GetValue {
///     type Content = i32;
/// }
///
/// impl Request for GetValue {
///     type Response = String;
/// }
/// ```
pub trait ResultRequest: Send + 'static {
    type Content: Send + 'static;
}

impl<R: ResultRequest> Request for R {
    type Response = Outcome<R::Content>;

    fn succeeded(response: &Self::Response) -> Option<bool> {
        Some(response.is_ok())
    }
}

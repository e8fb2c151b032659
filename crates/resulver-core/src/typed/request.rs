//! Request trait - 型付き Request の定義
//!
//! A request names the response its handler must produce through an
//! associated type, so the pairing is checked at compile time.

/// Request は応答の型を静的に宣言する
///
/// # 使用例
/// ```
/// use resulver_core::typed::Request;
///
/// struct Echo(String);
///
/// impl Request for Echo {
///     type Response = String;
/// }
/// ```
///
/// # Trait Bounds
/// - `Send`: handler の async fn に move するため
/// - `'static`: `TypeId` で registry を引くため（参照を持たない）
pub trait Request: Send + 'static {
    type Response: Send + 'static;

    /// Whether `response` counts as a success. `None` for responses with no
    /// success notion; result requests answer from their outcome.
    fn succeeded(_response: &Self::Response) -> Option<bool> {
        None
    }
}

/// Human-readable name used in logs and errors.
pub(crate) fn request_name<R: Request>() -> &'static str {
    std::any::type_name::<R>()
}

//! Outcome model: the success-or-failure value every result request yields.
//!
//! `Outcome<T>` is a plain `std::result::Result`, so `?`, `map`, `and_then`
//! and friends work as usual. Only the failure side is defined here: a
//! `Failure` always carries at least one `ResultError`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of handling a result request.
///
/// `Outcome` without an argument is the payload-less form (`Result<(), Failure>`).
pub type Outcome<T = ()> = Result<T, Failure>;

/// Classification of a single error carried by a [`Failure`].
///
/// Serialized as SCREAMING_SNAKE_CASE (VALIDATION / NOT_FOUND / ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Unauthorized,
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// One error inside a [`Failure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultError {
    pub kind: ErrorKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub message: String,
}

impl ResultError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl fmt::Display for ResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{title}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Failure side of an [`Outcome`].
///
/// The error list is never empty; every constructor requires at least one
/// error. Deserializing an empty list is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FailureRepr")]
pub struct Failure {
    errors: Vec<ResultError>,
}

#[derive(Deserialize)]
struct FailureRepr {
    errors: Vec<ResultError>,
}

impl TryFrom<FailureRepr> for Failure {
    type Error = &'static str;

    fn try_from(repr: FailureRepr) -> Result<Self, Self::Error> {
        Failure::from_errors(repr.errors).ok_or("failure must carry at least one error")
    }
}

impl Failure {
    pub fn new(error: ResultError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Builds a failure from several errors. Returns `None` for an empty input.
    pub fn from_errors(errors: impl IntoIterator<Item = ResultError>) -> Option<Self> {
        let errors: Vec<ResultError> = errors.into_iter().collect();
        if errors.is_empty() {
            return None;
        }
        Some(Self { errors })
    }

    /// Wraps an arbitrary error as an internal failure.
    ///
    /// Handlers call this explicitly when an underlying fault must surface as
    /// a failed outcome; nothing converts faults automatically.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        Self::new(ResultError::internal(err.to_string()))
    }

    pub fn with_error(mut self, error: ResultError) -> Self {
        self.errors.push(error);
        self
    }

    pub fn errors(&self) -> &[ResultError] {
        &self.errors
    }

    /// First error; always present.
    pub fn primary(&self) -> &ResultError {
        &self.errors[0]
    }

    pub fn has_kind(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    pub fn into_errors(self) -> Vec<ResultError> {
        self.errors
    }
}

impl From<ResultError> for Failure {
    fn from(error: ResultError) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for Failure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_serializes_as_screaming_snake_case() {
        let s = serde_json::to_string(&ErrorKind::NotFound).unwrap();
        assert_eq!(s, "\"NOT_FOUND\"");

        let s = serde_json::to_string(&ErrorKind::Validation).unwrap();
        assert_eq!(s, "\"VALIDATION\"");
    }

    #[test]
    fn failure_from_empty_errors_is_none() {
        assert!(Failure::from_errors(Vec::new()).is_none());
    }

    #[test]
    fn failure_display_joins_messages() {
        let failure = Failure::new(ResultError::validation("name is empty"))
            .with_error(ResultError::conflict("already exists").with_title("user"));

        assert_eq!(failure.to_string(), "name is empty; user: already exists");
        assert_eq!(failure.errors().len(), 2);
        assert_eq!(failure.primary().kind, ErrorKind::Validation);
        assert!(failure.has_kind(ErrorKind::Conflict));
        assert!(!failure.has_kind(ErrorKind::Internal));
    }

    #[test]
    fn failure_from_error_is_internal() {
        let io = std::io::Error::other("disk gone");
        let failure = Failure::from_error(&io);
        assert_eq!(failure.primary().kind, ErrorKind::Internal);
        assert_eq!(failure.primary().message, "disk gone");
    }

    #[test]
    fn outcome_composes_with_question_mark() {
        fn parse(input: &str) -> Outcome<i32> {
            input
                .parse::<i32>()
                .map_err(|e| Failure::new(ResultError::validation(e.to_string())))
        }

        fn double(input: &str) -> Outcome<i32> {
            let n = parse(input)?;
            Ok(n * 2)
        }

        assert_eq!(double("21"), Ok(42));
        let err = double("x").unwrap_err();
        assert_eq!(err.primary().kind, ErrorKind::Validation);
    }

    #[test]
    fn failure_with_no_errors_does_not_deserialize() {
        assert!(serde_json::from_str::<Failure>(r#"{"errors":[]}"#).is_err());

        let failure: Failure =
            serde_json::from_str(r#"{"errors":[{"kind":"CONFLICT","message":"taken"}]}"#).unwrap();
        assert_eq!(failure.primary().kind, ErrorKind::Conflict);
    }

    #[test]
    fn result_error_title_is_skipped_when_absent() {
        let v = serde_json::to_value(ResultError::not_found("no user")).unwrap();
        assert_eq!(v["kind"], "NOT_FOUND");
        assert_eq!(v["message"], "no user");
        assert!(v.get("title").is_none());
    }
}

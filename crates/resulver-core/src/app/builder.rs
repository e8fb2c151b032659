//! MediatorBuilder - Handler の登録と Mediator の構築
//!
//! # 学習ポイント
//! - Builder パターン
//! - 起動時検証（Fail-fast 設計）

use std::any::TypeId;

use tracing::info;

use super::config::MediatorConfig;
use super::mediator::Mediator;
use crate::typed::request::request_name;
use crate::typed::{Handler, RegistryError, Request, TypedRegistry};

/// MediatorBuilder は Mediator を構築
///
/// # 使用例
/// ```
/// use async_trait::async_trait;
/// use resulver_core::app::MediatorBuilder;
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
///     async fn handle(&self, _request: Ping) -> Outcome {
///         Ok(())
///     }
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mediator = MediatorBuilder::new()
///     .register::<Ping, _>(PingHandler)?
///     .expect::<Ping>()
///     .build()?;
///
/// assert!(mediator.send_result(Ping).await.is_ok());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # }).unwrap();
/// ```
///
/// # Fail-fast 設計
/// - `expect::<R>()` で Handler が必須の Request を宣言
/// - `build()` 時に「期待集合 ⊆ 登録済み集合」をチェック
pub struct MediatorBuilder {
    registry: TypedRegistry,
    expected: Vec<(TypeId, &'static str)>,
}

/// BuildError は Mediator 構築時のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("Missing handlers: {0:?}. These request types were expected but not registered.")]
    MissingHandlers(Vec<&'static str>),
}

impl MediatorBuilder {
    pub fn new() -> Self {
        Self::with_config(MediatorConfig::default())
    }

    pub fn with_config(config: MediatorConfig) -> Self {
        Self {
            registry: TypedRegistry::with_policy(config.duplicate_policy),
            expected: Vec::new(),
        }
    }

    pub fn register<R: Request, H: Handler<R> + 'static>(
        mut self,
        handler: H,
    ) -> Result<Self, RegistryError> {
        self.registry.register::<R, H>(handler)?;
        Ok(self)
    }

    /// Declares that `R` must have a handler by the time `build()` runs.
    pub fn expect<R: Request>(mut self) -> Self {
        let key = TypeId::of::<R>();
        if !self.expected.iter().any(|(id, _)| *id == key) {
            self.expected.push((key, request_name::<R>()));
        }
        self
    }

    pub fn build(self) -> Result<Mediator, BuildError> {
        let missing: Vec<&'static str> = self
            .expected
            .iter()
            .filter(|(id, _)| self.registry.get_by_id(*id).is_none())
            .map(|(_, name)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(BuildError::MissingHandlers(missing));
        }

        info!(handlers = self.registry.len(), "Mediator built");
        Ok(Mediator::new(self.registry))
    }
}

impl Default for MediatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::handler::fixtures::{GetValueHandler, PingHandler};
    use crate::result::request::fixtures::{FindUser, GetValue, Ping};
    use crate::typed::DuplicatePolicy;

    #[test]
    fn test_build_success() {
        let mediator = MediatorBuilder::new()
            .register::<Ping, _>(PingHandler)
            .unwrap()
            .expect::<Ping>()
            .build();
        assert!(mediator.is_ok());
    }

    #[test]
    fn test_build_missing_handlers() {
        let mediator = MediatorBuilder::new()
            .register::<Ping, _>(PingHandler)
            .unwrap()
            .expect::<Ping>()
            .expect::<GetValue>()
            .expect::<FindUser>()
            .build();
        assert!(matches!(
            mediator,
            Err(BuildError::MissingHandlers(missing))
                if missing == vec![request_name::<GetValue>(), request_name::<FindUser>()]
        ));
    }

    #[test]
    fn test_expect_is_deduplicated() {
        let err = MediatorBuilder::new()
            .expect::<GetValue>()
            .expect::<GetValue>()
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingHandlers(vec![request_name::<GetValue>()]));
    }

    #[test]
    fn test_build_no_expectations() {
        let mediator = MediatorBuilder::new()
            .register::<GetValue, _>(GetValueHandler)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(mediator.registry().len(), 1);
    }

    #[test]
    fn test_config_controls_duplicates() {
        let rejected = MediatorBuilder::new()
            .register::<Ping, _>(PingHandler)
            .unwrap()
            .register::<Ping, _>(PingHandler);
        assert!(matches!(rejected, Err(RegistryError::AlreadyRegistered(_))));

        let config = MediatorConfig {
            duplicate_policy: DuplicatePolicy::Replace,
        };
        let replaced = MediatorBuilder::with_config(config)
            .register::<Ping, _>(PingHandler)
            .unwrap()
            .register::<Ping, _>(PingHandler);
        assert!(replaced.is_ok());
    }
}

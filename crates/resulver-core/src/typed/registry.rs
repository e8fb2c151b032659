//! TypedRegistry - Handler の登録と管理
//!
//! - `TypeId` keyed map of type-erased handlers
//! - Generic `register::<R, H>()` keeps the Request/Handler pairing typed
//! - Built during initialization, read-only afterwards (no locks)

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::handler::{DynHandler, Handler, TypedHandler};
use super::request::{Request, request_name};

/// What to do when a second handler is registered for the same request type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    /// Last registration wins.
    Replace,
}

/// RegistryError は TypedRegistry の操作エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Handler for request type '{0}' is already registered")]
    AlreadyRegistered(&'static str),
}

pub struct TypedRegistry {
    handlers: HashMap<TypeId, Arc<dyn DynHandler>>,
    duplicate_policy: DuplicatePolicy,
}

impl TypedRegistry {
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            handlers: HashMap::new(),
            duplicate_policy,
        }
    }

    pub fn register<R: Request, H: Handler<R> + 'static>(
        &mut self,
        handler: H,
    ) -> Result<(), RegistryError> {
        let key = TypeId::of::<R>();
        let name = request_name::<R>();
        if self.handlers.contains_key(&key) {
            match self.duplicate_policy {
                DuplicatePolicy::Reject => return Err(RegistryError::AlreadyRegistered(name)),
                DuplicatePolicy::Replace => {
                    warn!(request_type = name, "Replacing previously registered handler");
                }
            }
        }
        self.handlers
            .insert(key, Arc::new(TypedHandler::<R, H>::new(handler)));
        debug!(request_type = name, "Handler registered");
        Ok(())
    }

    pub fn get<R: Request>(&self) -> Option<Arc<dyn DynHandler>> {
        self.get_by_id(TypeId::of::<R>())
    }

    pub fn get_by_id(&self, type_id: TypeId) -> Option<Arc<dyn DynHandler>> {
        self.handlers.get(&type_id).cloned()
    }

    pub fn contains<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }

    /// Names of every request type with a handler, sorted.
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut types: Vec<&'static str> =
            self.handlers.values().map(|h| h.request_type()).collect();
        types.sort_unstable();
        types
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for TypedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! User-registered functions callable from the page.
//!
//! The builtin window operations live in a fixed table (`builtin`); this
//! registry holds everything the application adds on top. Names are unique
//! and last registration wins. Dispatch checks builtins first, so a user
//! registration can never shadow a protocol-level operation.

use std::collections::HashMap;

use casement_common::BridgeError;
use serde_json::Value;
use tracing::info;

/// A host-side handler: positional JSON args in, JSON result out.
pub type Handler = Box<dyn FnMut(&[Value]) -> Result<Value, BridgeError>>;

/// Capability handle returned by [`UserRegistry::register`]. Holds the
/// registered name; dropping it does not unregister.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: String,
}

impl Registration {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Caller-extensible set of application-defined functions.
#[derive(Default)]
pub struct UserRegistry {
    handlers: HashMap<String, Handler>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under `name`. Re-registering a name silently
    /// replaces the prior entry.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F) -> Registration
    where
        F: FnMut(&[Value]) -> Result<Value, BridgeError> + 'static,
    {
        let name = name.into();
        let replaced = self
            .handlers
            .insert(name.clone(), Box::new(handler))
            .is_some();
        if replaced {
            info!(func = %name, "replaced registered function");
        } else {
            info!(func = %name, "registered function for page calls");
        }
        Registration { name }
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Handler> {
        self.handlers.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

//! Host-side dispatcher.
//!
//! Resolves `(funcName, args, callbackId)` triples against the builtin
//! table first, then the user registry, and turns every outcome (including
//! handler failure and unknown names) into exactly one response envelope.
//! Handler failures never propagate out of `dispatch`; the event loop must
//! survive anything a handler does.

use std::time::{Duration, Instant};

use casement_common::BridgeError;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::builtin::{self, BuiltinOp};
use crate::envelope::{CallEnvelope, ResponseEnvelope};
use crate::host::WindowHost;
use crate::registry::{Registration, UserRegistry};
use crate::scheduler::{DeferredCall, DeferredQueue};

/// One dispatcher per bridge instance. Owns the user registry and the
/// deferred queue; the builtin table is static.
#[derive(Default)]
pub struct Dispatcher {
    user: UserRegistry,
    deferred: DeferredQueue,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user function. Builtin names stay reachable regardless,
    /// since builtins are resolved first on dispatch.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F) -> Registration
    where
        F: FnMut(&[Value]) -> Result<Value, BridgeError> + 'static,
    {
        self.user.register(name, handler)
    }

    pub fn user(&self) -> &UserRegistry {
        &self.user
    }

    /// Earliest deferred deadline, for the event loop's wait.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deferred.next_deadline()
    }

    /// Schedule a deferred invocation directly (host-internal use, e.g.
    /// startup hooks). Same semantics as the `after` builtin.
    pub fn schedule(&mut self, delay: Duration, func_name: &str, args: Vec<Value>) -> Value {
        self.deferred.schedule(delay, func_name, args)
    }

    /// Handle one call envelope. Always produces exactly one response
    /// envelope carrying the call's callback id.
    pub fn dispatch(&mut self, host: &mut dyn WindowHost, call: &CallEnvelope) -> ResponseEnvelope {
        match self.resolve_and_invoke(host, call) {
            Ok(result) => {
                debug!(func = %call.func_name, callback_id = %call.callback_id, "dispatch ok");
                ResponseEnvelope::ok(&call.callback_id, &result)
            }
            Err(e) => {
                error!(func = %call.func_name, callback_id = %call.callback_id, error = %e, "dispatch failed");
                ResponseEnvelope::err(&call.callback_id, &e.to_string())
            }
        }
    }

    fn resolve_and_invoke(
        &mut self,
        host: &mut dyn WindowHost,
        call: &CallEnvelope,
    ) -> Result<Value, BridgeError> {
        if let Some(op) = builtin::lookup(&call.func_name) {
            if op == BuiltinOp::After {
                return self.schedule_after(&call.args);
            }
            return op.invoke(host, &call.func_name, &call.args);
        }

        if let Some(handler) = self.user.get_mut(&call.func_name) {
            return handler(&call.args).map_err(|e| BridgeError::Handler(e.to_string()));
        }

        Err(BridgeError::NotFound(call.func_name.clone()))
    }

    fn schedule_after(&mut self, args: &[Value]) -> Result<Value, BridgeError> {
        let delay_ms = builtin::u64_arg("after", args, 0)?;
        let func_name = builtin::str_arg("after", args, 1)?.to_string();
        let captured = args[2..].to_vec();
        Ok(self
            .deferred
            .schedule(Duration::from_millis(delay_ms), &func_name, captured))
    }

    /// Fire every deferred call due at `now`. Results are discarded and no
    /// response envelopes are produced; this path is host-internal
    /// scheduling, not a page call.
    pub fn run_due_deferred(&mut self, host: &mut dyn WindowHost, now: Instant) {
        for call in self.deferred.take_due(now) {
            self.fire_deferred(host, call);
        }
    }

    /// Deferred resolution is inverted relative to `dispatch`: the user
    /// registry is consulted first, then the builtin table.
    fn fire_deferred(&mut self, host: &mut dyn WindowHost, call: DeferredCall) {
        if let Some(handler) = self.user.get_mut(&call.func_name) {
            if let Err(e) = handler(&call.args) {
                warn!(func = %call.func_name, error = %e, "deferred call failed");
            }
            return;
        }

        if let Some(op) = builtin::lookup(&call.func_name) {
            let outcome = if op == BuiltinOp::After {
                self.schedule_after(&call.args).map(|_| Value::Null)
            } else {
                op.invoke(host, &call.func_name, &call.args)
            };
            if let Err(e) = outcome {
                warn!(func = %call.func_name, error = %e, "deferred call failed");
            }
            return;
        }

        debug!(func = %call.func_name, "deferred call target not registered, ignoring");
    }
}

// =============================================================================
// TESTS
// =============================================================================

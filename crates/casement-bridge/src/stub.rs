//! Page-side stub for the call bridge.
//!
//! `BRIDGE_INIT_SCRIPT` is injected as an initialization script into every
//! page. It installs `window.casement.callHost(name, ...args)`, which
//! generates a correlation id, records a pending entry, and posts the call
//! envelope through `window.ipc.postMessage`. The host answers by
//! evaluating the script from [`js_deliver_response`], which settles and
//! removes the matching pending promise. [`js_push_log`] drives the
//! one-way, uncorrelated host-to-page log channel.

use crate::envelope::ResponseEnvelope;

pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function() {
    if (window.casement) {
        return;
    }
    window.casement = {
        ready: true,
        _pending: {},
        _nextId: function() {
            if (window.crypto && window.crypto.randomUUID) {
                return window.crypto.randomUUID();
            }
            return 'xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx'.replace(/[xy]/g, function(c) {
                var r = Math.random() * 16 | 0;
                var v = c === 'x' ? r : (r & 0x3 | 0x8);
                return v.toString(16);
            });
        },
        callHost: function(funcName) {
            var args = Array.prototype.slice.call(arguments, 1);
            var self = this;
            return new Promise(function(resolve, reject) {
                if (!funcName) {
                    reject("funcName must be a non-empty string");
                    return;
                }
                var callbackId = self._nextId();
                self._pending[callbackId] = { resolve: resolve, reject: reject };
                try {
                    window.ipc.postMessage(JSON.stringify({
                        funcName: funcName,
                        args: args,
                        callbackId: callbackId
                    }));
                } catch (e) {
                    delete self._pending[callbackId];
                    reject("Error calling host: " + e);
                }
            });
        },
        _deliver: function(callbackId, success, payload) {
            var pending = this._pending[callbackId];
            if (!pending) {
                return;
            }
            try {
                var parsed = JSON.parse(payload);
                if (success) {
                    pending.resolve(parsed);
                } else {
                    pending.reject(parsed.error || "Unknown error");
                }
            } catch (e) {
                pending.reject("Error parsing result: " + e);
            }
            delete this._pending[callbackId];
        }
    };
    window.logToConsole = window.logToConsole || function(message, level) {
        console.log('[' + (level || 'info') + '] ' + message);
    };
})();
"#;

/// Script that settles the pending promise for one response envelope.
pub fn js_deliver_response(response: &ResponseEnvelope) -> String {
    format!(
        "window.casement._deliver({}, {}, {});",
        js_string(&response.callback_id),
        response.success,
        js_string(&response.payload),
    )
}

/// Script that forwards one host log message to the page's console sink.
pub fn js_push_log(message: &str) -> String {
    format!("window.logToConsole({}, 'info');", js_string(message))
}

fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

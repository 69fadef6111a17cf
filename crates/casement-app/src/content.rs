//! Bundled demo page, loaded when no page URL is configured.
//!
//! Exercises the bridge end to end: an on-page console fed by the host's
//! one-way log channel, and buttons wired to `window.casement.callHost`.

pub const DEFAULT_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>Casement</title>
<style>
    * { margin: 0; padding: 0; box-sizing: border-box; font-family: 'Segoe UI', sans-serif; }
    body { background: #1a2a3c; color: #f0f0f0; min-height: 100vh; padding: 24px; }
    h1 { font-size: 1.6rem; margin-bottom: 4px; }
    .subtitle { opacity: 0.7; margin-bottom: 20px; }
    .btn-group { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 20px; }
    button {
        background: rgba(255, 255, 255, 0.12); border: none; color: #fff;
        padding: 8px 16px; border-radius: 6px; cursor: pointer; font-size: 0.9rem;
    }
    button:hover { background: rgba(255, 255, 255, 0.22); }
    #console {
        background: rgba(0, 0, 0, 0.4); border-radius: 6px; padding: 12px;
        font-family: monospace; font-size: 0.85rem; max-height: 280px; overflow-y: auto;
    }
    .log-entry { padding: 3px 0; border-bottom: 1px solid rgba(255, 255, 255, 0.08); }
    .success { color: #7eff7e; }
    .error { color: #ff7e7e; }
    .info { color: #7ec0ff; }
</style>
</head>
<body>
<h1>Casement</h1>
<div class="subtitle">HTML shell with a page/host call bridge</div>
<div class="btn-group" id="buttons"></div>
<div id="console"></div>
<script>
    window.logToConsole = function(message, level) {
        var el = document.getElementById('console');
        var entry = document.createElement('div');
        entry.className = 'log-entry ' + (level || 'info');
        entry.textContent = '[' + new Date().toLocaleTimeString() + '] ' + message;
        el.appendChild(entry);
        el.scrollTop = el.scrollHeight;
    };

    function bindButton(label, funcName) {
        var args = Array.prototype.slice.call(arguments, 2);
        var btn = document.createElement('button');
        btn.textContent = label;
        btn.addEventListener('click', function() {
            window.casement.callHost.apply(window.casement, [funcName].concat(args))
                .then(function(result) {
                    logToConsole(funcName + '() -> ' + JSON.stringify(result), 'success');
                })
                .catch(function(error) {
                    logToConsole(funcName + '() failed: ' + error, 'error');
                });
        });
        document.getElementById('buttons').appendChild(btn);
    }

    document.addEventListener('DOMContentLoaded', function() {
        bindButton('Hello', 'hello');
        bindButton('Center', 'center');
        bindButton('Resize', 'set_size', 800, 600);
        bindButton('Move', 'set_position', 120, 120);
        bindButton('Minimize', 'minimize');
        bindButton('Maximize', 'maximize');
        bindButton('Restore', 'restore');
        bindButton('Fullscreen', 'fullscreen');
        bindButton('Opacity 0.7', 'set_opacity', 0.7);
        bindButton('Topmost', 'set_topmost', true);
        bindButton('Screen info', 'get_screen_info');
        bindButton('Clipboard set', 'set_clipboard_text', 'Text from Casement');
        bindButton('Clipboard get', 'get_clipboard_text');
        bindButton('Status bar', 'add_statusbar');
        bindButton('Capture', 'capture_window');
        bindButton('In 2s: hello', 'after', 2000, 'hello');
        bindButton('Dialog', 'show_dialog', 'info', 'Casement', 'Hello from the host side');
        bindButton('Close', 'destroy');

        logToConsole('Casement page loaded', 'info');
        logToConsole('Bridge ready: ' + (window.casement && window.casement.ready), 'info');
    });
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defines_the_console_sink() {
        assert!(DEFAULT_PAGE.contains("window.logToConsole"));
        assert!(DEFAULT_PAGE.contains("id=\"console\""));
    }

    #[test]
    fn page_calls_through_the_stub() {
        assert!(DEFAULT_PAGE.contains("window.casement.callHost"));
        // No direct postMessage use; everything goes through the stub.
        assert!(!DEFAULT_PAGE.contains("window.ipc.postMessage"));
    }
}

//! Wry webview backend for fragment injection.
//!
//! Implements [`MarkupHost`] for [`wry::WebView`] by evaluating a
//! loader script in the live page. Markup inserted via `innerHTML`
//! never executes its `<script>` nodes, so the loader re-creates them
//! as fresh elements — otherwise the fragment's close control would be
//! inert.

use crate::controller::MarkupHost;
use crate::error::FlyoutError;

impl MarkupHost for wry::WebView {
    fn inject_markup(&mut self, markup: &str) -> Result<(), FlyoutError> {
        let script = loader_script(markup)?;
        self.evaluate_script(&script)
            .map_err(|e| FlyoutError::Host(e.to_string()))
    }
}

/// Build the loader script that embeds `markup` into the page.
///
/// The markup is escaped into a JS string literal via JSON encoding,
/// which handles quotes, backslashes, and newlines in one pass.
fn loader_script(markup: &str) -> Result<String, FlyoutError> {
    let literal = serde_json::to_string(markup)
        .map_err(|e| FlyoutError::Host(e.to_string()))?;
    Ok(LOADER_JS.replace("__MARKUP__", &literal))
}

/// Parses the fragment off-document, then attaches its nodes to the
/// body, rebuilding `<script>` elements so they execute.
const LOADER_JS: &str = r#"
(function () {
    var tpl = document.createElement('template');
    tpl.innerHTML = __MARKUP__;
    var nodes = Array.prototype.slice.call(tpl.content.childNodes);
    for (var i = 0; i < nodes.length; i++) {
        var node = nodes[i];
        if (node.tagName === 'SCRIPT') {
            var live = document.createElement('script');
            live.className = node.className;
            live.textContent = node.textContent;
            document.body.appendChild(live);
        } else {
            document.body.appendChild(node);
        }
    }
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_embeds_markup_as_a_string_literal() {
        let script =
            loader_script("<div class=\"flyout-panel\">a\nb</div>")
                .unwrap();
        assert!(!script.contains("__MARKUP__"));
        assert!(
            script.contains(r#""<div class=\"flyout-panel\">a\nb</div>""#)
        );
    }
}

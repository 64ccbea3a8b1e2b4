//! The panel renderer: markup in, self-contained fragment out.
//!
//! [`render`] assembles one disposable markup blob from `const`
//! templates: a fixed-position container carrying the caller's content,
//! a `<style>` block (palette variables, slide-in transition, close
//! control), and a `<script>` block wiring the close behavior entirely
//! client-side. Emitting the fragment is the host's job; nothing here
//! touches global state.

use crate::options::{sanitize_width, PanelOptions};

/// Parameters of one panel invocation. Built immediately before each
/// call and discarded after; the renderer treats `content` as opaque
/// markup and never modifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRequest {
    /// Caller-supplied markup, embedded verbatim in the fragment.
    pub content: String,
    /// Recognized panel options (width, side, closable, theme).
    pub options: PanelOptions,
}

impl PanelRequest {
    /// Build a request for `content` with default options.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            options: PanelOptions::default(),
        }
    }

    /// Build a request for `content` with explicit options.
    #[must_use]
    pub fn with_options(
        content: impl Into<String>,
        options: PanelOptions,
    ) -> Self {
        Self {
            content: content.into(),
            options,
        }
    }
}

/// One rendered panel: an opaque markup blob combining structure,
/// style, and close behavior. Self-sufficient once emitted — dismissal
/// never calls back into this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelFragment(String);

impl PanelFragment {
    /// The fragment as markup text, ready for the host's raw-markup
    /// injection primitive.
    #[must_use]
    pub fn as_html(&self) -> &str {
        &self.0
    }

    /// Consume the fragment, yielding the markup text.
    #[must_use]
    pub fn into_html(self) -> String {
        self.0
    }
}

/// Render a request into a [`PanelFragment`].
///
/// Malformed widths degrade to the default width rather than failing.
/// Empty content renders panel chrome only; discouraged, but not an
/// error.
#[must_use]
pub fn render(request: &PanelRequest) -> PanelFragment {
    if request.content.is_empty() {
        log::debug!("rendering panel with empty content");
    }

    let options = &request.options;
    let close = if options.closable { CLOSE_CONTROL } else { "" };

    let html = PANEL_TEMPLATE
        .replace("__WIDTH__", sanitize_width(&options.width))
        .replace("__ANCHOR__", options.side.anchor())
        .replace("__NEAR__", options.side.near_corner())
        .replace("__OFFSET__", options.side.slide_offset())
        .replace("__THEME__", options.theme.as_str())
        .replace("__CLOSE__", close)
        // Content is opaque and substituted last so placeholder-like
        // text inside it survives verbatim.
        .replace("__CONTENT__", &request.content);

    PanelFragment(html)
}

// ── Fragment templates ───────────────────────────────────────────────────

/// Container + style + behavior. Class-based lookups, no ids: repeated
/// emission must keep working when an older instance is still attached.
const PANEL_TEMPLATE: &str = r#"<div class="flyout-panel" data-theme="__THEME__" style="position:fixed;top:0;__ANCHOR__:0;width:__WIDTH__;height:100vh;z-index:2147483647;box-sizing:border-box;overflow-y:auto;margin:0;background:var(--flyout-bg);color:var(--flyout-text);transform:translateX(__OFFSET__);transition:transform 0.3s ease;">
__CLOSE__
<div class="flyout-content">__CONTENT__</div>
</div>
<style class="flyout-panel-style">
.flyout-panel {
    --flyout-bg: #ffffff;
    --flyout-text: #262730;
    --flyout-border: #e6eaf1;
    --flyout-shadow: rgba(0, 0, 0, 0.1);
    border-__NEAR__: 1px solid var(--flyout-border);
    box-shadow: 0 0 12px var(--flyout-shadow);
}
.flyout-panel[data-theme="dark"] {
    --flyout-bg: #0e1117;
    --flyout-text: #fafafa;
    --flyout-border: #262730;
    --flyout-shadow: rgba(0, 0, 0, 0.3);
}
.flyout-panel.flyout-visible {
    transform: translateX(0) !important;
}
.flyout-close {
    position: absolute;
    top: 8px;
    __NEAR__: 8px;
    cursor: pointer;
    font-size: 24px;
    line-height: 1;
    padding: 2px 10px;
    border-radius: 4px;
    user-select: none;
}
.flyout-close:hover {
    background: var(--flyout-shadow);
}
.flyout-content {
    padding-top: 40px;
}
</style>
<script class="flyout-panel-script">
(function () {
    var panels = document.querySelectorAll('.flyout-panel');
    var panel = panels[panels.length - 1];
    if (!panel) return;

    // Exactly one panel per page: drop any earlier instances along
    // with their style/script nodes.
    var sweep = function (selector, keep) {
        var nodes = document.querySelectorAll(selector);
        for (var i = 0; i < nodes.length; i++) {
            if (nodes[i] !== keep) nodes[i].remove();
        }
    };
    sweep('.flyout-panel', panel);
    var styles = document.querySelectorAll('.flyout-panel-style');
    var style = styles[styles.length - 1];
    sweep('.flyout-panel-style', style);
    var scripts = document.querySelectorAll('.flyout-panel-script');
    var script = scripts[scripts.length - 1];
    sweep('.flyout-panel-script', script);

    if (panel.getAttribute('data-theme') === 'auto') {
        var dark = false;
        try {
            var bg = window.getComputedStyle(document.body).backgroundColor;
            var rgb = bg.match(/\d+/g);
            if (rgb) {
                var brightness =
                    (rgb[0] * 299 + rgb[1] * 587 + rgb[2] * 114) / 1000;
                dark = brightness < 128;
            }
        } catch (e) {
            // Unreadable background: keep the light palette.
        }
        panel.setAttribute('data-theme', dark ? 'dark' : 'light');
    }

    var fit = function () {
        panel.style.height = window.innerHeight + 'px';
    };
    window.addEventListener('resize', fit);
    fit();

    var closing = false;
    var close = function () {
        if (closing) return;
        closing = true;
        panel.classList.remove('flyout-visible');
        panel.addEventListener('transitionend', function () {
            panel.remove();
            if (style) style.remove();
            if (script) script.remove();
            window.removeEventListener('resize', fit);
        }, { once: true });
    };

    var btn = panel.querySelector('.flyout-close');
    if (btn) btn.addEventListener('click', close);

    requestAnimationFrame(function () {
        panel.classList.add('flyout-visible');
    });
})();
</script>
"#;

/// Close control markup; omitted when `closable` is off.
const CLOSE_CONTROL: &str = r#"<span class="flyout-close">&#xD7;</span>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Side, Theme, DEFAULT_WIDTH};

    fn request(content: &str) -> PanelRequest {
        PanelRequest::new(content)
    }

    #[test]
    fn default_fragment_is_right_anchored_at_default_width() {
        let fragment = render(&request("<h1>Hello</h1>"));
        let html = fragment.as_html();
        assert!(html.contains(&format!("width:{DEFAULT_WIDTH}")));
        assert!(html.contains("right:0"));
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("flyout-close"));
    }

    #[test]
    fn fragment_reflects_requested_width() {
        let mut req = request("<p>x</p>");
        req.options.width = "400px".to_owned();
        let fragment = render(&req);
        assert!(fragment.as_html().contains("width:400px"));
    }

    #[test]
    fn fragment_reflects_requested_side() {
        let mut req = request("<p>x</p>");
        req.options.side = Side::Left;
        let fragment = render(&req);
        let html = fragment.as_html();
        assert!(html.contains("left:0"));
        assert!(html.contains("translateX(-100%)"));
        // Close control sits at the corner nearest page content.
        assert!(html.contains("right: 8px"));
    }

    #[test]
    fn malformed_width_degrades_to_default() {
        for bad in ["", "wide", "12", "-40px", "300furlongs"] {
            let mut req = request("<p>x</p>");
            req.options.width = bad.to_owned();
            let fragment = render(&req);
            assert!(
                fragment.as_html().contains(&format!("width:{DEFAULT_WIDTH}")),
                "width {bad:?} should fall back"
            );
        }
    }

    #[test]
    fn content_appears_verbatim() {
        let content =
            r#"<div data-x="1 &amp; 2"><h2>T</h2><p>a < b</p></div>"#;
        let fragment = render(&request(content));
        assert!(fragment.as_html().contains(content));
    }

    #[test]
    fn placeholder_like_content_survives() {
        let content = "<p>__WIDTH__ and __CONTENT__</p>";
        let fragment = render(&request(content));
        assert!(fragment.as_html().contains(content));
    }

    #[test]
    fn close_control_omitted_when_not_closable() {
        let mut req = request("<p>x</p>");
        req.options.closable = false;
        let fragment = render(&req);
        assert!(!fragment.as_html().contains("flyout-close\">"));
    }

    #[test]
    fn theme_choice_lands_in_data_attribute() {
        let mut req = request("<p>x</p>");
        req.options.theme = Theme::Dark;
        let fragment = render(&req);
        assert!(fragment.as_html().contains(r#"data-theme="dark""#));
    }

    #[test]
    fn empty_content_still_renders_chrome() {
        let fragment = render(&request(""));
        let html = fragment.as_html();
        assert!(html.contains("flyout-panel"));
        assert!(html.contains("flyout-close"));
    }

    #[test]
    fn fragment_is_a_fixed_full_height_overlay() {
        let html = render(&request("<p>x</p>")).into_html();
        assert!(html.contains("position:fixed"));
        assert!(html.contains("height:100vh"));
        assert!(html.contains("z-index:2147483647"));
    }

    #[test]
    fn rendering_is_pure() {
        let req = request("<h1>same</h1>");
        assert_eq!(render(&req), render(&req));
    }
}

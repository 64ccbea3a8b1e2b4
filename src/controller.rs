//! Panel controller — the public entry point host code calls each
//! re-render cycle.
//!
//! The controller is stateless across calls: every invocation builds a
//! fresh [`PanelRequest`], renders it, and pushes the fragment through
//! the host's injection primitive. Persistence across the host's
//! re-render cycles is the caller's re-invocation discipline, not
//! state held here — a cycle with one call shows one panel, a cycle
//! with none shows none.

use crate::error::FlyoutError;
use crate::options::PanelOptions;
use crate::render::{self, PanelRequest};

/// The host's raw-markup injection primitive.
///
/// Implementations embed the blob live in the rendered page and must
/// not strip executable behavior — the fragment's close control relies
/// on its embedded script.
pub trait MarkupHost {
    /// Embed `markup` into the current page render pass.
    fn inject_markup(&mut self, markup: &str) -> Result<(), FlyoutError>;
}

/// Owns a [`MarkupHost`] and the defaults applied to each invocation.
pub struct PanelController<H> {
    host: H,
    defaults: PanelOptions,
}

// ── Construction ─────────────────────────────────────────────────────────

impl<H> PanelController<H> {
    /// Create a controller with default panel options.
    pub fn new(host: H) -> Self {
        Self::with_defaults(host, PanelOptions::default())
    }

    /// Create a controller whose invocations start from `defaults`
    /// (e.g. a preset loaded via [`PanelOptions::load`]).
    pub const fn with_defaults(host: H, defaults: PanelOptions) -> Self {
        Self { host, defaults }
    }

    /// The defaults applied to each invocation.
    pub const fn defaults(&self) -> &PanelOptions {
        &self.defaults
    }
}

// ── Invocation ───────────────────────────────────────────────────────────

impl<H: MarkupHost> PanelController<H> {
    /// Show a panel containing `content`, using the controller's
    /// defaults. Call once per re-render cycle the panel should stay
    /// visible.
    pub fn show_panel(&mut self, content: &str) -> Result<(), FlyoutError> {
        let request =
            PanelRequest::with_options(content, self.defaults.clone());
        self.show_panel_with(&request)
    }

    /// Show a panel with an explicit width. Malformed widths degrade
    /// to the default width rather than failing.
    pub fn show_panel_sized(
        &mut self,
        content: &str,
        width: &str,
    ) -> Result<(), FlyoutError> {
        let mut options = self.defaults.clone();
        options.width = width.to_owned();
        self.show_panel_with(&PanelRequest::with_options(content, options))
    }

    /// Show a panel with explicit width and anchor side, both as raw
    /// strings. An unsupported side aborts the invocation with
    /// [`FlyoutError::InvalidParameter`]; no fragment is emitted.
    pub fn show_panel_at(
        &mut self,
        content: &str,
        width: &str,
        side: &str,
    ) -> Result<(), FlyoutError> {
        let mut options = self.defaults.clone();
        options.side = side.parse()?;
        options.width = width.to_owned();
        self.show_panel_with(&PanelRequest::with_options(content, options))
    }

    /// Show a panel from a fully-specified request.
    pub fn show_panel_with(
        &mut self,
        request: &PanelRequest,
    ) -> Result<(), FlyoutError> {
        let fragment = render::render(request);
        self.host.inject_markup(fragment.as_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Side, DEFAULT_WIDTH};

    /// Records every injected blob, one entry per render pass.
    #[derive(Default)]
    struct RecordingHost {
        injected: Vec<String>,
    }

    impl MarkupHost for RecordingHost {
        fn inject_markup(
            &mut self,
            markup: &str,
        ) -> Result<(), FlyoutError> {
            self.injected.push(markup.to_owned());
            Ok(())
        }
    }

    struct FailingHost;

    impl MarkupHost for FailingHost {
        fn inject_markup(&mut self, _: &str) -> Result<(), FlyoutError> {
            Err(FlyoutError::Host("injection refused".to_owned()))
        }
    }

    #[test]
    fn one_call_emits_one_fragment() {
        let mut ctl = PanelController::new(RecordingHost::default());
        ctl.show_panel("<h1>Hello</h1>").unwrap();

        assert_eq!(ctl.host.injected.len(), 1);
        let html = &ctl.host.injected[0];
        assert!(html.contains(&format!("width:{DEFAULT_WIDTH}")));
        assert!(html.contains("right:0"));
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("flyout-close"));
    }

    #[test]
    fn explicit_width_lands_in_fragment() {
        let mut ctl = PanelController::new(RecordingHost::default());
        ctl.show_panel_sized("<p>x</p>", "400px").unwrap();
        assert!(ctl.host.injected[0].contains("width:400px"));
    }

    #[test]
    fn unsupported_side_aborts_before_injection() {
        let mut ctl = PanelController::new(RecordingHost::default());
        let err = ctl.show_panel_at("<p>x</p>", "400px", "top").unwrap_err();
        assert!(matches!(err, FlyoutError::InvalidParameter(_)));
        assert!(ctl.host.injected.is_empty());
    }

    #[test]
    fn repeated_calls_are_structurally_equivalent() {
        let mut ctl = PanelController::new(RecordingHost::default());
        ctl.show_panel("<p>same</p>").unwrap();
        ctl.show_panel("<p>same</p>").unwrap();

        assert_eq!(ctl.host.injected.len(), 2);
        assert_eq!(ctl.host.injected[0], ctl.host.injected[1]);
    }

    #[test]
    fn reinvocation_keeps_panel_across_cycles() {
        // Host-driven persistence: three re-render cycles, one call
        // each, yield a panel in all three render passes.
        let mut ctl = PanelController::new(RecordingHost::default());
        for _ in 0..3 {
            ctl.show_panel("<p>sticky</p>").unwrap();
        }

        assert_eq!(ctl.host.injected.len(), 3);
        for html in &ctl.host.injected {
            assert!(html.contains("<p>sticky</p>"));
            assert!(html.contains("flyout-panel"));
        }
    }

    #[test]
    fn preset_defaults_apply_to_every_call() {
        let defaults = PanelOptions {
            side: Side::Left,
            closable: false,
            ..PanelOptions::default()
        };
        let mut ctl = PanelController::with_defaults(
            RecordingHost::default(),
            defaults,
        );
        ctl.show_panel("<p>x</p>").unwrap();

        let html = &ctl.host.injected[0];
        assert!(html.contains("left:0"));
        assert!(!html.contains("flyout-close\">"));
    }

    #[test]
    fn host_failure_surfaces_as_host_error() {
        let mut ctl = PanelController::new(FailingHost);
        let err = ctl.show_panel("<p>x</p>").unwrap_err();
        assert!(matches!(err, FlyoutError::Host(_)));
    }
}

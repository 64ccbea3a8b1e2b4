// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Self-contained slide-in HTML overlay panels for webview-hosted UIs.
//!
//! Flyout turns a block of caller-supplied markup into a fixed-position
//! panel anchored to one edge of the viewport, complete with inline
//! styling, a close control, and an embedded behavior script. The
//! emitted fragment is disposable: it carries everything needed to
//! slide in, track viewport height, and dismiss itself, with no call
//! back into this crate.
//!
//! The crate holds no panel state. Hosts that re-render on every
//! interaction re-invoke [`controller::PanelController::show_panel`]
//! each cycle the panel should stay visible; a cycle without a call
//! renders no panel.
//!
//! # Key entry points
//!
//! - [`controller::PanelController`] - the public entry point; hands
//!   requests to the renderer and emits fragments through a
//!   [`controller::MarkupHost`]
//! - [`render::render`] - the panel renderer (markup in, fragment out)
//! - [`options::PanelOptions`] - width, anchor side, close control,
//!   theme; TOML-loadable presets

pub mod controller;
pub mod error;
pub mod options;
pub mod render;

#[cfg(feature = "webview")]
pub mod host;

pub use controller::{MarkupHost, PanelController};
pub use error::FlyoutError;
pub use options::{PanelOptions, Side, Theme, DEFAULT_WIDTH};
pub use render::{render, PanelFragment, PanelRequest};

//! Report assembly.
//!
//! A [`ReportRenderer`] receives one [`akmc_protocol::ProcessRecord`] per
//! qualifying process and writes a single document:
//! - [`HtmlReport`]: an HTML table of images or JSmol viewers
//! - [`SlideDeck`]: one slide per process, written by an external deck writer

pub mod base;
pub mod html;
pub mod slides;

pub use base::{create_renderer, ReportRenderer};
pub use html::{HtmlFlavor, HtmlReport, RECORDS_MARKER};
pub use slides::{Picture, Slide, SlideDeck};

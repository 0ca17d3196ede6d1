//! Structure conversion.
//!
//! This module provides the `Converter` trait, the planned jobs it runs, an
//! implementation delegating to external programs, and a mock for tests.
//! Reading and writing structure formats is never done here; converters are
//! handed file paths only.

pub mod base;
pub mod external;
pub mod job;
pub mod mock;
pub mod single;

pub use base::{ConversionError, Converter};
pub use external::ExternalConverter;
pub use job::{ConversionJob, ReactionPath, StillConversion};
pub use mock::{MockCall, MockConverter};
pub use single::{convert_single, view_structure};

//! Charter: class-diagram source generation for code structure models.
//!
//! This crate turns a finished collection of [`charter_core::Entity`] values
//! into diagram source text. The pipeline is:
//!
//! ```text
//! Scanner (external)
//!     ↓ fragments
//! EntityBuilder (charter-core) - one session per entity
//!     ↓ Entity values
//! Generator (this crate) - one implementation per notation
//!     ↓
//! Diagram source text on an io::Write sink
//! ```
//!
//! Two notations are provided: [`generator::mermaid::Mermaid`] emits the
//! minimal Mermaid class-diagram skeleton, [`generator::plantuml::PlantUml`]
//! emits PlantUML including members. Both stream directly to their sink; a
//! failed write aborts generation and leaves prior output in place.

pub mod generator;

pub use generator::{Error, Generator};

//! The generator abstraction: one trait, one implementation per notation.

pub mod mermaid;
pub mod plantuml;

use std::io;

use thiserror::Error as ThisError;

use charter_core::Entity;

/// Serializes entities into one notation's diagram source text.
///
/// A generator is constructed over a writable sink and holds no other state.
/// Each [`generate`](Generator::generate) call writes one complete document:
/// a notation header, then one block per entity in input order. Entities are
/// not deduplicated; duplicate names produce duplicate blocks, identity
/// uniqueness is the caller's concern.
pub trait Generator {
    /// Write a complete diagram document for `entities` to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] as soon as the sink rejects a write. Output
    /// already written stays in the sink; there is no rollback.
    fn generate(&mut self, entities: &[Entity]) -> Result<(), Error>;
}

/// Errors raised while generating diagram text.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

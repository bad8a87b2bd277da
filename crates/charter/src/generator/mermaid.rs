//! Mermaid class-diagram notation.

use std::io::{self, Write};

use log::debug;

use charter_core::Entity;

use crate::generator::{Error, Generator};

const HEADER: &str = "classDiagram\n    direction TB\n\n";

/// Generates a Mermaid `classDiagram` document.
///
/// This renderer emits the class-block skeleton only: each entity becomes an
/// empty `class Name { }` block carrying the simple type name. Members,
/// modifiers and relations are left to richer notations.
pub struct Mermaid<W> {
    writer: W,
}

impl<W: Write> Mermaid<W> {
    /// Create a generator that writes to the given sink.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the generator and hand the sink back.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(HEADER.as_bytes())
    }

    fn write_entity(&mut self, entity: &Entity) -> io::Result<()> {
        write!(self.writer, "    class {} {{\n    }}\n\n", entity.name())
    }
}

impl<W: Write> Generator for Mermaid<W> {
    fn generate(&mut self, entities: &[Entity]) -> Result<(), Error> {
        debug!(entities_len = entities.len(); "Generating Mermaid class diagram");

        self.write_header()?;
        for entity in entities {
            self.write_entity(entity)?;
        }
        Ok(())
    }
}

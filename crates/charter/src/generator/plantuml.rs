//! PlantUML class-diagram notation.
//!
//! Unlike the Mermaid skeleton, this renderer consumes the whole entity
//! model: stereotype keywords, member fields and methods with visibility
//! glyphs. Relations between entities are still out of scope.

use std::collections::BTreeSet;
use std::io::{self, Write};

use log::debug;

use charter_core::{Entity, Field, Method, Modifier, Stereotype};

use crate::generator::{Error, Generator};

/// Generates a PlantUML document (`@startuml` .. `@enduml`).
pub struct PlantUml<W> {
    writer: W,
}

impl<W: Write> PlantUml<W> {
    /// Create a generator that writes to the given sink.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the generator and hand the sink back.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_entity(&mut self, entity: &Entity) -> io::Result<()> {
        let keyword = stereotype_keyword(entity.stereotype());
        match entity.stereotype() {
            Stereotype::Record => {
                writeln!(self.writer, "{keyword} {} <<record>> {{", entity.name())?;
            }
            _ => writeln!(self.writer, "{keyword} {} {{", entity.name())?,
        }
        for field in entity.fields() {
            self.write_field(field)?;
        }
        for method in entity.methods() {
            self.write_method(method)?;
        }
        writeln!(self.writer, "}}\n")
    }

    fn write_field(&mut self, field: &Field) -> io::Result<()> {
        writeln!(
            self.writer,
            "  {}{} : {}",
            visibility(field.modifiers()),
            field.name(),
            field.type_info(),
        )
    }

    fn write_method(&mut self, method: &Method) -> io::Result<()> {
        let parameters = method
            .parameters()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            self.writer,
            "  {}{}({parameters}) : {}",
            visibility(method.modifiers()),
            method.name(),
            method.return_type(),
        )
    }
}

impl<W: Write> Generator for PlantUml<W> {
    fn generate(&mut self, entities: &[Entity]) -> Result<(), Error> {
        debug!(entities_len = entities.len(); "Generating PlantUML class diagram");

        self.writer.write_all(b"@startuml\n\n")?;
        for entity in entities {
            self.write_entity(entity)?;
        }
        self.writer.write_all(b"@enduml\n")?;
        Ok(())
    }
}

fn stereotype_keyword(stereotype: Stereotype) -> &'static str {
    match stereotype {
        Stereotype::Class | Stereotype::Record => "class",
        Stereotype::Abstract => "abstract class",
        Stereotype::Interface => "interface",
        Stereotype::Enum => "enum",
        Stereotype::Annotation => "annotation",
    }
}

/// The PlantUML visibility glyph for a modifier set. Members without an
/// access modifier get no glyph.
fn visibility(modifiers: &BTreeSet<Modifier>) -> &'static str {
    if modifiers.contains(&Modifier::Public) {
        "+"
    } else if modifiers.contains(&Modifier::Private) {
        "-"
    } else if modifiers.contains(&Modifier::Protected) {
        "#"
    } else if modifiers.contains(&Modifier::Package) {
        "~"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use charter_core::TypeInfo;

    use super::*;

    fn generate_to_string(entities: &[Entity]) -> String {
        let mut generator = PlantUml::new(Vec::new());
        generator.generate(entities).expect("Vec sink never fails");
        String::from_utf8(generator.into_inner()).expect("output is UTF-8")
    }

    #[test]
    fn test_empty_sequence_writes_envelope_only() {
        assert_eq!(generate_to_string(&[]), "@startuml\n\n@enduml\n");
    }

    #[test]
    fn test_entity_with_members() {
        let entity = Entity::new(
            BTreeSet::from([Modifier::Public]),
            TypeInfo::new("org.acme.Counter"),
            Stereotype::Class,
            vec![Field::new(
                BTreeSet::from([Modifier::Private]),
                "count",
                TypeInfo::new("int"),
            )],
            vec![Method::new(
                BTreeSet::from([Modifier::Public]),
                "increment",
                TypeInfo::new("int"),
                vec![TypeInfo::new("int")],
            )],
        );

        assert_eq!(
            generate_to_string(&[entity]),
            "@startuml\n\n\
             class Counter {\n\
             \x20 -count : int\n\
             \x20 +increment(int) : int\n\
             }\n\n\
             @enduml\n"
        );
    }

    #[test]
    fn test_stereotype_keywords() {
        let make = |name: &str, stereotype| {
            Entity::new(
                BTreeSet::from([Modifier::Public]),
                TypeInfo::new(name),
                stereotype,
                Vec::new(),
                Vec::new(),
            )
        };
        let output = generate_to_string(&[
            make("A", Stereotype::Interface),
            make("B", Stereotype::Enum),
            make("C", Stereotype::Abstract),
            make("D", Stereotype::Record),
            make("E", Stereotype::Annotation),
        ]);

        assert!(output.contains("interface A {"));
        assert!(output.contains("enum B {"));
        assert!(output.contains("abstract class C {"));
        assert!(output.contains("class D <<record>> {"));
        assert!(output.contains("annotation E {"));
    }

    #[test]
    fn test_generic_types_render_parameters() {
        let entity = Entity::new(
            BTreeSet::from([Modifier::Public]),
            TypeInfo::new("Registry"),
            Stereotype::Class,
            vec![Field::new(
                BTreeSet::new(),
                "entries",
                TypeInfo::with_parameters("List", vec![TypeInfo::new("String")]),
            )],
            Vec::new(),
        );

        assert!(generate_to_string(&[entity]).contains("  entries : List<String>\n"));
    }
}

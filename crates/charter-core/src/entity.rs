//! Immutable model of structural code elements.
//!
//! An [`Entity`] describes one class-like element (class, interface, enum,
//! record, annotation) as discovered by a scanner: its modifiers, its
//! identifying type, its [`Stereotype`], and its member [`Field`]s and
//! [`Method`]s in discovery order.
//!
//! Every type here is a plain immutable value. Entities are assembled through
//! [`crate::builder::EntityBuilder`]; once constructed they are never mutated,
//! so generators can share and reorder them freely.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Access and behavior modifiers of an entity or one of its members.
///
/// `Ord` is derived so modifier sets have a deterministic iteration order,
/// which keeps generated diagram text stable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    /// Package-private (default visibility in the scanned language).
    Package,
    Static,
    Final,
    Abstract,
}

/// The kind of a structural entity, used to select rendering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stereotype {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
    /// An abstract class, as opposed to a concrete [`Stereotype::Class`].
    Abstract,
}

/// A type descriptor: a qualified name plus its generic type parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    name: String,
    type_parameters: Vec<TypeInfo>,
}

impl TypeInfo {
    /// Create a non-generic type descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
        }
    }

    /// Create a generic type descriptor with the given type parameters.
    pub fn with_parameters(name: impl Into<String>, type_parameters: Vec<TypeInfo>) -> Self {
        Self {
            name: name.into(),
            type_parameters,
        }
    }

    /// The qualified name as given by the scanner, e.g. `java.util.List`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generic type parameters, empty for non-generic types.
    pub fn type_parameters(&self) -> &[TypeInfo] {
        &self.type_parameters
    }

    /// The last dot-separated segment of the name, e.g. `List` for
    /// `java.util.List`. Returns the whole name when it has no package part.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some((first, rest)) = self.type_parameters.split_first() {
            write!(f, "<{first}")?;
            for param in rest {
                write!(f, ", {param}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

/// One field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    modifiers: BTreeSet<Modifier>,
    name: String,
    type_info: TypeInfo,
}

impl Field {
    /// Create a field descriptor.
    pub fn new(modifiers: BTreeSet<Modifier>, name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self {
            modifiers,
            name: name.into(),
            type_info,
        }
    }

    pub fn modifiers(&self) -> &BTreeSet<Modifier> {
        &self.modifiers
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's declared type.
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }
}

/// One method of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    modifiers: BTreeSet<Modifier>,
    name: String,
    return_type: TypeInfo,
    parameters: Vec<TypeInfo>,
}

impl Method {
    /// Create a method descriptor. Parameter order is the declaration order.
    pub fn new(
        modifiers: BTreeSet<Modifier>,
        name: impl Into<String>,
        return_type: TypeInfo,
        parameters: Vec<TypeInfo>,
    ) -> Self {
        Self {
            modifiers,
            name: name.into(),
            return_type,
            parameters,
        }
    }

    pub fn modifiers(&self) -> &BTreeSet<Modifier> {
        &self.modifiers
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &TypeInfo {
        &self.return_type
    }

    pub fn parameters(&self) -> &[TypeInfo] {
        &self.parameters
    }
}

/// An immutable structural entity: one class, interface, enum, record or
/// annotation together with its members.
///
/// All parts are supplied at construction time, so a partially populated
/// `Entity` cannot exist. Members keep the order in which the scanner
/// discovered them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    modifiers: BTreeSet<Modifier>,
    type_info: TypeInfo,
    stereotype: Stereotype,
    fields: Vec<Field>,
    methods: Vec<Method>,
}

impl Entity {
    /// Create an entity from its complete set of parts.
    pub fn new(
        modifiers: BTreeSet<Modifier>,
        type_info: TypeInfo,
        stereotype: Stereotype,
        fields: Vec<Field>,
        methods: Vec<Method>,
    ) -> Self {
        Self {
            modifiers,
            type_info,
            stereotype,
            fields,
            methods,
        }
    }

    /// The entity's display name: the simple name of its type.
    pub fn name(&self) -> &str {
        self.type_info.simple_name()
    }

    pub fn modifiers(&self) -> &BTreeSet<Modifier> {
        &self.modifiers
    }

    /// The identifying type of the entity.
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    pub fn stereotype(&self) -> Stereotype {
        self.stereotype
    }

    /// Fields in discovery order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Methods in discovery order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name_strips_package() {
        let info = TypeInfo::new("com.example.store.Inventory");
        assert_eq!(info.simple_name(), "Inventory");
    }

    #[test]
    fn test_simple_name_without_package() {
        let info = TypeInfo::new("Inventory");
        assert_eq!(info.simple_name(), "Inventory");
    }

    #[test]
    fn test_display_non_generic() {
        let info = TypeInfo::new("java.lang.String");
        assert_eq!(info.to_string(), "java.lang.String");
    }

    #[test]
    fn test_display_generic() {
        let info = TypeInfo::with_parameters(
            "java.util.Map",
            vec![
                TypeInfo::new("String"),
                TypeInfo::with_parameters("List", vec![TypeInfo::new("Integer")]),
            ],
        );
        assert_eq!(info.to_string(), "java.util.Map<String, List<Integer>>");
    }

    #[test]
    fn test_entity_name_is_simple_type_name() {
        let entity = Entity::new(
            BTreeSet::from([Modifier::Public]),
            TypeInfo::new("org.acme.Widget"),
            Stereotype::Class,
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(entity.name(), "Widget");
    }

    #[test]
    fn test_modifier_set_iteration_is_deterministic() {
        let a = BTreeSet::from([Modifier::Final, Modifier::Public, Modifier::Static]);
        let b = BTreeSet::from([Modifier::Static, Modifier::Final, Modifier::Public]);
        let collect = |set: &BTreeSet<Modifier>| set.iter().copied().collect::<Vec<_>>();
        assert_eq!(collect(&a), collect(&b));
    }
}

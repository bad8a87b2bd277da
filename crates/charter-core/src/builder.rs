//! Session-scoped accumulation of entity fragments.
//!
//! A scanner rarely sees an entity all at once: modifiers, the type, the
//! stereotype and the members arrive as separate events while it walks a
//! class file. [`EntityBuilder`] collects those fragments and releases one
//! immutable [`Entity`] per session through [`EntityBuilder::finish`].
//!
//! A session is all-or-nothing: if any of the three scalar attributes
//! (modifiers, type, stereotype) was never set, `finish` yields `None` and the
//! fragments gathered so far are discarded. Either way the builder resets to
//! empty and can immediately start the next session.

use std::collections::BTreeSet;
use std::mem;

use log::{debug, trace};

use crate::entity::{Entity, Field, Method, Modifier, Stereotype, TypeInfo};

/// Accumulates fragments of one entity and builds it on demand.
///
/// The builder has two implicit states, empty and accumulating; any setter
/// moves it to accumulating and only [`finish`](Self::finish) moves it back.
/// It is a single-owner object: one in-progress entity per builder. Use one
/// builder per concurrently scanned entity.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use charter_core::{EntityBuilder, Modifier, Stereotype, TypeInfo};
///
/// let mut builder = EntityBuilder::new();
/// builder
///     .set_modifiers(BTreeSet::from([Modifier::Public]))
///     .set_type_info(TypeInfo::new("org.acme.Widget"))
///     .set_stereotype(Stereotype::Class);
///
/// let entity = builder.finish().expect("all scalar attributes were set");
/// assert_eq!(entity.name(), "Widget");
///
/// // The builder is empty again.
/// assert!(builder.finish().is_none());
/// ```
#[derive(Debug, Default)]
pub struct EntityBuilder {
    modifiers: Option<BTreeSet<Modifier>>,
    type_info: Option<TypeInfo>,
    stereotype: Option<Stereotype>,
    fields: Vec<Field>,
    methods: Vec<Method>,
}

impl EntityBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field to the pending entity. Fields keep insertion order and
    /// are never deduplicated.
    pub fn add_field(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Append a method to the pending entity. Methods keep insertion order
    /// and are never deduplicated.
    pub fn add_method(&mut self, method: Method) -> &mut Self {
        self.methods.push(method);
        self
    }

    /// Set the modifiers of the pending entity, replacing any earlier set.
    ///
    /// The set is moved into the builder, so later caller-side mutation
    /// cannot reach the pending state.
    pub fn set_modifiers(&mut self, modifiers: BTreeSet<Modifier>) -> &mut Self {
        self.modifiers = Some(modifiers);
        self
    }

    /// Set the identifying type of the pending entity, replacing any earlier
    /// value.
    pub fn set_type_info(&mut self, type_info: TypeInfo) -> &mut Self {
        self.type_info = Some(type_info);
        self
    }

    /// Set the stereotype of the pending entity, replacing any earlier value.
    pub fn set_stereotype(&mut self, stereotype: Stereotype) -> &mut Self {
        self.stereotype = Some(stereotype);
        self
    }

    /// End the current session.
    ///
    /// Returns the completed [`Entity`] if modifiers, type and stereotype
    /// were all set during this session, `None` otherwise. The builder is
    /// reset to empty in both cases; an incomplete session loses its
    /// accumulated fields and methods.
    pub fn finish(&mut self) -> Option<Entity> {
        let pending = mem::take(self);
        match (pending.modifiers, pending.type_info, pending.stereotype) {
            (Some(modifiers), Some(type_info), Some(stereotype)) => {
                trace!(
                    entity = type_info.name(),
                    fields_len = pending.fields.len(),
                    methods_len = pending.methods.len();
                    "Entity session completed",
                );
                Some(Entity::new(
                    modifiers,
                    type_info,
                    stereotype,
                    pending.fields,
                    pending.methods,
                ))
            }
            _ => {
                debug!(
                    fields_len = pending.fields.len(),
                    methods_len = pending.methods.len();
                    "Discarding incomplete entity session",
                );
                None
            }
        }
    }
}

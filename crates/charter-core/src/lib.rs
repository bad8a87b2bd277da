//! Charter Core Types and Definitions
//!
//! This crate provides the foundational types for the Charter diagram
//! pipeline. It includes:
//!
//! - **Entity model**: Immutable descriptions of structural code elements
//!   ([`entity`] module: [`entity::Entity`], [`entity::Field`],
//!   [`entity::Method`], [`entity::TypeInfo`])
//! - **Builder**: Session-scoped accumulation of entity fragments
//!   ([`builder::EntityBuilder`])
//!
//! The model is produced by an upstream scanner (source or bytecode) one
//! fragment at a time and consumed downstream by notation generators. Nothing
//! in this crate performs I/O.

pub mod builder;
pub mod entity;

pub use builder::EntityBuilder;
pub use entity::{Entity, Field, Method, Modifier, Stereotype, TypeInfo};

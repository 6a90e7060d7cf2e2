#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Model graph for nspack configuration packages

mod element;
mod field;
mod module;
mod name;
mod reference;
mod section;

pub use element::{Element, ExpressionKind, Expressions};
pub use field::Field;
pub use module::{Module, Package};
pub use name::{FIELD_SEPARATOR, NAMESPACE_SEPARATOR, full_name};
pub use reference::{ElementName, FieldId, ModuleName, PackageName, SectionName};
pub use section::Section;

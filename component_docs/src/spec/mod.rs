//! Declarative description of components and their configuration fields.

mod component;
mod field;
mod flatten;

pub use component::{AnnotatedExample, ComponentSpec, ComponentType, Status};
pub use field::{FieldKind, FieldSpec, FieldType};
pub use flatten::DocField;

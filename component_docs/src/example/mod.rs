//! Filtered, ordered views of a component's example config.
//!
//! An example value is encoded into an [`ExampleNode`] tree and walked in
//! lock-step with the component's [`crate::FieldSpec`] tree. A
//! [`FieldFilter`] decides which fields survive, surviving keys are
//! reordered to match declaration order, and the result is serialized as
//! YAML by [`generate_example_configs`].

mod builder;
mod filter;
mod node;
mod pair;

pub use builder::{ExampleOptions, build_ordered_example, order_example};
pub use filter::FieldFilter;
pub use node::ExampleNode;
pub use pair::{ConfigPair, generate_example_configs};

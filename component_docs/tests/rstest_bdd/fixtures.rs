//! Shared fixtures for the component documentation scenarios.

use component_docs::{ComponentSpec, ConfigPair, DocsError};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;

/// Scenario state shared between the steps of one scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct DocsContext {
    /// Component under test.
    pub spec: Slot<ComponentSpec>,
    /// Full example config passed to the generators.
    pub example: Slot<Value>,
    /// Example views produced by the last generation step.
    pub configs: Slot<ConfigPair>,
    /// Markdown produced by the last successful render.
    pub document: Slot<String>,
    /// Error returned by the last failed render.
    pub failure: Slot<DocsError>,
}

/// Creates empty scenario state.
#[fixture]
pub fn docs_context() -> DocsContext {
    DocsContext::default()
}

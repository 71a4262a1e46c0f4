//! Step modules registered with `rstest-bdd`.

pub mod example_steps;
pub mod markdown_steps;

use crate::fixtures::DocsContext;
use anyhow::{Result, anyhow};
use component_docs::{ComponentSpec, ComponentType, FieldSpec, Status};
use rstest_bdd_macros::given;
use serde_json::{Map, Value, json};

fn parse_component_type(kind: &str) -> Result<ComponentType> {
    serde_json::from_value(Value::String(kind.to_owned()))
        .map_err(|err| anyhow!("unknown component type {kind}: {err}"))
}

#[given(
    "a {kind} component with common field {common}, advanced field {advanced} and deprecated field {deprecated}"
)]
fn component_with_tiers(
    docs_context: &DocsContext,
    kind: String,
    common: String,
    advanced: String,
    deprecated: String,
) -> Result<()> {
    let component_type = parse_component_type(&kind)?;
    let config = FieldSpec::root([
        FieldSpec::int(common.as_str()),
        FieldSpec::int(advanced.as_str()).advanced(),
        FieldSpec::int(deprecated.as_str()).deprecated(),
    ]);
    // Reverse declaration order so ordering is observable.
    let mut example = Map::new();
    example.insert(deprecated, json!(3));
    example.insert(advanced, json!(2));
    example.insert(common, json!(1));
    docs_context
        .spec
        .set(ComponentSpec::new("sample", component_type, config).with_summary("Sample."));
    docs_context.example.set(Value::Object(example));
    Ok(())
}

#[given("a {kind} component with {count:usize} common fields")]
fn component_with_fields(docs_context: &DocsContext, kind: String, count: usize) -> Result<()> {
    let component_type = parse_component_type(&kind)?;
    let names: Vec<String> = (0..count).map(|index| format!("field_{index}")).collect();
    let config = FieldSpec::root(names.iter().map(|name| FieldSpec::string(name.as_str())));
    let example: Map<String, Value> = names
        .into_iter()
        .map(|name| (name, json!("value")))
        .collect();
    let spec = ComponentSpec::new("sample", component_type, config)
        .with_summary("Sample.")
        .with_example(component_docs::AnnotatedExample::new(
            "Basic",
            "Minimal setup.",
            format!("{kind}:\n  sample: {{}}\n"),
        ));
    docs_context.spec.set(spec);
    docs_context.example.set(Value::Object(example));
    Ok(())
}

#[given("the example also sets the undeclared key {key}")]
fn undeclared_key(docs_context: &DocsContext, key: String) -> Result<()> {
    let mut example = docs_context
        .example
        .take()
        .ok_or_else(|| anyhow!("example not initialised"))?;
    let object = example
        .as_object_mut()
        .ok_or_else(|| anyhow!("example is not a mapping"))?;
    object.insert(key, json!(true));
    docs_context.example.set(example);
    Ok(())
}

#[given("the component status is {status}")]
fn component_status(docs_context: &DocsContext, status: String) -> Result<()> {
    let parsed: Status = serde_json::from_value(Value::String(status.clone()))
        .map_err(|err| anyhow!("unknown status {status}: {err}"))?;
    let spec = docs_context
        .spec
        .take()
        .ok_or_else(|| anyhow!("component not initialised"))?;
    docs_context.spec.set(spec.with_status(parsed));
    Ok(())
}

#[given("the component summary contains an empty line")]
fn summary_with_empty_line(docs_context: &DocsContext) -> Result<()> {
    let spec = docs_context
        .spec
        .take()
        .ok_or_else(|| anyhow!("component not initialised"))?;
    docs_context
        .spec
        .set(spec.with_summary("First paragraph.\n\nSecond paragraph."));
    Ok(())
}

//! Steps for example config generation scenarios.

use crate::fixtures::DocsContext;
use anyhow::{Result, anyhow, ensure};
use component_docs::{ExampleOptions, generate_example_configs};
use rstest_bdd_macros::{then, when};
use test_helpers::text::{top_level_keys, unwrap_nested};

fn generate(docs_context: &DocsContext, nest: bool) -> Result<()> {
    let configs = docs_context
        .spec
        .with_ref(|spec| {
            docs_context.example.with_ref(|example| {
                generate_example_configs(
                    spec.component_type,
                    &spec.config,
                    nest,
                    example,
                    &ExampleOptions::default(),
                )
            })
        })
        .flatten()
        .ok_or_else(|| anyhow!("component or example not initialised"))??;
    docs_context.configs.set(configs);
    Ok(())
}

#[when("the example configs are generated without nesting")]
fn generate_flat(docs_context: &DocsContext) -> Result<()> {
    generate(docs_context, false)
}

#[when("the example configs are generated with nesting")]
fn generate_nested(docs_context: &DocsContext) -> Result<()> {
    generate(docs_context, true)
}

fn assert_keys(docs_context: &DocsContext, advanced: bool, keys: &str) -> Result<()> {
    let yaml = docs_context
        .configs
        .with_ref(|pair| {
            if advanced {
                pair.advanced.clone()
            } else {
                pair.common.clone()
            }
        })
        .ok_or_else(|| anyhow!("example configs not generated"))?;
    let expected: Vec<&str> = keys.split(',').map(str::trim).collect();
    let actual = top_level_keys(&yaml);
    ensure!(
        actual == expected,
        "expected keys {expected:?}, got {actual:?} in:\n{yaml}"
    );
    Ok(())
}

#[then("the common config lists keys {keys}")]
fn common_keys(docs_context: &DocsContext, keys: String) -> Result<()> {
    assert_keys(docs_context, false, &keys)
}

#[then("the advanced config lists keys {keys}")]
fn advanced_keys(docs_context: &DocsContext, keys: String) -> Result<()> {
    assert_keys(docs_context, true, &keys)
}

#[then("both configs are nested under {key}")]
fn nested_under(docs_context: &DocsContext, key: String) -> Result<()> {
    let pair = docs_context
        .configs
        .with_ref(Clone::clone)
        .ok_or_else(|| anyhow!("example configs not generated"))?;
    for yaml in [&pair.common, &pair.advanced] {
        let body = unwrap_nested(yaml, &key);
        ensure!(body.is_some(), "config is not nested under {key}:\n{yaml}");
    }
    Ok(())
}

#[then("the configs are uniform")]
fn configs_uniform(docs_context: &DocsContext) -> Result<()> {
    let uniform = docs_context
        .configs
        .with_ref(component_docs::ConfigPair::is_uniform)
        .ok_or_else(|| anyhow!("example configs not generated"))?;
    ensure!(uniform, "common and advanced views should match");
    Ok(())
}

//! Steps for component document scenarios.

use crate::fixtures::DocsContext;
use anyhow::{Result, anyhow, ensure};
use component_docs::{DocsError, RenderConfig, render_markdown};
use rstest_bdd_macros::{then, when};
use test_helpers::text::fenced_blocks;

#[when("the component document is rendered")]
fn render_document(docs_context: &DocsContext) -> Result<()> {
    let outcome = docs_context
        .spec
        .with_ref(|spec| {
            docs_context
                .example
                .with_ref(|example| render_markdown(spec, example, &RenderConfig::default()))
        })
        .flatten()
        .ok_or_else(|| anyhow!("component or example not initialised"))?;
    match outcome {
        Ok(document) => docs_context.document.set(document),
        Err(err) => docs_context.failure.set(err),
    }
    Ok(())
}

fn document(docs_context: &DocsContext) -> Result<String> {
    docs_context
        .document
        .with_ref(Clone::clone)
        .ok_or_else(|| anyhow!("document was not rendered"))
}

#[then("the document shows a single config block")]
fn single_config_block(docs_context: &DocsContext) -> Result<()> {
    let page = document(docs_context)?;
    let blocks = fenced_blocks(&page, "yml");
    let first = blocks
        .first()
        .ok_or_else(|| anyhow!("no config block in:\n{page}"))?;
    ensure!(
        first.starts_with("# Config fields, showing default values\n"),
        "unexpected config block:\n{first}"
    );
    ensure!(!page.contains("<Tabs defaultValue=\"common\""), "tabs not expected");
    Ok(())
}

#[then("the document shows common and advanced tabs")]
fn config_tabs(docs_context: &DocsContext) -> Result<()> {
    let page = document(docs_context)?;
    let blocks = fenced_blocks(&page, "yml");
    ensure!(
        blocks
            .first()
            .is_some_and(|block| block.starts_with("# Common config fields")),
        "common block missing in:\n{page}"
    );
    ensure!(
        blocks
            .get(1)
            .is_some_and(|block| block.starts_with("# All config fields")),
        "advanced block missing in:\n{page}"
    );
    Ok(())
}

fn section_offsets(page: &str) -> Result<(usize, usize)> {
    let fields = page
        .find("## Fields")
        .ok_or_else(|| anyhow!("field reference missing in:\n{page}"))?;
    let examples = page
        .find("## Examples")
        .ok_or_else(|| anyhow!("examples missing in:\n{page}"))?;
    Ok((fields, examples))
}

#[then("the field reference precedes the examples")]
fn fields_first(docs_context: &DocsContext) -> Result<()> {
    let (fields, examples) = section_offsets(&document(docs_context)?)?;
    ensure!(fields < examples, "field reference should come first");
    Ok(())
}

#[then("the field reference follows the examples")]
fn examples_first(docs_context: &DocsContext) -> Result<()> {
    let (fields, examples) = section_offsets(&document(docs_context)?)?;
    ensure!(fields > examples, "examples should come first");
    Ok(())
}

#[then("the document shows a {title} banner")]
fn status_banner(docs_context: &DocsContext, title: String) -> Result<()> {
    let page = document(docs_context)?;
    ensure!(
        page.lines()
            .any(|line| line.starts_with(":::") && line.ends_with(title.as_str())),
        "banner {title} missing in:\n{page}"
    );
    Ok(())
}

#[then("rendering fails with a validation error")]
fn validation_failure(docs_context: &DocsContext) -> Result<()> {
    let failure = docs_context
        .failure
        .take()
        .ok_or_else(|| anyhow!("rendering unexpectedly succeeded"))?;
    ensure!(
        matches!(failure, DocsError::Validation { .. }),
        "unexpected error {failure:?}"
    );
    ensure!(
        failure.to_string().contains("summary contains empty lines"),
        "unexpected message {failure}"
    );
    Ok(())
}

//! Binds the feature files to the step registry.

use crate::fixtures::{DocsContext, docs_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/config_examples.feature",
    fixtures = [docs_context: DocsContext]
);
scenarios!(
    "tests/features/component_markdown.feature",
    fixtures = [docs_context: DocsContext]
);

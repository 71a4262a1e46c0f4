//! Helpers for inspecting rendered YAML and markdown in assertions.

/// Returns the keys of the top-level YAML mapping in document order.
///
/// Indented lines, sequence items and comments are skipped.
#[must_use]
pub fn top_level_keys(yaml: &str) -> Vec<&str> {
    yaml.lines()
        .filter(|line| !line.starts_with([' ', '-', '#']))
        .filter_map(|line| line.split_once(':').map(|(key, _)| key))
        .collect()
}

/// Removes a single-key wrapper from a YAML mapping.
///
/// Returns `None` unless `yaml` starts with `key:` on its own line and every
/// following line is indented by two spaces.
#[must_use]
pub fn unwrap_nested(yaml: &str, key: &str) -> Option<String> {
    let mut lines = yaml.lines();
    let header = lines.next()?;
    if header.strip_suffix(':') != Some(key) {
        return None;
    }
    let mut body = String::new();
    for line in lines {
        body.push_str(line.strip_prefix("  ")?);
        body.push('\n');
    }
    Some(body)
}

/// Collects the bodies of fenced code blocks tagged with `lang`.
#[must_use]
pub fn fenced_blocks(markdown: &str, lang: &str) -> Vec<String> {
    let opening = format!("```{lang}");
    let mut blocks = Vec::new();
    let mut current: Option<String> = None;
    for line in markdown.lines() {
        if let Some(mut block) = current.take() {
            if line.starts_with("```") {
                blocks.push(block);
            } else {
                block.push_str(line);
                block.push('\n');
                current = Some(block);
            }
        } else if line == opening {
            current = Some(String::new());
        }
    }
    blocks
}

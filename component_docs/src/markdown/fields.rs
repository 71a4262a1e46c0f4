//! Field reference generator.

use super::sections::yaml_block;
use crate::spec::DocField;

/// Generates the `## Fields` section listing every entry of `fields`.
pub fn fields_section(fields: &[DocField]) -> String {
    let mut output = String::from("## Fields\n\n");
    for field in fields {
        output.push_str(&field_entry(field));
    }
    output
}

fn field_entry(field: &DocField) -> String {
    let spec = &field.spec;
    let mut output = format!("### `{}`\n\n", field.full_name);

    let description = spec.description.trim();
    if !description.is_empty() {
        output.push_str(description);
        output.push_str("\n\n");
    }
    if spec.is_secret {
        output.push_str(concat!(
            ":::warning Secret\n",
            "This field contains sensitive information that usually shouldn't be added to a config directly.\n",
            ":::\n\n",
        ));
    }

    output.push_str(&format!("*Type*: `{}`\n\n", field.type_label));
    if let Some(default) = &field.default_marshalled {
        output.push_str(&format!("*Default*: `{default}`\n\n"));
    }
    if !spec.version.is_empty() {
        output.push_str(&format!("Requires version {} or newer\n\n", spec.version));
    }

    if !spec.annotated_options.is_empty() {
        output.push_str("| Option | Summary |\n|---|---|\n");
        for (value, summary) in &spec.annotated_options {
            output.push_str(&format!(
                "| `{}` | {} |\n",
                escape_cell(value),
                escape_cell(summary)
            ));
        }
        output.push('\n');
    } else if !spec.options.is_empty() {
        let options: Vec<_> = spec
            .options
            .iter()
            .map(|option| format!("`{option}`"))
            .collect();
        output.push_str(&format!("Options: {}.\n\n", options.join(", ")));
    }

    if !field.examples_marshalled.is_empty() {
        let examples = field.examples_marshalled.join("\n");
        output.push_str(&yaml_block("yml", "# Examples\n", &examples));
        output.push('\n');
    }
    output
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod rows;
pub mod table;

pub use rows::TableRow;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Raw => serde_json::to_string(value)?,
        OutputFormat::Table => value_table(&serde_json::to_value(value)?),
    })
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Print `value` as JSON, or `rows` as a column-ordered table.
///
/// List commands use this so `--format table` shows a compact projection
/// while JSON output keeps every field.
pub fn output_with_rows<T: Serialize, R: TableRow>(
    value: &T,
    rows: &[R],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_rows(rows)),
        OutputFormat::Json | OutputFormat::Raw => output(value, format)?,
    }
    Ok(())
}

/// Render rows under their fixed headers.
#[must_use]
pub fn render_rows<R: TableRow>(rows: &[R]) -> String {
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    let cells = rows.iter().map(TableRow::cells).collect::<Vec<_>>();
    table::render_entity_table(R::HEADERS, &cells, table_options())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Generic table for any JSON shape: objects become key/value rows, arrays
/// of objects get one column per key seen in any element.
fn value_table(value: &Value) -> String {
    let options = table_options();
    match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let headers = items
                .iter()
                .filter_map(Value::as_object)
                .flat_map(|map| map.keys().map(String::as_str))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect::<Vec<_>>();
            if headers.is_empty() {
                return String::from("(no columns)");
            }
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| map.get(*header).map_or_else(|| "-".to_string(), cell_text))
                        .collect()
                })
                .collect::<Vec<_>>();
            table::render_entity_table(&headers, &rows, options)
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![cell_text(item)]).collect::<Vec<_>>();
            table::render_entity_table(&["value"], &rows, options)
        }
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell_text(value)])
                .collect::<Vec<_>>();
            table::render_entity_table(&["key", "value"], &rows, options)
        }
        scalar => table::render_entity_table(&["value"], &[vec![cell_text(scalar)]], options),
    }
}

/// Strings print bare, `null` as `-`, and nested values as compact JSON.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

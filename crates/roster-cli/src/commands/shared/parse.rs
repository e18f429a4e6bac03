use roster_core::dates::{format_day, parse_day};
use roster_query::reports::{month_label, parse_month};
use roster_query::sort::SortKey;

/// Interpret `--sort`. An unknown key keeps input order and logs a warning.
pub fn parse_sort(raw: &str) -> SortKey {
    let key = SortKey::parse(raw);
    if key == SortKey::InputOrder && raw.trim() != SortKey::InputOrder.as_str() {
        let known = SortKey::ALL.map(SortKey::as_str).join(", ");
        tracing::warn!(sort = raw, "unknown sort key, keeping input order (known: {known})");
    }
    key
}

/// Parse a `YYYY-MM-DD` flag and return it in record form.
pub fn parse_date_flag(raw: &str, field: &str) -> anyhow::Result<String> {
    Ok(format_day(parse_day(raw, field)?))
}

/// Parse a `Mon YYYY` month flag into its canonical label.
pub fn parse_month_flag(raw: &str) -> anyhow::Result<String> {
    parse_month(raw.trim())
        .map(month_label)
        .ok_or_else(|| anyhow::anyhow!("invalid month '{raw}': expected e.g. 'Jan 2026'"))
}

//! Aligned plain-text tables.
//!
//! Widths are counted in `char`s. A column whose cells are all numbers (or
//! `-` placeholders) is right-aligned. Color codes are wrapped around the
//! already padded cell so they never affect alignment.

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Render `rows` under `headers`. Missing trailing cells print as `-`.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .map(|row| width_of(cell(row, index)))
                .fold(width_of(header).max(MIN_COLUMN), usize::max)
        })
        .collect::<Vec<_>>();
    shrink_to_fit(&mut widths, headers, options.max_width);

    let aligns = (0..headers.len())
        .map(|index| column_align(rows.iter().map(|row| cell(row, index))))
        .collect::<Vec<_>>();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, Align::Left))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(width_of(&header_line));

    let body = rows.iter().map(|row| {
        widths
            .iter()
            .zip(&aligns)
            .enumerate()
            .map(|(index, (width, align))| {
                let text = clip(cell(row, index), *width);
                let padded = pad(&text, *width, *align);
                if options.color {
                    paint(&padded, &text)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP)
    });

    [header_line, divider]
        .into_iter()
        .chain(body)
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("-", String::as_str)
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}

/// Narrow the widest column one char at a time until the table fits.
/// A column never drops below its header or [`MIN_COLUMN`].
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    let floor = |index: usize| width_of(headers[index]).max(MIN_COLUMN);

    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > floor(*index))
            .max_by_key(|(index, width)| (**width, std::cmp::Reverse(*index)));
        let Some((index, _)) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn column_align<'a>(mut cells: impl Iterator<Item = &'a str> + Clone) -> Align {
    let numeric = |text: &str| {
        let text = text.trim();
        !text.is_empty() && text.parse::<f64>().is_ok()
    };
    if cells.clone().any(numeric) && cells.all(|text| text == "-" || numeric(text)) {
        Align::Right
    } else {
        Align::Left
    }
}

fn clip(text: &str, width: usize) -> String {
    if width_of(text) <= width {
        return text.to_string();
    }
    let mut clipped = text.chars().take(width.saturating_sub(1)).collect::<String>();
    clipped.push('…');
    clipped
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(width_of(text)));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

/// ANSI color for the roster's status and attention labels.
fn status_color(text: &str) -> Option<&'static str> {
    match text.trim().to_ascii_lowercase().as_str() {
        "on track" | "true" | "submitted" => Some("32"),
        "ending soon" | "check in" | "at risk" => Some("33"),
        "flagged" | "missed" | "paused" => Some("31"),
        _ => None,
    }
}

fn paint(padded: &str, text: &str) -> String {
    status_color(text).map_or_else(
        || padded.to_string(),
        |code| format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
    )
}

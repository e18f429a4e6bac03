use roster_core::dates::format_day;
use roster_core::entities::CheckIn;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_date_flag;
use crate::context::AppContext;
use crate::output::output;

/// Optional fields of a new check-in.
#[derive(Debug, Default)]
pub struct Entry<'a> {
    pub date: Option<&'a str>,
    pub check_in_type: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub staff: Option<&'a str>,
}

impl Entry<'_> {
    /// Build the check-in row for `fellow_id`, dated `date`.
    fn to_check_in(&self, fellow_id: &str, date: String) -> CheckIn {
        CheckIn {
            id: String::new(),
            fellow_ids: vec![fellow_id.to_string()],
            date: Some(date),
            check_in_type: self.check_in_type.map(str::to_string),
            notes: self.notes.map(str::to_string),
            staff_member: self.staff.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
struct CheckInLogged {
    check_in: CheckIn,
    last_check_in: Option<String>,
}

pub async fn run(
    id: &str,
    entry: &Entry<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.source.writable()?;
    let date = match entry.date {
        Some(raw) => parse_date_flag(raw, "date")?,
        None => format_day(ctx.today),
    };

    let created = client.add_check_in(&entry.to_check_in(id, date.clone())).await?;
    let fellow = client.update_fellow_check_in(id, &date).await?;
    tracing::info!(fellow = id, check_in = %created.id, %date, "check-in logged");

    output(
        &CheckInLogged {
            check_in: created,
            last_check_in: fellow.last_check_in,
        },
        flags.format,
    )
}

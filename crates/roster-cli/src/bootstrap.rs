use anyhow::Context;
use chrono::NaiveDate;
use roster_config::RosterConfig;
use roster_core::dates::parse_day;

/// Load `.env` and the layered config files.
pub fn load_config() -> anyhow::Result<RosterConfig> {
    RosterConfig::load_with_dotenv().context("failed to load roster configuration")
}

/// `--today` if given, otherwise the local calendar day.
pub fn resolve_today(raw: Option<&str>) -> anyhow::Result<NaiveDate> {
    match raw {
        Some(raw) => Ok(parse_day(raw, "today")?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::resolve_today;

    #[test]
    fn explicit_today_wins() {
        let today = resolve_today(Some("2026-02-01")).expect("should parse");
        assert_eq!(today, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    }

    #[test]
    fn malformed_today_names_the_flag() {
        let err = resolve_today(Some("Feb 1")).expect_err("should fail");
        assert!(err.to_string().contains("today"));
    }
}

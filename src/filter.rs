//! Retention-window filtering of article records.
//!
//! A record is kept when its publish date is on or after the cutoff date,
//! `today - days`. Dates are compared at day resolution. Records whose date
//! cannot be parsed are dropped individually; they never abort the batch.

use crate::dates::parse_publish_date;
use crate::error::DateParseError;
use crate::models::ArticleRecord;
use crate::utils::truncate_for_log;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use tracing::{Level, debug, enabled, info, instrument, warn};

/// Retention window used when none is given on the command line.
pub const DEFAULT_RETENTION_DAYS: u32 = 7;

/// A record dropped because its date did not parse.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// The raw `date` value.
    pub date: String,
    /// Why it was rejected.
    pub error: DateParseError,
}

/// Outcome of [`filter_articles_by_days`].
#[derive(Debug, Default)]
pub struct FilterOutcome {
    /// Records inside the window, in input order.
    pub kept: Vec<ArticleRecord>,
    /// Records with unparsable dates, in input order.
    pub skipped: Vec<SkippedRecord>,
}

/// Inclusive lower bound for retained articles.
///
/// Saturates at [`NaiveDate::MIN`] when the window reaches past the start of
/// the calendar.
pub fn cutoff_date(now: NaiveDateTime, days: u32) -> NaiveDate {
    now.date()
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}

/// One-line diagnostic for a record dropped over its date.
pub fn skip_notice(raw_date: &str, error: &DateParseError) -> String {
    format!(
        "Date parse error: {} - {}; skipping article",
        truncate_for_log(raw_date, 64),
        error
    )
}

/// Keep the articles published within the trailing `days`-day window.
///
/// # Arguments
///
/// * `articles` - Records to filter; consumed so kept records are moved, not cloned
/// * `days` - Retention window in days
/// * `now` - Processing time; supplies both the cutoff and the year attached
///   to every partial date
///
/// # Returns
///
/// A [`FilterOutcome`] with the surviving records in their original relative
/// order and the records skipped for unparsable dates.
#[instrument(level = "info", skip(articles), fields(count = articles.len()))]
pub fn filter_articles_by_days(
    articles: Vec<ArticleRecord>,
    days: u32,
    now: NaiveDateTime,
) -> FilterOutcome {
    let year = now.year();
    let cutoff = cutoff_date(now, days);
    debug!(%cutoff, year, "Computed retention cutoff");

    let mut outcome = FilterOutcome::default();
    for article in articles {
        match parse_publish_date(article.date(), year) {
            Ok(published) if published >= cutoff => outcome.kept.push(article),
            Ok(published) => {
                debug!(%published, %cutoff, title = %article.title(), "Article older than cutoff");
            }
            Err(error) => {
                // Must reach stderr even when RUST_LOG filters WARN out.
                if enabled!(Level::WARN) {
                    warn!(
                        raw_date = %truncate_for_log(article.date(), 64),
                        error = %error,
                        "Date parse error; skipping article"
                    );
                } else {
                    eprintln!("{}", skip_notice(article.date(), &error));
                }
                outcome.skipped.push(SkippedRecord {
                    date: article.date().to_string(),
                    error,
                });
            }
        }
    }

    info!(
        kept = outcome.kept.len(),
        skipped = outcome.skipped.len(),
        %cutoff,
        "Filtered articles"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn article(title: &str, date: &str) -> ArticleRecord {
        ArticleRecord::new(title, format!("http://x/{title}"), date)
    }

    fn titles(articles: &[ArticleRecord]) -> Vec<&str> {
        articles.iter().map(|a| a.title()).collect()
    }

    #[test]
    fn test_cutoff_date() {
        assert_eq!(
            cutoff_date(at(2026, 1, 18, 15), 7),
            NaiveDate::from_ymd_opt(2026, 1, 11).unwrap()
        );
        assert_eq!(
            cutoff_date(at(2026, 1, 3, 0), 7),
            NaiveDate::from_ymd_opt(2025, 12, 27).unwrap()
        );
        assert_eq!(cutoff_date(at(2026, 1, 3, 0), u32::MAX), NaiveDate::MIN);
    }

    #[test]
    fn test_record_within_window_is_kept() {
        let input = vec![article("A", "01月17日12時00分")];

        let outcome = filter_articles_by_days(input, 7, at(2026, 1, 18, 10));
        assert_eq!(titles(&outcome.kept), vec!["A"]);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_record_before_cutoff_is_dropped() {
        let input = vec![article("A", "01月17日12時00分")];

        let outcome = filter_articles_by_days(input, 7, at(2026, 1, 30, 10));
        assert!(outcome.kept.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_cutoff_is_inclusive_at_day_resolution() {
        // Cutoff 2026-01-11; the processing hour must not push it out.
        let input = vec![
            article("edge", "01月11日00時00分"),
            article("before", "01月10日23時59分"),
        ];

        let outcome = filter_articles_by_days(input, 7, at(2026, 1, 18, 23));
        assert_eq!(titles(&outcome.kept), vec!["edge"]);
    }

    #[test]
    fn test_zero_days_keeps_only_today() {
        let input = vec![
            article("yesterday", "01月17日23時00分"),
            article("today", "01月18日00時05分"),
        ];

        let outcome = filter_articles_by_days(input, 0, at(2026, 1, 18, 22));
        assert_eq!(titles(&outcome.kept), vec!["today"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let input = vec![
            article("c", "01月16日"),
            article("old", "12月01日"),
            article("a", "01月18日"),
            article("b", "01月12日"),
        ];

        let outcome = filter_articles_by_days(input, 7, at(2026, 1, 18, 8));
        // December resolves to the current year, i.e. the future.
        assert_eq!(titles(&outcome.kept), vec!["c", "old", "a", "b"]);
    }

    #[test]
    fn test_later_month_resolves_to_current_year() {
        let input = vec![article("december", "12月28日10時00分")];

        let outcome = filter_articles_by_days(input, 7, at(2026, 1, 2, 9));
        assert_eq!(titles(&outcome.kept), vec!["december"]);
    }

    #[test]
    fn test_unparsable_dates_are_skipped_not_fatal() {
        let input = vec![
            article("good", "01月17日12時00分"),
            article("no-markers", "2026/01/17"),
            article("bad-day", "01月xx日"),
            article("impossible", "02月30日"),
            article("also-good", "01月15日"),
        ];

        let outcome = filter_articles_by_days(input, 7, at(2026, 1, 18, 12));
        assert_eq!(titles(&outcome.kept), vec!["good", "also-good"]);
        assert_eq!(outcome.skipped.len(), 3);
        assert_eq!(outcome.skipped[0].date, "2026/01/17");
        assert_eq!(outcome.skipped[0].error, DateParseError::MissingMarker('月'));
        assert_eq!(outcome.skipped[2].date, "02月30日");
    }

    #[test]
    fn test_skip_notice_names_date_and_error() {
        let notice = skip_notice("01月xx日", &DateParseError::MissingMarker('日'));
        assert_eq!(notice, "Date parse error: 01月xx日 - missing '日' marker; skipping article");
    }

    #[test]
    fn test_duplicates_are_not_removed() {
        let input = vec![article("A", "01月17日"), article("A", "01月17日")];

        let outcome = filter_articles_by_days(input, 7, at(2026, 1, 18, 12));
        assert_eq!(outcome.kept.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let outcome =
            filter_articles_by_days(Vec::new(), DEFAULT_RETENTION_DAYS, at(2026, 1, 18, 12));
        assert!(outcome.kept.is_empty());
        assert!(outcome.skipped.is_empty());
    }
}

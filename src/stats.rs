use crate::dates::{
    canonical_key, parse_key, parse_loose, short_date_label, short_weekday_label, today,
    week_label, week_start,
};
use crate::models::{DailyBucket, ViewCharts, ViewRecord, WeeklyBucket};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

pub const DAY_COUNT: usize = 7;
pub const WEEK_COUNT: usize = 4;

pub fn article_charts(views: &[ViewRecord]) -> ViewCharts {
    article_charts_at(views, today())
}

pub fn article_charts_at(views: &[ViewRecord], today: NaiveDate) -> ViewCharts {
    ViewCharts {
        last_7_days: last_7_days_at(views, today),
        last_4_weeks: last_4_weeks_at(views, today),
    }
}

pub fn last_7_days(views: &[ViewRecord]) -> Vec<DailyBucket> {
    last_7_days_at(views, today())
}

/// Seven buckets, `today - 6` through `today`, oldest first. Only records
/// keyed by a strict `YYYY-MM-DD` date inside that range are counted.
pub fn last_7_days_at(views: &[ViewRecord], today: NaiveDate) -> Vec<DailyBucket> {
    let days: Vec<NaiveDate> = (0..DAY_COUNT as i64)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect();

    let mut totals = vec![0u64; DAY_COUNT];
    let slots: HashMap<String, usize> = days
        .iter()
        .enumerate()
        .map(|(idx, date)| (canonical_key(*date), idx))
        .collect();

    for record in views {
        if parse_key(&record.date).is_none() {
            continue;
        }
        if let Some(&idx) = slots.get(&record.date) {
            totals[idx] = totals[idx].saturating_add(record.number_of_views);
        }
    }

    days.into_iter()
        .zip(totals)
        .map(|(date, views)| DailyBucket {
            day: short_weekday_label(date),
            date_short: short_date_label(date),
            date_full: canonical_key(date),
            views,
        })
        .collect()
}

pub fn last_4_weeks(views: &[ViewRecord]) -> Vec<WeeklyBucket> {
    last_4_weeks_at(views, today())
}

/// The four complete Monday..Sunday weeks before the week containing
/// `today`, oldest first. The current partial week is never included.
pub fn last_4_weeks_at(views: &[ViewRecord], today: NaiveDate) -> Vec<WeeklyBucket> {
    let current_week_start = week_start(today);
    let dated: Vec<(NaiveDate, u64)> = views
        .iter()
        .filter_map(|record| parse_loose(&record.date).map(|date| (date, record.number_of_views)))
        .collect();

    (1..=WEEK_COUNT as i64)
        .rev()
        .map(|offset| {
            let start = current_week_start - Duration::weeks(offset);
            let end = start + Duration::days(6);

            let views = dated
                .iter()
                .filter(|(date, _)| *date >= start && *date <= end)
                .fold(0u64, |sum, (_, views)| sum.saturating_add(*views));

            WeeklyBucket {
                week_label: week_label(start),
                week_start: canonical_key(start),
                week_end: canonical_key(end),
                views,
            }
        })
        .collect()
}

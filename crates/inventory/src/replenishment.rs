//! Replenishment due check.

use chrono::{DateTime, Utc};

use crate::records::Article;

const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Whole days from `from` to `to`, floored (negative if `to` is earlier).
pub fn whole_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().div_euclid(MS_PER_DAY)
}

/// Whether `article` should be replenished at `now`.
///
/// Checked in order: an open purchase order means not due; an article that was
/// never replenished is due; otherwise it is due once the elapsed whole days
/// reach the review interval.
pub fn is_replenishment_due(article: &Article, now: DateTime<Utc>, has_open_order: bool) -> bool {
    if has_open_order {
        return false;
    }
    let Some(last) = article.last_replenished_at else {
        return true;
    };
    whole_days_between(last, now) >= article.review_interval_days
}

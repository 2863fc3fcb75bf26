// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The SM-2 scheduler.
//!
//! - A failed review (Again, Hard) resets the streak and the interval to one day.
//! - A successful review (Good, Easy) schedules 1 day, then 6 days, then
//!   the previous interval times the ease factor.
//! - The ease factor is adjusted after every review, failed or not, and
//!   never drops below 1.3.

use crate::types::item::ReviewEntry;
use crate::types::item::ReviewItem;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

pub type EaseFactor = f64;

/// Interval in whole days.
pub type Interval = u32;

/// The ease factor floor.
pub const MIN_EASE_FACTOR: EaseFactor = 1.3;

/// Interval after the first successful review in a streak.
pub const FIRST_INTERVAL: Interval = 1;

/// Interval after the second successful review in a streak.
pub const SECOND_INTERVAL: Interval = 6;

/// Longest interval: one hundred years.
pub const MAX_INTERVAL: Interval = 36_500;

/// `EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02))`, floored.
pub fn new_ease_factor(ef: EaseFactor, rating: Rating) -> EaseFactor {
    let q: f64 = rating.into();
    let ef = ef + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));
    f64::max(ef, MIN_EASE_FACTOR)
}

/// The next interval and repetition count. Uses the ease factor from
/// before this review.
pub fn new_interval(
    interval: Interval,
    ef: EaseFactor,
    repetition_count: u32,
    rating: Rating,
) -> (Interval, u32) {
    if !rating.is_success() {
        return (FIRST_INTERVAL, 0);
    }
    let interval = match repetition_count {
        0 => FIRST_INTERVAL,
        1 => SECOND_INTERVAL,
        _ => ((interval as f64 * ef).round() as Interval).clamp(FIRST_INTERVAL, MAX_INTERVAL),
    };
    (interval, repetition_count + 1)
}

/// Apply one review to an item.
///
/// Appends a history entry carrying the interval that was in effect, then
/// reschedules the item `interval` days after `now`.
pub fn compute_next_state(item: &ReviewItem, rating: Rating, now: Timestamp) -> ReviewItem {
    let (interval, repetition_count) =
        new_interval(item.interval, item.ease_factor, item.repetition_count, rating);
    let mut review_history = item.review_history.clone();
    review_history.push(ReviewEntry {
        date: now,
        rating,
        interval: item.interval,
    });
    ReviewItem {
        last_reviewed: now,
        next_review: now.plus_days(interval),
        interval,
        ease_factor: new_ease_factor(item.ease_factor, rating),
        repetition_count,
        review_history,
        ..item.clone()
    }
}

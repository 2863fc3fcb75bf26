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

use serde::Deserialize;
use serde::Serialize;

use crate::types::id::ItemId;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

/// Difficulty assigned when the caller gives none.
pub const DEFAULT_DIFFICULTY: u8 = 3;

/// The ease factor of a new item.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// The interval, in days, of a new item.
pub const INITIAL_INTERVAL: u32 = 1;

/// One processed review.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewEntry {
    /// When the review happened.
    pub date: Timestamp,
    pub rating: Rating,
    /// The interval in effect when the review happened, before it was
    /// rescheduled.
    pub interval: u32,
}

/// A concept the user is learning, with its SM-2 retention state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: ItemId,
    pub concept: String,
    pub description: String,
    /// Seed value from 1 to 5. Informational only, the scheduler ignores it.
    pub difficulty: u8,
    pub last_reviewed: Timestamp,
    /// The item is due once this moment has been reached.
    pub next_review: Timestamp,
    /// Days until the next review. Never zero.
    pub interval: u32,
    /// Never below 1.3.
    pub ease_factor: f64,
    /// Consecutive successful reviews.
    pub repetition_count: u32,
    /// Oldest first.
    #[serde(default)]
    pub review_history: Vec<ReviewEntry>,
}

impl ReviewItem {
    /// A fresh item, first due one day after `now`.
    pub fn new(
        concept: impl Into<String>,
        description: impl Into<String>,
        difficulty: u8,
        now: Timestamp,
    ) -> Self {
        Self {
            id: ItemId::generate(),
            concept: concept.into(),
            description: description.into(),
            difficulty: difficulty.clamp(1, 5),
            last_reviewed: now,
            next_review: now.plus_days(INITIAL_INTERVAL),
            interval: INITIAL_INTERVAL,
            ease_factor: INITIAL_EASE_FACTOR,
            repetition_count: 0,
            review_history: Vec::new(),
        }
    }

    pub fn is_due(&self, now: Timestamp) -> bool {
        self.next_review <= now
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::error::Fallible;

    fn ts(s: &str) -> Timestamp {
        Timestamp::new(NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.3f").unwrap())
    }

    #[test]
    fn test_new_item_defaults() {
        let now = ts("2024-01-01T12:00:00.000");
        let description = "Each value has one owner.";
        let item = ReviewItem::new("Ownership", description, DEFAULT_DIFFICULTY, now);
        assert_eq!(item.concept, "Ownership");
        assert_eq!(item.difficulty, 3);
        assert_eq!(item.last_reviewed, now);
        assert_eq!(item.next_review, ts("2024-01-02T12:00:00.000"));
        assert_eq!(item.interval, 1);
        assert_eq!(item.ease_factor, 2.5);
        assert_eq!(item.repetition_count, 0);
        assert!(item.review_history.is_empty());
    }

    #[test]
    fn test_difficulty_is_clamped() {
        let now = ts("2024-01-01T12:00:00.000");
        assert_eq!(ReviewItem::new("a", "", 0, now).difficulty, 1);
        assert_eq!(ReviewItem::new("a", "", 9, now).difficulty, 5);
    }

    #[test]
    fn test_is_due_includes_boundary() {
        let now = ts("2024-01-01T12:00:00.000");
        let item = ReviewItem::new("a", "", 3, now);
        assert!(!item.is_due(now));
        assert!(item.is_due(item.next_review));
        assert!(item.is_due(ts("2024-01-03T00:00:00.000")));
    }

    #[test]
    fn test_deserialize_stored_format() -> Fallible<()> {
        let json = r#"{
            "id": "lx3k9a2b7f",
            "concept": "Borrowing",
            "description": "References without ownership.",
            "difficulty": 2,
            "lastReviewed": "2024-03-01T08:30:00.000Z",
            "nextReview": "2024-03-07T08:30:00.000Z",
            "interval": 6,
            "easeFactor": 2.36,
            "repetitionCount": 2,
            "reviewHistory": [
                {"date": "2024-02-29T08:30:00.000Z", "rating": 3, "interval": 1},
                {"date": "2024-03-01T08:30:00.000Z", "rating": 4, "interval": 1}
            ]
        }"#;
        let item: ReviewItem = serde_json::from_str(json)?;
        assert_eq!(item.id, ItemId::from("lx3k9a2b7f"));
        assert_eq!(item.next_review, ts("2024-03-07T08:30:00.000"));
        assert_eq!(item.review_history.len(), 2);
        assert_eq!(item.review_history[1].rating, Rating::Easy);
        assert_eq!(item.review_history[0].date, ts("2024-02-29T08:30:00.000"));
        Ok(())
    }

    #[test]
    fn test_missing_history_defaults_to_empty() -> Fallible<()> {
        let json = r#"{
            "id": "x",
            "concept": "c",
            "description": "d",
            "difficulty": 3,
            "lastReviewed": "2024-03-01T08:30:00.000Z",
            "nextReview": "2024-03-02T08:30:00.000Z",
            "interval": 1,
            "easeFactor": 2.5,
            "repetitionCount": 0
        }"#;
        let item: ReviewItem = serde_json::from_str(json)?;
        assert!(item.review_history.is_empty());
        Ok(())
    }
}

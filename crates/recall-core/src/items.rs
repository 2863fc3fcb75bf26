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

use std::collections::HashSet;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::sm2::compute_next_state;
use crate::store::ITEMS_KEY;
use crate::store::Store;
use crate::store::load;
use crate::store::save;
use crate::types::concept::Concept;
use crate::types::id::ItemId;
use crate::types::item::DEFAULT_DIFFICULTY;
use crate::types::item::ReviewItem;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

/// The item collection.
///
/// Every write loads the whole collection, changes it in memory and saves
/// it back. Callers that share a store across threads must hold one lock
/// around each call.
pub struct ItemStore<S> {
    store: S,
}

impl<S: Store> ItemStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Build a new item. Nothing is persisted until [`ItemStore::add`].
    pub fn create_item(
        &self,
        concept: &str,
        description: &str,
        difficulty: Option<u8>,
        now: Timestamp,
    ) -> ReviewItem {
        ReviewItem::new(
            concept,
            description,
            difficulty.unwrap_or(DEFAULT_DIFFICULTY),
            now,
        )
    }

    pub fn get_all(&self) -> Fallible<Vec<ReviewItem>> {
        load(&self.store, ITEMS_KEY, Vec::new())
    }

    pub fn get(&self, id: &ItemId) -> Fallible<ReviewItem> {
        self.get_all()?
            .into_iter()
            .find(|item| &item.id == id)
            .ok_or_else(|| ErrorReport::ItemNotFound(id.clone()))
    }

    pub fn add(&mut self, item: ReviewItem) -> Fallible<()> {
        let mut items = self.get_all()?;
        log::debug!("Adding item {} ({})", item.id, item.concept);
        items.push(item);
        save(&mut self.store, ITEMS_KEY, &items)
    }

    /// Items whose next review is at or before `now`, in stored order.
    pub fn get_due(&self, now: Timestamp) -> Fallible<Vec<ReviewItem>> {
        let items = self.get_all()?;
        Ok(items.into_iter().filter(|item| item.is_due(now)).collect())
    }

    /// Reschedule one item and persist the result. On error the stored
    /// collection is left as it was.
    pub fn process_review(
        &mut self,
        id: &ItemId,
        rating: Rating,
        now: Timestamp,
    ) -> Fallible<ReviewItem> {
        let mut items = self.get_all()?;
        let slot = items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| ErrorReport::ItemNotFound(id.clone()))?;
        let updated = compute_next_state(slot, rating, now);
        log::debug!(
            "Reviewed {} as {}: interval {} -> {}, next review {}",
            updated.id,
            rating.label(),
            slot.interval,
            updated.interval,
            updated.next_review
        );
        *slot = updated.clone();
        save(&mut self.store, ITEMS_KEY, &items)?;
        Ok(updated)
    }

    /// Create an item for every concept whose name is not already in the
    /// collection. Existing items are never modified. Returns how many
    /// items were created.
    pub fn add_concepts_if_absent(
        &mut self,
        concepts: &[Concept],
        now: Timestamp,
    ) -> Fallible<usize> {
        let mut items = self.get_all()?;
        let mut known: HashSet<String> = items.iter().map(|item| item.concept.clone()).collect();
        let mut created = 0;
        for concept in concepts {
            if known.contains(&concept.name) {
                continue;
            }
            items.push(self.create_item(&concept.name, &concept.description, None, now));
            known.insert(concept.name.clone());
            created += 1;
        }
        if created > 0 {
            log::debug!("Adding {created} new concepts");
            save(&mut self.store, ITEMS_KEY, &items)?;
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::sm2::MAX_INTERVAL;
    use crate::store::MemoryStore;

    fn ts(s: &str) -> Timestamp {
        Timestamp::new(NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.3f").unwrap())
    }

    fn store_with(concepts: &[&str], now: Timestamp) -> Fallible<ItemStore<MemoryStore>> {
        let mut items = ItemStore::new(MemoryStore::new());
        for concept in concepts {
            let item = items.create_item(concept, "", None, now);
            items.add(item)?;
        }
        Ok(items)
    }

    #[test]
    fn test_create_item_does_not_persist() -> Fallible<()> {
        let items = ItemStore::new(MemoryStore::new());
        let now = ts("2024-01-01T00:00:00.000");
        let item = items.create_item("Traits", "Shared behavior.", None, now);
        assert_eq!(item.difficulty, DEFAULT_DIFFICULTY);
        assert!(items.get_all()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_add_appends_in_order() -> Fallible<()> {
        let items = store_with(&["a", "b", "c"], ts("2024-01-01T00:00:00.000"))?;
        let concepts: Vec<String> = items.get_all()?.into_iter().map(|i| i.concept).collect();
        assert_eq!(concepts, vec!["a", "b", "c"]);
        Ok(())
    }

    #[test]
    fn test_get_all_parses_timestamps() -> Fallible<()> {
        let mut store = MemoryStore::new();
        store.set(
            ITEMS_KEY,
            r#"[{"id":"x","concept":"c","description":"d","difficulty":3,
                "lastReviewed":"2024-03-01T08:30:00.000Z","nextReview":"2024-03-02T08:30:00.000Z",
                "interval":1,"easeFactor":2.5,"repetitionCount":0,"reviewHistory":[]}]"#,
        )?;
        let items = ItemStore::new(store);
        let all = items.get_all()?;
        assert_eq!(all[0].next_review, ts("2024-03-02T08:30:00.000"));
        Ok(())
    }

    #[test]
    fn test_get_due_boundary() -> Fallible<()> {
        let created = ts("2024-01-01T00:00:00.000");
        let mut items = store_with(&["a"], created)?;
        let later = items.create_item("b", "", None, ts("2024-01-05T00:00:00.000"));
        items.add(later)?;

        // Due exactly one day after creation.
        let boundary = ts("2024-01-02T00:00:00.000");
        let due = items.get_due(boundary)?;
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].concept, "a");

        let before = ts("2024-01-01T23:59:59.999");
        assert!(items.get_due(before)?.is_empty());

        let much_later = ts("2024-02-01T00:00:00.000");
        let due: Vec<String> = items.get_due(much_later)?.into_iter().map(|i| i.concept).collect();
        assert_eq!(due, vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn test_process_review_persists() -> Fallible<()> {
        let created = ts("2024-01-01T00:00:00.000");
        let mut items = store_with(&["a", "b"], created)?;
        let id = items.get_all()?[1].id.clone();
        let now = ts("2024-01-02T10:00:00.000");
        let updated = items.process_review(&id, Rating::Good, now)?;
        assert_eq!(updated.repetition_count, 1);
        assert_eq!(updated.review_history.len(), 1);

        let stored = items.get(&id)?;
        assert_eq!(stored, updated);
        assert_eq!(stored.next_review, ts("2024-01-03T10:00:00.000"));
        // The other item is untouched.
        assert!(items.get_all()?[0].review_history.is_empty());
        Ok(())
    }

    #[test]
    fn test_process_review_unknown_item() -> Fallible<()> {
        let mut items = store_with(&["a"], ts("2024-01-01T00:00:00.000"))?;
        let before = items.store().get(ITEMS_KEY)?;
        let missing = ItemId::from("missing");
        let result = items.process_review(&missing, Rating::Good, ts("2024-01-02T00:00:00.000"));
        assert_eq!(result, Err(ErrorReport::ItemNotFound(missing)));
        assert_eq!(items.store().get(ITEMS_KEY)?, before);
        Ok(())
    }

    #[test]
    fn test_repeated_early_easy_reviews() -> Fallible<()> {
        let now = ts("2024-01-01T00:00:00.000");
        let mut items = store_with(&["a"], now)?;
        let id = items.get_all()?[0].id.clone();
        for _ in 0..40 {
            items.process_review(&id, Rating::Easy, now)?;
        }
        let stored = items.get(&id)?;
        assert_eq!(stored.interval, MAX_INTERVAL);
        assert_eq!(stored.next_review, now.plus_days(MAX_INTERVAL));
        assert_eq!(stored.review_history.len(), 40);
        Ok(())
    }

    #[test]
    fn test_add_concepts_if_absent_is_idempotent() -> Fallible<()> {
        let now = ts("2024-01-01T00:00:00.000");
        let mut items = ItemStore::new(MemoryStore::new());
        let concepts = vec![
            Concept::new("Ownership", "first"),
            Concept::new("Borrowing", ""),
        ];
        assert_eq!(items.add_concepts_if_absent(&concepts, now)?, 2);
        assert_eq!(items.add_concepts_if_absent(&concepts, now)?, 0);
        assert_eq!(items.get_all()?.len(), 2);
        Ok(())
    }

    #[test]
    fn test_add_concepts_first_write_wins() -> Fallible<()> {
        let now = ts("2024-01-01T00:00:00.000");
        let mut items = ItemStore::new(MemoryStore::new());
        items.add_concepts_if_absent(&[Concept::new("Ownership", "first")], now)?;
        let created = items.add_concepts_if_absent(
            &[
                Concept::new("Ownership", "second"),
                Concept::new("Moves", "a"),
                Concept::new("Moves", "b"),
            ],
            now,
        )?;
        assert_eq!(created, 1);
        let all = items.get_all()?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].description, "first");
        assert_eq!(all[1].description, "a");
        Ok(())
    }
}

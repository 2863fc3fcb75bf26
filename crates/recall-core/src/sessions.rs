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

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::items::ItemStore;
use crate::store::SESSIONS_KEY;
use crate::store::Store;
use crate::store::load;
use crate::store::save;
use crate::types::id::ItemId;
use crate::types::id::SessionId;
use crate::types::item::ReviewItem;
use crate::types::rating::Rating;
use crate::types::session::ReviewSession;
use crate::types::timestamp::Timestamp;

/// Creates review sessions from due items and records their completion.
///
/// Sessions and items share one store, under different keys.
pub struct SessionManager<S> {
    items: ItemStore<S>,
}

impl<S: Store> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            items: ItemStore::new(store),
        }
    }

    pub fn items(&self) -> &ItemStore<S> {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut ItemStore<S> {
        &mut self.items
    }

    pub fn all_sessions(&self) -> Fallible<Vec<ReviewSession>> {
        load(self.items.store(), SESSIONS_KEY, Vec::new())
    }

    pub fn get_session(&self, id: &SessionId) -> Fallible<ReviewSession> {
        self.all_sessions()?
            .into_iter()
            .find(|session| &session.id == id)
            .ok_or_else(|| ErrorReport::SessionNotFound(id.clone()))
    }

    /// Start a session with the first `max_items` due items, in stored
    /// order. The session is persisted even when nothing is due.
    pub fn create_session(&mut self, now: Timestamp, max_items: usize) -> Fallible<ReviewSession> {
        let due = self.items.get_due(now)?;
        let selected: Vec<ReviewItem> = due.into_iter().take(max_items).collect();
        let session = ReviewSession::new(selected, now);
        let mut sessions = self.all_sessions()?;
        sessions.push(session.clone());
        save(self.items.store_mut(), SESSIONS_KEY, &sessions)?;
        log::debug!(
            "Created session {} with {} items",
            session.id,
            session.items.len()
        );
        Ok(session)
    }

    /// Review one item of a session.
    pub fn process_rating(
        &mut self,
        item_id: &ItemId,
        rating: Rating,
        now: Timestamp,
    ) -> Fallible<ReviewItem> {
        self.items.process_review(item_id, rating, now)
    }

    /// Mark a session as completed. The score is taken as given.
    pub fn complete_session(
        &mut self,
        id: &SessionId,
        score: f64,
        now: Timestamp,
    ) -> Fallible<ReviewSession> {
        if !score.is_finite() || !(0.0..=100.0).contains(&score) {
            return Err(ErrorReport::InvalidScore(score));
        }
        let mut sessions = self.all_sessions()?;
        let session = sessions
            .iter_mut()
            .find(|session| &session.id == id)
            .ok_or_else(|| ErrorReport::SessionNotFound(id.clone()))?;
        if session.is_completed() {
            return Err(ErrorReport::SessionAlreadyCompleted(id.clone()));
        }
        session.completed_at = Some(now);
        session.score = Some(score);
        let completed = session.clone();
        save(self.items.store_mut(), SESSIONS_KEY, &sessions)?;
        log::debug!("Completed session {id} with score {score:.0}");
        Ok(completed)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::store::MemoryStore;

    fn ts(s: &str) -> Timestamp {
        Timestamp::new(NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.3f").unwrap())
    }

    /// A manager whose items were all created on 2024-01-01, so they are
    /// due from 2024-01-02 on.
    fn manager_with(n: usize) -> Fallible<SessionManager<MemoryStore>> {
        let mut manager = SessionManager::new(MemoryStore::new());
        let created = ts("2024-01-01T00:00:00.000");
        for i in 0..n {
            let item = manager
                .items()
                .create_item(&format!("concept {i}"), "", None, created);
            manager.items_mut().add(item)?;
        }
        Ok(manager)
    }

    #[test]
    fn test_create_session_is_bounded() -> Fallible<()> {
        let mut manager = manager_with(5)?;
        let now = ts("2024-01-03T00:00:00.000");
        let session = manager.create_session(now, 3)?;
        assert_eq!(session.items.len(), 3);
        assert_eq!(session.created_at, now);
        assert_eq!(session.completed_at, None);
        assert_eq!(session.score, None);
        let concepts: Vec<&str> = session.items.iter().map(|i| i.concept.as_str()).collect();
        assert_eq!(concepts, vec!["concept 0", "concept 1", "concept 2"]);
        Ok(())
    }

    #[test]
    fn test_create_session_with_fewer_due() -> Fallible<()> {
        let mut manager = manager_with(2)?;
        let session = manager.create_session(ts("2024-01-03T00:00:00.000"), 10)?;
        assert_eq!(session.items.len(), 2);
        Ok(())
    }

    #[test]
    fn test_create_session_with_nothing_due_is_persisted() -> Fallible<()> {
        let mut manager = manager_with(2)?;
        let session = manager.create_session(ts("2024-01-01T12:00:00.000"), 10)?;
        assert!(session.items.is_empty());
        assert_eq!(manager.get_session(&session.id)?, session);
        Ok(())
    }

    #[test]
    fn test_complete_session() -> Fallible<()> {
        let mut manager = manager_with(4)?;
        let session = manager.create_session(ts("2024-01-03T00:00:00.000"), 4)?;
        let done = ts("2024-01-03T00:10:00.000");
        let completed = manager.complete_session(&session.id, 75.0, done)?;
        assert_eq!(completed.completed_at, Some(done));
        assert_eq!(completed.score, Some(75.0));
        assert_eq!(manager.get_session(&session.id)?, completed);
        Ok(())
    }

    #[test]
    fn test_complete_unknown_session() -> Fallible<()> {
        let mut manager = manager_with(1)?;
        let missing = SessionId::from("nope");
        let result = manager.complete_session(&missing, 50.0, ts("2024-01-03T00:00:00.000"));
        assert_eq!(result, Err(ErrorReport::SessionNotFound(missing)));
        Ok(())
    }

    #[test]
    fn test_complete_session_twice() -> Fallible<()> {
        let mut manager = manager_with(1)?;
        let session = manager.create_session(ts("2024-01-03T00:00:00.000"), 1)?;
        manager.complete_session(&session.id, 100.0, ts("2024-01-03T00:01:00.000"))?;
        let again = manager.complete_session(&session.id, 0.0, ts("2024-01-03T00:02:00.000"));
        assert_eq!(
            again,
            Err(ErrorReport::SessionAlreadyCompleted(session.id.clone()))
        );
        assert_eq!(manager.get_session(&session.id)?.score, Some(100.0));
        Ok(())
    }

    #[test]
    fn test_complete_session_rejects_bad_scores() -> Fallible<()> {
        let mut manager = manager_with(1)?;
        let session = manager.create_session(ts("2024-01-03T00:00:00.000"), 1)?;
        let now = ts("2024-01-03T00:01:00.000");
        for score in [-1.0, 100.5, f64::NAN] {
            let result = manager.complete_session(&session.id, score, now);
            assert!(matches!(result, Err(ErrorReport::InvalidScore(_))));
        }
        assert!(!manager.get_session(&session.id)?.is_completed());
        Ok(())
    }

    #[test]
    fn test_snapshot_is_not_live() -> Fallible<()> {
        let mut manager = manager_with(1)?;
        let session = manager.create_session(ts("2024-01-03T00:00:00.000"), 1)?;
        let id = session.items[0].id.clone();
        manager.process_rating(&id, Rating::Easy, ts("2024-01-03T00:01:00.000"))?;
        manager.complete_session(&session.id, 100.0, ts("2024-01-03T00:02:00.000"))?;

        let stored = manager.get_session(&session.id)?;
        assert!(stored.items[0].review_history.is_empty());
        assert_eq!(manager.items().get(&id)?.review_history.len(), 1);
        Ok(())
    }
}

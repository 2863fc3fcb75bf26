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

//! Walking through a session one item at a time.
//!
//! A front end shows [`Drill::current`] and [`Drill::progress`], and feeds
//! back one of three commands: rate, skip or complete. Rating the last item,
//! skipping past it, or completing early all complete the session with the
//! share of items that were actually rated.

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::sessions::SessionManager;
use crate::store::Store;
use crate::types::item::ReviewItem;
use crate::types::rating::Rating;
use crate::types::session::ReviewSession;
use crate::types::timestamp::Timestamp;

/// One-based position of the current item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrillStatus {
    InProgress,
    Completed,
}

pub struct Drill {
    session: ReviewSession,
    index: usize,
    reviewed: usize,
}

impl Drill {
    pub fn new(session: ReviewSession) -> Self {
        Self {
            session,
            index: 0,
            reviewed: 0,
        }
    }

    pub fn session(&self) -> &ReviewSession {
        &self.session
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_completed()
    }

    /// The item to show, if any.
    pub fn current(&self) -> Option<&ReviewItem> {
        if self.is_finished() {
            None
        } else {
            self.session.items.get(self.index)
        }
    }

    pub fn progress(&self) -> Progress {
        let total = self.session.items.len();
        Progress {
            position: usize::min(self.index + 1, total),
            total,
        }
    }

    /// Number of items rated so far.
    pub fn reviewed(&self) -> usize {
        self.reviewed
    }

    /// Percentage of the session's items that were rated. An empty session
    /// scores 100.
    pub fn score(&self) -> f64 {
        let total = self.session.items.len();
        if total == 0 {
            100.0
        } else {
            self.reviewed as f64 / total as f64 * 100.0
        }
    }

    /// Review the current item, then move on. If the review fails the drill
    /// stays on the same item.
    pub fn rate<S: Store>(
        &mut self,
        manager: &mut SessionManager<S>,
        rating: Rating,
        now: Timestamp,
    ) -> Fallible<DrillStatus> {
        let id = match self.current() {
            Some(item) => item.id.clone(),
            None => return Err(ErrorReport::SessionAlreadyCompleted(self.session.id.clone())),
        };
        manager.process_rating(&id, rating, now)?;
        self.reviewed += 1;
        self.advance(manager, now)
    }

    /// Move on without reviewing the current item.
    pub fn skip<S: Store>(
        &mut self,
        manager: &mut SessionManager<S>,
        now: Timestamp,
    ) -> Fallible<DrillStatus> {
        if self.current().is_none() {
            return Err(ErrorReport::SessionAlreadyCompleted(self.session.id.clone()));
        }
        self.advance(manager, now)
    }

    /// End the session now.
    pub fn complete<S: Store>(
        &mut self,
        manager: &mut SessionManager<S>,
        now: Timestamp,
    ) -> Fallible<DrillStatus> {
        let completed = manager.complete_session(&self.session.id, self.score(), now)?;
        self.session = completed;
        Ok(DrillStatus::Completed)
    }

    fn advance<S: Store>(
        &mut self,
        manager: &mut SessionManager<S>,
        now: Timestamp,
    ) -> Fallible<DrillStatus> {
        self.index += 1;
        if self.index >= self.session.items.len() {
            self.complete(manager, now)
        } else {
            Ok(DrillStatus::InProgress)
        }
    }
}

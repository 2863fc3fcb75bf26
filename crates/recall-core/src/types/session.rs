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

use crate::types::id::SessionId;
use crate::types::item::ReviewItem;
use crate::types::timestamp::Timestamp;

/// A bounded batch of due items, reviewed in order.
///
/// `items` is a snapshot taken when the session was created. Reviews update
/// the item collection, not this copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSession {
    pub id: SessionId,
    pub items: Vec<ReviewItem>,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
    /// Percentage of the items reviewed before the session ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl ReviewSession {
    pub fn new(items: Vec<ReviewItem>, now: Timestamp) -> Self {
        Self {
            id: SessionId::generate(),
            items,
            created_at: now,
            completed_at: None,
            score: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

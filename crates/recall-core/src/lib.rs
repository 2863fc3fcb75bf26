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

//! recall-core: the scheduling core of recall.
//!
//! - SM-2 scheduling of review items
//! - An item store and a session manager over a pluggable key-value store
//! - The drill, which walks a session one item at a time
//! - Markdown rendering of item descriptions

pub mod drill;
pub mod error;
pub mod items;
pub mod markdown;
pub mod sessions;
pub mod sm2;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use drill::{Drill, DrillStatus, Progress};
pub use error::{ErrorReport, Fallible, fail};
pub use items::ItemStore;
pub use sessions::SessionManager;
pub use sm2::compute_next_state;
pub use store::{ITEMS_KEY, MemoryStore, SESSIONS_KEY, Store};
pub use types::concept::{Concept, parse_concepts};
pub use types::id::{ItemId, SessionId};
pub use types::item::{ReviewEntry, ReviewItem};
pub use types::rating::Rating;
pub use types::session::ReviewSession;
pub use types::timestamp::Timestamp;

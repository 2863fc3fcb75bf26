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

//! Key-value persistence. Collections are stored whole, as JSON text, under
//! a single key each.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Fallible;

/// Key of the item collection.
pub const ITEMS_KEY: &str = "reviewItems";

/// Key of the session collection.
pub const SESSIONS_KEY: &str = "reviewSessions";

/// A synchronous key-value store. Last write wins.
pub trait Store {
    fn get(&self, key: &str) -> Fallible<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Fallible<()>;
}

/// Load and deserialize the value under `key`, or `default` if the key
/// has never been written.
pub fn load<T: DeserializeOwned>(store: &impl Store, key: &str, default: T) -> Fallible<T> {
    match store.get(key)? {
        Some(text) => Ok(serde_json::from_str(&text)?),
        None => Ok(default),
    }
}

/// Serialize `value` and write it under `key`.
pub fn save<T: Serialize + ?Sized>(store: &mut impl Store, key: &str, value: &T) -> Fallible<()> {
    let text = serde_json::to_string(value)?;
    store.set(key, &text)
}

/// A store that lives in memory.
#[derive(Default, Clone, Debug)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Fallible<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Fallible<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

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

use std::env::current_dir;
use std::path::PathBuf;

use recall_core::SessionManager;

use crate::config::Config;
use crate::db::SqliteStore;
use crate::error::Fallible;
use crate::error::fail;

/// Name of the database file inside a collection directory.
pub const DATABASE_FILE: &str = "recall.db";

/// A collection directory: its settings and its database.
pub struct Collection {
    pub directory: PathBuf,
    pub config: Config,
    pub manager: SessionManager<SqliteStore>,
}

impl Collection {
    /// Open the collection in `directory`, or in the current working
    /// directory.
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory = resolve_directory(directory)?;
        let config = Config::load(&directory)?;
        let store = SqliteStore::open(&directory.join(DATABASE_FILE))?;
        Ok(Self {
            directory,
            config,
            manager: SessionManager::new(store),
        })
    }
}

pub fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    let directory: PathBuf = match directory {
        Some(dir) => PathBuf::from(dir),
        None => current_dir()?,
    };
    if !directory.exists() {
        return fail("directory does not exist.");
    }
    Ok(directory.canonicalize()?)
}

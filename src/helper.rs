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

//! Test helpers.

use std::path::PathBuf;

use chrono::Duration;
use chrono::Utc;
use recall_core::types::timestamp::Timestamp;
use tempfile::tempdir;

use crate::collection::Collection;
use crate::error::Fallible;

/// A fresh, empty directory that outlives the test.
pub fn create_tmp_directory() -> Fallible<PathBuf> {
    let dir = tempdir()?.keep();
    Ok(dir.canonicalize()?)
}

/// A collection with one item per concept, all created two days ago and
/// therefore due now.
pub fn create_tmp_collection(concepts: &[&str]) -> Fallible<String> {
    let dir = create_tmp_directory()?;
    let directory = dir.display().to_string();
    let mut collection = Collection::new(Some(directory.clone()))?;
    let created = Timestamp::new(Utc::now().naive_utc() - Duration::days(2));
    for concept in concepts {
        let description = format!("About **{concept}**.");
        let item = collection
            .manager
            .items()
            .create_item(concept, &description, None, created);
        collection.manager.items_mut().add(item)?;
    }
    Ok(directory)
}

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

use recall_core::types::id::ItemId;
use recall_core::types::timestamp::Timestamp;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;

/// Add a single item to the collection and print its ID.
pub fn add_item(
    directory: Option<String>,
    concept: String,
    description: String,
    difficulty: Option<u8>,
) -> Fallible<()> {
    let id = insert_item(directory, &concept, &description, difficulty, Timestamp::now())?;
    println!("{id}");
    Ok(())
}

fn insert_item(
    directory: Option<String>,
    concept: &str,
    description: &str,
    difficulty: Option<u8>,
    now: Timestamp,
) -> Fallible<ItemId> {
    let concept = concept.trim();
    if concept.is_empty() {
        return fail("concept must not be empty.");
    }
    if let Some(d) = difficulty {
        if !(1..=5).contains(&d) {
            return fail("difficulty must be between 1 and 5.");
        }
    }
    let mut collection = Collection::new(directory)?;
    let item = collection
        .manager
        .items()
        .create_item(concept, description, difficulty, now);
    let id = item.id.clone();
    collection.manager.items_mut().add(item)?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_insert_item() -> Fallible<()> {
        let dir = create_tmp_directory()?.display().to_string();
        let now = Timestamp::try_from("2024-01-01T00:00:00.000Z".to_string())?;
        let id = insert_item(Some(dir.clone()), " Traits ", "Shared behavior.", Some(4), now)?;
        let collection = Collection::new(Some(dir))?;
        let item = collection.manager.items().get(&id)?;
        assert_eq!(item.concept, "Traits");
        assert_eq!(item.difficulty, 4);
        assert_eq!(item.next_review, now.plus_days(1));
        Ok(())
    }

    #[test]
    fn test_rejects_bad_input() -> Fallible<()> {
        let dir = create_tmp_directory()?.display().to_string();
        let now = Timestamp::try_from("2024-01-01T00:00:00.000Z".to_string())?;
        assert!(insert_item(Some(dir.clone()), "  ", "", None, now).is_err());
        assert!(insert_item(Some(dir.clone()), "x", "", Some(6), now).is_err());
        let collection = Collection::new(Some(dir))?;
        assert!(collection.manager.items().get_all()?.is_empty());
        Ok(())
    }
}

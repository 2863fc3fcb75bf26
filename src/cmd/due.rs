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

use recall_core::types::item::ReviewItem;
use recall_core::types::timestamp::Timestamp;

use crate::collection::Collection;
use crate::error::Fallible;

/// Print the items that are due for review.
pub fn list_due(directory: Option<String>) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let due = collection.manager.items().get_due(Timestamp::now())?;
    if due.is_empty() {
        println!("No items due.");
        return Ok(());
    }
    for item in &due {
        println!("{}", format_due_line(item));
    }
    Ok(())
}

fn format_due_line(item: &ReviewItem) -> String {
    format!(
        "{}\t{}\t(interval {}d, ease {:.2}, streak {})",
        item.next_review, item.concept, item.interval, item.ease_factor, item.repetition_count
    )
}

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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use recall_core::types::concept::Concept;
use recall_core::types::concept::parse_concepts;
use recall_core::types::timestamp::Timestamp;
use walkdir::WalkDir;

use crate::collection::Collection;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;

/// Seed the collection from concept files. Concepts whose name is already
/// in the collection are left alone.
pub fn import_concepts(directory: Option<String>, path: String) -> Fallible<()> {
    let created = import_at(directory, Path::new(&path), Timestamp::now())?;
    println!("Imported {} new concepts.", created);
    Ok(())
}

fn import_at(directory: Option<String>, path: &Path, now: Timestamp) -> Fallible<usize> {
    let mut concepts: Vec<Concept> = Vec::new();
    for file in concept_files(path)? {
        log::debug!("Reading concepts from {}", file.display());
        let text = read_to_string(&file)?;
        let parsed = parse_concepts(&text)
            .map_err(|e| ErrorReport::new(format!("{}: {e}", file.display())))?;
        concepts.extend(parsed);
    }
    let mut collection = Collection::new(directory)?;
    collection
        .manager
        .items_mut()
        .add_concepts_if_absent(&concepts, now)
}

/// The file itself, or every `.toml` file below a directory, sorted by path.
fn concept_files(path: &Path) -> Fallible<Vec<PathBuf>> {
    if !path.exists() {
        return fail(format!("{} does not exist.", path.display()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|e| ErrorReport::new(format!("Failed to walk directory: {e}")))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

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

use crate::error::Fallible;

/// A named concept to seed the collection with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Concept {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Deserialize)]
struct ConceptFile {
    #[serde(default)]
    concept: Vec<Concept>,
}

/// Parse a concept file:
///
/// ```toml
/// [[concept]]
/// name = "Ownership"
/// description = "Each value has a single owner."
/// ```
pub fn parse_concepts(text: &str) -> Fallible<Vec<Concept>> {
    let file: ConceptFile = toml::from_str(text)?;
    Ok(file.concept)
}

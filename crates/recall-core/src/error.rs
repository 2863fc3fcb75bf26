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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::id::ItemId;
use crate::types::id::SessionId;

/// Every failure the core can report. Each one is scoped to a single
/// operation: nothing here is fatal to the process.
#[derive(Debug, PartialEq)]
pub enum ErrorReport {
    /// A rating outside of 1..=4.
    InvalidRating(i64),
    /// No item with this ID in the item collection.
    ItemNotFound(ItemId),
    /// No session with this ID in the session collection.
    SessionNotFound(SessionId),
    /// The session already has a completion timestamp.
    SessionAlreadyCompleted(SessionId),
    /// A session score that is not a percentage.
    InvalidScore(f64),
    /// Anything else: I/O, serialization, storage backends.
    Other(String),
}

impl ErrorReport {
    pub fn new(msg: impl Into<String>) -> Self {
        ErrorReport::Other(msg.into())
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport::Other(format!("I/O error: {value:#?}"))
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport::Other(format!("JSON error: {value:#?}"))
    }
}

impl From<toml::de::Error> for ErrorReport {
    fn from(value: toml::de::Error) -> Self {
        ErrorReport::Other(format!("TOML error: {value}"))
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ErrorReport::InvalidRating(rating) => {
                write!(f, "error: invalid rating {rating}, expected 1 to 4.")
            }
            ErrorReport::ItemNotFound(id) => write!(f, "error: no item with ID '{id}'."),
            ErrorReport::SessionNotFound(id) => write!(f, "error: no session with ID '{id}'."),
            ErrorReport::SessionAlreadyCompleted(id) => {
                write!(f, "error: session '{id}' is already completed.")
            }
            ErrorReport::InvalidScore(score) => {
                write!(f, "error: invalid score {score}, expected 0 to 100.")
            }
            ErrorReport::Other(message) => write!(f, "error: {message}"),
        }
    }
}

impl Error for ErrorReport {}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(msg: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport::Other(msg.into()))
}

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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use recall_core::SessionManager;
use recall_core::store::Store;
use recall_core::types::timestamp::Timestamp;
use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;

#[derive(ValueEnum, Clone, Copy, PartialEq)]
pub enum StatsFormat {
    /// Human-readable lines.
    Text,
    /// A single JSON object.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Stats {
    pub items: usize,
    pub due: usize,
    /// Reviews recorded across all item histories.
    pub reviews: usize,
    pub mean_ease_factor: Option<f64>,
    pub sessions: usize,
    pub completed_sessions: usize,
    /// Mean score of completed sessions.
    pub average_score: Option<f64>,
}

pub fn print_stats(directory: Option<String>, format: StatsFormat) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let stats = compute_stats(&collection.manager, Timestamp::now())?;
    match format {
        StatsFormat::Text => {
            println!("Items: {}", stats.items);
            println!("Due now: {}", stats.due);
            println!("Reviews: {}", stats.reviews);
            if let Some(ef) = stats.mean_ease_factor {
                println!("Mean ease factor: {ef:.2}");
            }
            println!(
                "Sessions: {} ({} completed)",
                stats.sessions, stats.completed_sessions
            );
            if let Some(score) = stats.average_score {
                println!("Average score: {score:.0}%");
            }
        }
        StatsFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}

fn compute_stats<S: Store>(manager: &SessionManager<S>, now: Timestamp) -> Fallible<Stats> {
    let items = manager.items().get_all()?;
    let sessions = manager.all_sessions()?;
    let due = items.iter().filter(|item| item.is_due(now)).count();
    let reviews = items.iter().map(|item| item.review_history.len()).sum();
    let mean_ease_factor = mean(items.iter().map(|item| item.ease_factor));
    let scores: Vec<f64> = sessions.iter().filter_map(|session| session.score).collect();
    Ok(Stats {
        items: items.len(),
        due,
        reviews,
        mean_ease_factor,
        sessions: sessions.len(),
        completed_sessions: sessions.iter().filter(|s| s.is_completed()).count(),
        average_score: mean(scores.into_iter()),
    })
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

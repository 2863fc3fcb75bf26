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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::PreEscaped;
use maud::html;
use recall_core::Drill;
use recall_core::Rating;
use recall_core::markdown::markdown_to_html;
use recall_core::markdown::markdown_to_html_inline;

use crate::cmd::drill::state::ServerState;
use crate::cmd::drill::template::page_template;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mut mutable = state.mutable.lock().unwrap();
    let error = mutable.error.take();
    let body = if mutable.drill.is_finished() {
        render_completion_page(&mutable.drill, state.total_items)
    } else {
        render_session_page(&mutable.drill, error)
    };
    let html = page_template(body).into_string();
    (StatusCode::OK, Html(html))
}

fn render_session_page(drill: &Drill, error: Option<String>) -> Markup {
    let progress = drill.progress();
    let item = match drill.current() {
        Some(item) => html! {
            div.item {
                h1 { (PreEscaped(markdown_to_html_inline(&item.concept))) }
                div.description {
                    (PreEscaped(markdown_to_html(&item.description)))
                }
            }
        },
        // Every item was seen but the session could not be saved.
        None => html! {
            div.item {
                p { "No more items. End the session to save it." }
            }
        },
    };
    html! {
        div.root {
            div.header {
                span.progress { (progress.position) " / " (progress.total) }
                span.reviewed { (drill.reviewed()) " reviewed" }
            }
            (item)
            @if let Some(message) = error {
                div.error { (message) }
            }
            form action="/" method="post" {
                div.controls {
                    @if drill.current().is_some() {
                        @for rating in Rating::ALL {
                            input type="submit" name="action" value=(rating.label());
                        }
                        input type="submit" name="action" value="Skip";
                    }
                    input.secondary type="submit" name="action" value="End";
                }
            }
        }
    }
}

fn render_completion_page(drill: &Drill, total_items: usize) -> Markup {
    let score = drill.session().score.unwrap_or_else(|| drill.score());
    html! {
        div.root {
            div.finished {
                h1 { "Session Completed" }
                p.summary {
                    "Reviewed " (drill.reviewed()) " of " (total_items) " items."
                }
                p.score { "Score: " (format!("{score:.0}")) "%" }
                form action="/" method="post" {
                    div.controls {
                        input type="submit" name="action" value="Shutdown";
                    }
                }
            }
        }
    }
}

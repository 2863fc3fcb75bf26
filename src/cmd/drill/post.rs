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

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use maud::html;
use recall_core::Rating;
use recall_core::Timestamp;
use serde::Deserialize;

use crate::cmd::drill::state::ServerState;
use crate::cmd::drill::template::page_template;

#[derive(Deserialize)]
pub struct FormData {
    action: String,
}

enum Action {
    Rate(Rating),
    Skip,
    End,
    Shutdown,
}

impl Action {
    fn parse(action: &str) -> Option<Self> {
        match action {
            "Skip" => Some(Action::Skip),
            "End" => Some(Action::End),
            "Shutdown" => Some(Action::Shutdown),
            _ => Rating::ALL
                .into_iter()
                .find(|rating| rating.label() == action)
                .map(Action::Rate),
        }
    }
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Response {
    let Some(action) = Action::parse(&form.action) else {
        log::debug!("Unknown action: {}", form.action);
        return (StatusCode::BAD_REQUEST, "Unknown action").into_response();
    };
    if let Action::Shutdown = action {
        return shutdown(&state);
    }
    {
        let mut guard = state.mutable.lock().unwrap();
        let mutable = &mut *guard;
        let now = Timestamp::now();
        let result = match action {
            Action::Rate(rating) => mutable.drill.rate(&mut mutable.manager, rating, now),
            Action::Skip => mutable.drill.skip(&mut mutable.manager, now),
            Action::End => mutable.drill.complete(&mut mutable.manager, now),
            Action::Shutdown => return shutdown(&state),
        };
        match result {
            Ok(status) => log::debug!("{} -> {status:?}", form.action),
            Err(e) => {
                log::error!("{e}");
                mutable.error = Some(e.to_string());
            }
        }
    }
    Redirect::to("/").into_response()
}

fn shutdown(state: &ServerState) -> Response {
    if let Some(tx) = state.shutdown_tx.lock().unwrap().take() {
        let _ = tx.send(());
    }
    let body = html! {
        div.root {
            div.finished {
                p { "You can close this tab." }
            }
        }
    };
    Html(page_template(body).into_string()).into_response()
}

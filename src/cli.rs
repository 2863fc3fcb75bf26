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

use std::process::exit;

use clap::Parser;
use recall_core::Timestamp;
use tokio::spawn;

use crate::cmd::add::add_item;
use crate::cmd::drill::server::ServerConfig;
use crate::cmd::drill::server::start_server;
use crate::cmd::due::list_due;
use crate::cmd::import::import_concepts;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::collection::resolve_directory;
use crate::config::Config;
use crate::config::DEFAULT_HOST;
use crate::config::DEFAULT_MAX_ITEMS;
use crate::config::DEFAULT_PORT;
use crate::error::Fallible;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Review due items through a web interface.
    Drill {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Maximum number of items in a session. Default is 20.
        #[arg(long)]
        max_items: Option<usize>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long)]
        host: Option<String>,
        /// The port to use for the web server. Default is 8000.
        #[arg(long)]
        port: Option<u16>,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
    /// Add a concept to review.
    Add {
        /// The concept's name.
        concept: String,
        /// A Markdown description.
        #[arg(default_value = "")]
        description: String,
        /// Difficulty from 1 to 5. Default is 3.
        #[arg(long)]
        difficulty: Option<u8>,
        /// Path to the collection directory. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Add the concepts in a TOML file, or in every TOML file under a directory.
    Import {
        /// A `.toml` file or a directory of them.
        path: String,
        /// Path to the collection directory. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
    /// List the items that are due for review.
    Due {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Print collection statistics.
    Stats {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            directory,
            max_items,
            host,
            port,
            open_browser,
        } => {
            let directory = resolve_directory(directory)?;
            let config = Config::load(&directory)?;
            let host = host
                .or(config.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string());
            let port = port.or(config.port).unwrap_or(DEFAULT_PORT);
            let max_items = max_items.or(config.max_items).unwrap_or(DEFAULT_MAX_ITEMS);
            if open_browser.or(config.open_browser).unwrap_or(true) {
                // Start a separate task to open the browser once the server is up.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(_) => {
                            let _ = open::that(format!("http://{browser_host}:{port}/"));
                        }
                        Err(e) => {
                            eprintln!("Failed to connect to server: {e}");
                            exit(-1)
                        }
                    }
                });
            }
            let config = ServerConfig {
                directory: Some(directory.display().to_string()),
                host,
                port,
                session_started_at: Timestamp::now(),
                max_items,
            };
            start_server(config).await
        }
        Command::Add {
            concept,
            description,
            difficulty,
            directory,
        } => add_item(directory, concept, description, difficulty),
        Command::Import { path, directory } => import_concepts(directory, path),
        Command::Due { directory } => list_due(directory),
        Command::Stats { directory, format } => print_stats(directory, format),
    }
}

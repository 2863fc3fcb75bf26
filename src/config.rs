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

use serde::Deserialize;

use crate::error::Fallible;

/// Name of the optional per-collection settings file.
pub const CONFIG_FILE: &str = "recall.toml";

pub const DEFAULT_MAX_ITEMS: usize = 20;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Settings from `recall.toml`. Command-line flags take precedence.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Largest number of items in a drill session.
    pub max_items: Option<usize>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub open_browser: Option<bool>,
}

impl Config {
    /// Read the settings file in `directory`, if there is one.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::default());
        }
        log::debug!("Reading settings from {}", path.display());
        let text = read_to_string(&path)?;
        Ok(toml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_missing_file() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        assert_eq!(Config::load(&dir)?, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        write(dir.join(CONFIG_FILE), "max_items = 5\nport = 9000\n")?;
        let config = Config::load(&dir)?;
        assert_eq!(config.max_items, Some(5));
        assert_eq!(config.port, Some(9000));
        assert_eq!(config.host, None);
        Ok(())
    }

    #[test]
    fn test_unknown_key() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        write(dir.join(CONFIG_FILE), "max_itmes = 5\n")?;
        assert!(Config::load(&dir).is_err());
        Ok(())
    }
}

/*
 * Purpur Setup - A Purpur server installer
 * Copyright (C) 2025 Josh Kropf <josh@slashdev.ca>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use std::{fs, io, path::{Path, PathBuf}};

use serde_yaml::Value;

const SETTINGS_KEY: &str = "settings";
const KEEPALIVE_KEY: &str = "use-alternate-keepalive";

#[derive(thiserror::Error, Debug)]
pub enum PatchError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    Parse { path: PathBuf, source: serde_yaml::Error },
    #[error("could not parse {path}, \"settings\" was expected to be an object")]
    Shape { path: PathBuf },
    #[error("could not serialize {path}: {source}")]
    Serialize { path: PathBuf, source: serde_yaml::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error }
}

/// The `purpur.yml` file generated by the server on its first run
pub struct PurpurConfig {
    path: PathBuf
}

impl PurpurConfig {
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }

    /// Turn on purpur's alternate keep alive, nothing is touched when `enabled` is false
    pub fn patch_keepalive(&self, enabled: bool) -> Result<(), PatchError> {
        if !enabled {
            return Ok(());
        }

        let path = self.path.clone();

        let yaml = fs::read_to_string(&self.path)
            .map_err(|source| PatchError::Read { path: path.clone(), source })?;

        let mut config: Value = serde_yaml::from_str(&yaml)
            .map_err(|source| PatchError::Parse { path: path.clone(), source })?;

        set_keepalive(&mut config, enabled)
            .ok_or_else(|| PatchError::Shape { path: path.clone() })?;

        let yaml = serde_yaml::to_string(&config)
            .map_err(|source| PatchError::Serialize { path: path.clone(), source })?;

        fs::write(&self.path, yaml)
            .map_err(|source| PatchError::Write { path, source })
    }
}

/// `None` when the document has no `settings` mapping
fn set_keepalive(config: &mut Value, enabled: bool) -> Option<()> {
    let settings = config.get_mut(SETTINGS_KEY)?.as_mapping_mut()?;
    settings.insert(Value::from(KEEPALIVE_KEY), Value::Bool(enabled));
    Some(())
}

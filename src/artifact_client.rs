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

use futures_util::StreamExt;
use reqwest::{Client, StatusCode};

use crate::{Progress, Version};

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Version \"{version}\" was not found, code {status}, response: {body}")]
    VersionNotFound { version: String, status: u16, body: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error)
}

/// Anything that can hand over the server jar for a version
pub trait ArtifactSource {
    async fn fetch(&self, version: &Version, progress: &mut dyn Progress) -> Result<Vec<u8>, FetchError>;
}

pub struct PurpurClient {
    client: Client,
    base_url: String
}

impl PurpurClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        PurpurClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string()
        }
    }

    pub fn download_url(&self, version: &Version) -> String {
        format!("{base}/{version}/latest/download", base = self.base_url)
    }
}

impl ArtifactSource for PurpurClient {
    async fn fetch(&self, version: &Version, progress: &mut dyn Progress) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(self.download_url(version))
            .send().await?;

        // only a bad request means anything to us, every other status is taken as the jar
        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            return Err(FetchError::VersionNotFound {
                version: version.to_string(),
                status: status.as_u16(),
                body: response.text().await?
            });
        }

        // content length is only a hint for the progress bar, the server controls it
        let total = response.content_length();
        let mut body = Vec::new();
        let mut stream = response.bytes_stream();

        if let Some(total) = total {
            progress.begin("Downloading server.jar", total as usize);
        }

        while let Some(item) = stream.next().await {
            body.extend_from_slice(&item?);

            if total.is_some() {
                progress.advance(body.len());
            }
        }

        if total.is_some() {
            progress.end();
        }

        Ok(body)
    }
}

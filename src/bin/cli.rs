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

pub use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Download a Purpur server, write its config and run it once to generate the rest
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Server directory, created when missing
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Base URL of the purpur download API
    /// [default: $PURPUR_API_URL or https://api.purpurmc.org/v2/purpur]
    #[arg(long, verbatim_doc_comment)]
    pub api_url: Option<Url>
}

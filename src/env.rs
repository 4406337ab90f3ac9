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

use std::env;

pub const DEFAULT_API_URL: &str = "https://api.purpurmc.org/v2/purpur";

pub const SERVER_JAR_FILE: &str = "server.jar";
pub const PROPERTIES_FILE: &str = "server.properties";
pub const PURPUR_FILE: &str = "purpur.yml";
pub const EULA_FILE: &str = "eula.txt";

/// Base URL of the purpur download API, `$PURPUR_API_URL` or the public API
pub fn get_api_url() -> String {
    env::var("PURPUR_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

pub fn is_windows() -> bool {
    env::consts::OS == "windows"
}

pub fn get_run_script_name() -> &'static str {
    if is_windows() { "run.bat" } else { "run.sh" }
}

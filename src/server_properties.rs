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

use std::{fmt::Write as _, fs::File, io::{self, Write}, path::Path};

use tracing::warn;

use crate::Answers;

/// Ordered `key=value` pairs in java properties format
#[derive(Debug, Default)]
pub struct ServerProperties {
    entries: Vec<(String, String)>
}

impl ServerProperties {
    pub fn from_answers(answers: &Answers) -> Self {
        let mut props = Self::default();

        props.set("online-mode", !answers.offline);
        props.set("max-players", answers.max_players);
        props.set("simulation-distance", answers.simulation_distance);
        props.set("view-distance", answers.view_distance);
        props.set("hardcore", answers.hardcore);
        props.set("server-name", &answers.server_name);
        props.set("white-list", answers.whitelist);
        // spawn protection is never wanted, whatever the answers
        props.set("spawn-protection", 0);
        props.set("enforce-whitelist", answers.whitelist);

        if let Some(seed) = answers.seed.filter(|s| *s != 0) {
            props.set("level-seed", seed);
        }

        props
    }

    pub fn set(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();

        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value))
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Write every property, a line that fails to write is logged and skipped
    pub fn write_to(&self, writer: &mut impl Write) {
        for (key, value) in &self.entries {
            let line = format!("{}={}\n", escape(key, true), escape(value, false));

            if let Err(e) = writer.write_all(line.as_bytes()) {
                warn!("Failed to set '{key}' property: {e}");
            }
        }
    }

    /// Replace `path` with the properties, failing only when the file can't be created
    pub fn write_file(&self, path: &Path) -> io::Result<()> {
        let mut file = File::create(path)?;
        self.write_to(&mut file);
        file.flush()
    }
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());

    for (i, ch) in text.chars().enumerate() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(ch);
            },
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            ' '..='~' => out.push(ch),
            _ => {
                let mut buf = [0u16; 2];
                for unit in ch.encode_utf16(&mut buf) {
                    let _ = write!(out, "\\u{unit:04X}");
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::parse_version;

    fn answers(seed: Option<i64>) -> Answers {
        Answers {
            version: parse_version("1.20.4").unwrap(),
            offline: true,
            max_players: 12,
            heap_gb: 4,
            simulation_distance: 4,
            view_distance: 10,
            hardcore: true,
            server_name: "Friends".to_string(),
            keepalive: false,
            whitelist: true,
            seed
        }
    }

    fn render(props: &ServerProperties) -> String {
        let mut buf = Vec::new();
        props.write_to(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn keys_in_order() {
        let text = render(&ServerProperties::from_answers(&answers(None)));

        assert_eq!(text, "\
online-mode=false
max-players=12
simulation-distance=4
view-distance=10
hardcore=true
server-name=Friends
white-list=true
spawn-protection=0
enforce-whitelist=true
");
    }

    #[test]
    fn level_seed_only_when_non_zero() {
        let props = ServerProperties::from_answers(&answers(Some(-8675309)));
        assert_eq!(props.get("level-seed"), Some("-8675309"));
        assert!(render(&props).ends_with("level-seed=-8675309\n"));

        let props = ServerProperties::from_answers(&answers(Some(0)));
        assert_eq!(props.get("level-seed"), None);

        let props = ServerProperties::from_answers(&answers(None));
        assert_eq!(props.get("level-seed"), None);
    }

    #[test]
    fn spawn_protection_always_zero() {
        for seed in [None, Some(0), Some(1)] {
            let text = render(&ServerProperties::from_answers(&answers(seed)));
            assert!(text.contains("\nspawn-protection=0\n"));
        }
    }

    #[test]
    fn set_replaces_existing() {
        let mut props = ServerProperties::default();
        props.set("motd", "hello");
        props.set("motd", "bye");
        assert_eq!(render(&props), "motd=bye\n");
    }

    #[test]
    fn values_are_escaped() {
        let mut props = ServerProperties::default();
        props.set("server-name", " A=B: C#1 \\ é");
        assert_eq!(render(&props), "server-name=\\ A\\=B\\: C\\#1 \\\\ \\u00E9\n");
    }

    /// Rejects any write that carries the given key
    struct RejectKey {
        key: &'static str,
        written: Vec<u8>
    }

    impl Write for RejectKey {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.starts_with(format!("{}=", self.key).as_bytes()) {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_line_is_skipped() {
        let props = ServerProperties::from_answers(&answers(Some(77)));
        let mut writer = RejectKey { key: "hardcore", written: Vec::new() };

        props.write_to(&mut writer);

        let text = String::from_utf8(writer.written).unwrap();
        assert!(!text.contains("hardcore="));
        assert!(text.starts_with("online-mode=false\n"));
        assert!(text.contains("\nserver-name=Friends\n"));
        assert!(text.contains("\nspawn-protection=0\n"));
        assert!(text.ends_with("level-seed=77\n"));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn write_file_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.properties");
        std::fs::write(&path, "stale=true\nmore=stuff\n").unwrap();

        let mut props = ServerProperties::default();
        props.set("hardcore", false);
        props.write_file(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hardcore=false\n");
    }

    #[test]
    fn write_file_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("server.properties");
        assert!(ServerProperties::default().write_file(&path).is_err());
    }
}

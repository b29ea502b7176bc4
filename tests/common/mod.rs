//! Common test utilities for geostage CLI tests.
//!
//! `TestEnv` is an isolated working directory plus an isolated home, so neither a
//! real `geostage.toml` nor a user config can leak into a test.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Result of running the geostage binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// stdout parsed as NDJSON, one value per line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

/// Values whose `event` field equals `name`
pub fn events_named<'a>(values: &'a [serde_json::Value], name: &str) -> Vec<&'a serde_json::Value> {
    values.iter().filter(|v| v["event"] == name).collect()
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_geostage")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file relative to the project root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("GEOSTAGE_DATA_ROOT")
            .env_remove("GEOSTAGE_BASE_URL")
            .env_remove("GEOSTAGE_ACTIVATION_POLICY")
            .env_remove("GEOSTAGE_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Two locations: "Altstadt" (anchor + context) and "Hafen" (anchor + route).
pub const TWO_LOCATION_CONFIG: &str = r#"
[data]
root = "data"

[[layers]]
name = "Altstadt - Anker"
location = "Altstadt"
category = "anker"
geometry = "polygon"
path = "altstadt/anker.geojson"

[[layers]]
name = "Altstadt - Kontext"
location = "Altstadt"
category = "kontext"
geometry = "polygon"
path = "altstadt/kontext.geojson"

[[layers]]
name = "Hafen - Anker"
location = "Hafen"
category = "anchor"
geometry = "point"
path = "hafen/anker.geojson"

[[layers]]
name = "Hafen - Route"
location = "Hafen"
category = "narrative"
geometry = "line"
path = "hafen/route.geojson"
"#;

pub const ALTSTADT_ANKER: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "name": "Rathaus", "typ": "anker_polygon" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[11.63, 52.13], [11.64, 52.13], [11.64, 52.14], [11.63, 52.14], [11.63, 52.13]]]
      }
    }
  ]
}"#;

pub const ALTSTADT_KONTEXT: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "name": "Park", "typ": "kontext_flaeche_gruen" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[11.62, 52.12], [11.65, 52.12], [11.65, 52.15], [11.62, 52.15], [11.62, 52.12]]]
      }
    },
    {
      "type": "Feature",
      "properties": { "name": "Bank", "typ": "kontext_poi_bank" },
      "geometry": { "type": "Point", "coordinates": [11.635, 52.135] }
    }
  ]
}"#;

pub const HAFEN_ANKER: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "name": "Kran", "typ": "anker_polygon" },
      "geometry": { "type": "Point", "coordinates": [11.66, 52.16] }
    }
  ]
}"#;

pub const HAFEN_ROUTE: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "name": "Uferweg", "typ": "erzaehlung_route_fuss" },
      "geometry": { "type": "LineString", "coordinates": [[11.66, 52.16], [11.67, 52.17]] }
    }
  ]
}"#;

/// Environment with the two-location config and all four documents in place.
pub fn two_location_env() -> TestEnv {
    let env = TestEnv::new();
    env.write("geostage.toml", TWO_LOCATION_CONFIG)
        .write("data/altstadt/anker.geojson", ALTSTADT_ANKER)
        .write("data/altstadt/kontext.geojson", ALTSTADT_KONTEXT)
        .write("data/hafen/anker.geojson", HAFEN_ANKER)
        .write("data/hafen/route.geojson", HAFEN_ROUTE);
    env
}

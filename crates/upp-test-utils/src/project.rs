//! [`TestProject`] builder for build scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// A minimal `project.private.config.json` with the given entry list.
pub fn config_document(list: Value) -> Value {
    json!({
        "description": "项目私有配置文件",
        "projectname": "demo",
        "setting": { "compileHotReLoad": true },
        "condition": { "miniprogram": { "list": list } }
    })
}

/// A component source with one block followed by a small template.
///
/// `attrs` is inserted verbatim after the tag name, e.g. ` lang="yaml"`.
pub fn component(attrs: &str, body: &str) -> String {
    format!("<project-private{attrs}>\n{body}\n</project-private>\n\n<template>\n  <view />\n</template>\n")
}

/// A temporary project directory with helpers for setup and assertions.
///
/// # Example
///
/// ```rust,no_run
/// use upp_test_utils::{TestProject, component};
///
/// let project = TestProject::new().with_default_config();
/// project.write_source("pages/home/index.vue", &component("", "{ name: 'Home' }"));
/// assert!(project.config_path().exists());
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    config_dir: String,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project with an empty `src/` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();
        Self {
            temp_dir,
            config_dir: "src".to_string(),
        }
    }

    /// Use `dir` (relative to the root) for the configuration document.
    pub fn with_config_dir(mut self, dir: &str) -> Self {
        self.config_dir = dir.to_string();
        self
    }

    /// Write [`config_document`] with a stale entry that every build must drop.
    pub fn with_default_config(self) -> Self {
        let stale = json!([{
            "name": "stale",
            "pathName": "pages/deleted/index",
            "query": "",
            "launchMode": "default",
            "scene": null
        }]);
        self.write_config(&serde_json::to_string_pretty(&config_document(stale)).unwrap());
        self
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `project.private.config.json` for this project.
    pub fn config_path(&self) -> PathBuf {
        self.root()
            .join(&self.config_dir)
            .join("project.private.config.json")
    }

    /// Write raw text as the configuration document.
    pub fn write_config(&self, text: &str) {
        let path = self.config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    /// Read the configuration document back as JSON.
    pub fn read_config(&self) -> Value {
        let text = fs::read_to_string(self.config_path())
            .unwrap_or_else(|_| panic!("Could not read {}", self.config_path().display()));
        serde_json::from_str(&text).unwrap()
    }

    /// Write `content` to `src/<relative>` and return the full path.
    pub fn write_source(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join("src").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// `pathName` values of the persisted entry list, in file order.
    pub fn persisted_path_names(&self) -> Vec<String> {
        self.read_config()["condition"]["miniprogram"]["list"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["pathName"].as_str().unwrap().to_string())
            .collect()
    }
}

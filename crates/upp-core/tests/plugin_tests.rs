//! Build driver scenarios against a temporary project.

use std::fs;

use pretty_assertions::assert_eq;
use serde_json::json;
use upp_blocks::BlockLang;
use upp_core::{Error, ProjectOptions, ProjectPrivatePlugin};
use upp_test_utils::{TestProject, component};

fn plugin(project: &TestProject) -> ProjectPrivatePlugin {
    ProjectPrivatePlugin::new(project.root(), ProjectOptions::default())
}

#[test]
fn test_load_resets_stale_entries() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);

    assert!(plugin.is_loaded());
    assert!(plugin.entries().is_empty());

    assert!(plugin.build_end().unwrap());
    assert!(project.persisted_path_names().is_empty());
}

#[test]
fn test_transform_strips_block_and_merges() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);
    let code = component("", "{ name: 'Home', query: 'id=1' }");
    let file = project.write_source("pages/home/index.vue", &code);

    let output = plugin.transform(&file, &code).unwrap();

    assert_eq!(
        output.as_deref(),
        Some("\n\n<template>\n  <view />\n</template>\n")
    );
    assert_eq!(plugin.entries().len(), 1);
    assert_eq!(plugin.entries()[0].path_name(), "pages/home/index");
    assert_eq!(plugin.entries()[0].name(), Some(&json!("Home")));
}

#[test]
fn test_nvue_files_eligible() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);
    let code = component("", "{ name: 'Native' }");
    let file = project.write_source("pages/native/index.nvue", &code);

    assert!(plugin.transform(&file, &code).unwrap().is_some());
    assert_eq!(plugin.entries()[0].path_name(), "pages/native/index");
}

#[test]
fn test_ineligible_files_skipped() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);
    let code = component("", "{ name: 'x' }");

    let ts = project.write_source("pages/home/index.ts", &code);
    assert_eq!(plugin.transform(&ts, &code).unwrap(), None);

    let style_request = project.root().join("src/pages/home/index.vue?vue&type=style");
    assert_eq!(plugin.transform(&style_request, &code).unwrap(), None);

    let outside = project.root().join("components/card.vue");
    assert_eq!(plugin.transform(&outside, &code).unwrap(), None);

    assert!(plugin.entries().is_empty());
}

#[test]
fn test_file_without_closing_tag_skipped() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);
    let code = "<template>\n  <view />\n</template>\n";
    let file = project.write_source("pages/plain/index.vue", code);

    assert_eq!(plugin.transform(&file, code).unwrap(), None);
}

#[test]
fn test_retransform_replaces_entries_for_path() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);
    let path = project.root().join("src/pages/home/index.vue");
    let other = project.root().join("src/pages/about/index.vue");

    let first = component("", "[{ name: 'one' }, { name: 'two' }]");
    plugin.transform(&path, &first).unwrap();
    plugin
        .transform(&other, &component("", "{ name: 'about' }"))
        .unwrap();

    let second = component("", "{ name: 'three' }");
    plugin.transform(&path, &second).unwrap();

    let names: Vec<_> = plugin
        .entries()
        .iter()
        .filter_map(|e| e.name().and_then(|n| n.as_str()))
        .collect();
    assert_eq!(names, vec!["about", "three"]);
}

#[test]
fn test_null_block_clears_entries_without_rewrite() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);
    let path = project.root().join("src/pages/home/index.vue");

    plugin
        .transform(&path, &component("", "{ name: 'Home' }"))
        .unwrap();
    let output = plugin.transform(&path, &component("", "null")).unwrap();

    assert_eq!(output, None);
    assert!(plugin.entries().is_empty());
}

#[test]
fn test_second_build_replaces_first() {
    let project = TestProject::new().with_default_config();
    let path = project.root().join("src/pages/home/index.vue");

    let mut first = plugin(&project);
    first
        .transform(&path, &component("", "[{ name: 'a' }, { name: 'b' }]"))
        .unwrap();
    first.build_end().unwrap();

    let mut second = plugin(&project);
    second
        .transform(&path, &component("", "{ name: 'c' }"))
        .unwrap();
    second.build_end().unwrap();

    let list = &project.read_config()["condition"]["miniprogram"]["list"];
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "c");
}

#[test]
fn test_build_end_sorts_by_path_name() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);

    plugin
        .transform(project.root().join("src/b/x.vue"), &component("", "{}"))
        .unwrap();
    plugin
        .transform(project.root().join("src/a/y.vue"), &component("", "{}"))
        .unwrap();

    plugin.build_end().unwrap();

    assert_eq!(project.persisted_path_names(), vec!["a/y", "b/x"]);
}

#[test]
fn test_build_end_is_one_shot() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);
    let path = project.root().join("src/pages/home/index.vue");
    plugin
        .transform(&path, &component("", "{ name: 'Home' }"))
        .unwrap();

    assert!(plugin.build_end().unwrap());
    assert!(plugin.is_finalized());

    // Anything after finalize is ignored and never written.
    let late = project.root().join("src/pages/late/index.vue");
    assert_eq!(
        plugin
            .transform(&late, &component("", "{ name: 'late' }"))
            .unwrap(),
        None
    );
    fs::write(project.config_path(), "sentinel").unwrap();
    assert!(!plugin.build_end().unwrap());

    assert_eq!(fs::read_to_string(project.config_path()).unwrap(), "sentinel");
}

#[test]
fn test_missing_config_still_strips_blocks() {
    let project = TestProject::new();
    let mut plugin = plugin(&project);
    let path = project.root().join("src/pages/home/index.vue");

    assert!(!plugin.is_loaded());
    let output = plugin
        .transform(&path, &component("", "{ name: 'Home' }"))
        .unwrap();
    assert!(output.is_some());
    assert!(plugin.entries().is_empty());

    assert!(!plugin.build_end().unwrap());
    assert!(!project.config_path().exists());
}

#[test]
fn test_malformed_config_not_overwritten() {
    let project = TestProject::new();
    project.write_config("{ projectname: ");
    let mut plugin = plugin(&project);

    assert!(!plugin.is_loaded());
    assert!(!plugin.build_end().unwrap());
    assert_eq!(
        fs::read_to_string(project.config_path()).unwrap(),
        "{ projectname: "
    );
}

#[test]
fn test_load_reports_missing_file() {
    let project = TestProject::new();
    let path = upp_fs::NormalizedPath::new(project.config_path());

    let err = ProjectPrivatePlugin::load(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigLoad { .. }));
    assert!(err.to_string().contains("file not found"));
}

#[test]
fn test_load_reports_parse_failure() {
    let project = TestProject::new();
    project.write_config("{ broken");
    let path = upp_fs::NormalizedPath::new(project.config_path());

    let err = ProjectPrivatePlugin::load(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid JSON parse"), "got: {err}");
}

#[test]
fn test_parse_error_propagates() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);
    let path = project.root().join("src/pages/home/index.vue");

    let err = plugin
        .transform(&path, &component(" lang=\"yaml\"", "name: [unclosed"))
        .unwrap_err();

    assert!(matches!(err, Error::Blocks(upp_blocks::Error::Parse { .. })));
    assert!(err.to_string().starts_with("Invalid YAML parse"), "got: {err}");
}

#[test]
fn test_custom_config_dir_and_lang() {
    let project = TestProject::new().with_config_dir("config").with_default_config();
    let options = ProjectOptions {
        dir: "config".into(),
        lang: Some(BlockLang::Yaml),
    };
    let mut plugin = ProjectPrivatePlugin::new(project.root(), options);
    let path = project.root().join("src/pages/home/index.vue");

    plugin
        .transform(&path, &component("", "- name: Home\n  query: id=1"))
        .unwrap();
    plugin.build_end().unwrap();

    assert!(project.root().join("config/project.private.config.json").exists());
    assert!(!project.root().join("src/project.private.config.json").exists());
    assert_eq!(project.persisted_path_names(), vec!["pages/home/index"]);
}

#[test]
fn test_devtools_entries_do_not_block_load() {
    let project = TestProject::new();
    project.write_config(
        &serde_json::to_string_pretty(&upp_test_utils::config_document(json!([
            { "name": "x", "pathName": "pages/x", "query": 5, "launchMode": "singlePage", "scene": "1001" }
        ])))
        .unwrap(),
    );
    let mut plugin = plugin(&project);
    assert!(plugin.is_loaded());

    let code = component("", "{ name: 'Home' }");
    let file = project.write_source("pages/home/index.vue", &code);
    plugin.transform(&file, &code).unwrap();

    assert!(plugin.build_end().unwrap());
    assert_eq!(project.persisted_path_names(), vec!["pages/home/index"]);
}

#[test]
fn test_untyped_block_fields_written_verbatim() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);
    let code = component(" lang=\"yaml\"", "name: 2024\nquery: 123\nlaunchMode: singlePage");
    let file = project.write_source("pages/a/index.vue", &code);

    assert!(plugin.transform(&file, &code).unwrap().is_some());
    plugin.build_end().unwrap();

    let written = &project.read_config()["condition"]["miniprogram"]["list"][0];
    assert_eq!(written["name"], json!(2024));
    assert_eq!(written["query"], json!(123));
    assert_eq!(written["launchMode"], json!("singlePage"));
    assert_eq!(written["pathName"], json!("pages/a/index"));
}

#[test]
fn test_sort_follows_locale_symbol_order() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);
    for path in ["pages/user/index.vue", "pages/user-x/index.vue", "pages/user_center/index.vue"] {
        let code = component("", "{}");
        let file = project.write_source(path, &code);
        plugin.transform(&file, &code).unwrap();
    }
    plugin.build_end().unwrap();

    assert_eq!(
        project.persisted_path_names(),
        vec!["pages/user_center/index", "pages/user-x/index", "pages/user/index"]
    );
}

#[test]
fn test_written_document_snapshot() {
    let project = TestProject::new().with_default_config();
    let mut plugin = plugin(&project);

    plugin
        .transform(
            project.root().join("src/b/x.vue"),
            &component("", "{ query: 'id=2', scene: 1001 }"),
        )
        .unwrap();
    plugin
        .transform(
            project.root().join("src/a/y.vue"),
            &component(" lang=\"json\"", r#"{ "name": "A" }"#),
        )
        .unwrap();
    plugin.build_end().unwrap();

    let written = fs::read_to_string(project.config_path()).unwrap();
    insta::assert_snapshot!(written, @r###"
    {
      "description": "项目私有配置文件",
      "projectname": "demo",
      "setting": {
        "compileHotReLoad": true
      },
      "condition": {
        "miniprogram": {
          "list": [
            {
              "query": "",
              "launchMode": "default",
              "scene": null,
              "name": "A",
              "pathName": "a/y"
            },
            {
              "query": "id=2",
              "launchMode": "default",
              "scene": 1001,
              "name": "b_x",
              "pathName": "b/x"
            }
          ]
        }
      }
    }
    "###);
}

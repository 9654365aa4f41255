use macrodoc_cli::commands::generate::{run, GenerateOptions};
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── CWD Guard ───────────────────────────────────────────────────────

struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    fn new(path: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

// ── Fixtures ────────────────────────────────────────────────────────

const FOO_MANIFEST: &str = r#"{
    "classes": [
        {
            "class": "App\\Foo",
            "macros": [
                {
                    "name": "bar",
                    "parameters": [
                        { "name": "x", "type": "int", "optional": true, "default": 1 }
                    ],
                    "defined_by": "App\\Providers\\MacroProvider",
                    "file": "app/Providers/MacroProvider.php",
                    "start_line": 12,
                    "end_line": 16
                }
            ]
        }
    ]
}"#;

fn write_class_map(base: &Path, classes: &[&str]) {
    let dir = base.join("vendor/composer");
    fs::create_dir_all(&dir).unwrap();
    let mut source = String::from("<?php\n\nreturn array(\n");
    for class in classes {
        let escaped = class.replace('\\', "\\\\");
        source.push_str(&format!(
            "    '{escaped}' => $baseDir . '/src/{}.php',\n",
            class.rsplit('\\').next().unwrap()
        ));
    }
    source.push_str(");\n");
    fs::write(dir.join("autoload_classmap.php"), source).unwrap();
}

fn write_manifest(base: &Path, json: &str) {
    let dir = base.join("bootstrap/cache");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("macros.json"), json).unwrap();
}

fn options_for(base: &Path) -> GenerateOptions {
    GenerateOptions {
        base_path: base.to_path_buf(),
        ..GenerateOptions::default()
    }
}

// ════════════════════════════════════════════════════════════════════
// Generation
// ════════════════════════════════════════════════════════════════════

#[test]
fn generate_writes_helper_file() {
    let tmp = TempDir::new().unwrap();
    write_class_map(tmp.path(), &["App\\Foo"]);
    write_manifest(tmp.path(), FOO_MANIFEST);

    run(options_for(tmp.path())).unwrap();

    let helper = fs::read_to_string(tmp.path().join("_macro_ide_helper.php")).unwrap();
    assert!(helper.starts_with("<?php\n// @formatter:off\n"));
    assert!(helper.contains("@method  bar(int $x = 1)"));
    assert!(helper.contains("    class Foo {}"));
}

#[test]
#[serial]
fn generate_defaults_to_current_directory() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    write_class_map(Path::new("."), &["App\\Foo"]);
    write_manifest(Path::new("."), FOO_MANIFEST);

    run(GenerateOptions {
        base_path: PathBuf::from("."),
        ..GenerateOptions::default()
    })
    .unwrap();

    assert!(Path::new("_macro_ide_helper.php").exists());
}

#[test]
fn extra_namespace_flag_widens_the_filter() {
    let tmp = TempDir::new().unwrap();
    write_class_map(tmp.path(), &["Vendor\\Thing"]);
    write_manifest(
        tmp.path(),
        r#"{ "classes": [ { "class": "Vendor\\Thing", "macros": [
            { "name": "spin", "defined_by": "App\\P", "file": "app/P.php", "start_line": 1, "end_line": 2 }
        ] } ] }"#,
    );

    let mut options = options_for(tmp.path());
    options.namespaces.push("Vendor\\".to_string());
    run(options).unwrap();

    let helper = fs::read_to_string(tmp.path().join("_macro_ide_helper.php")).unwrap();
    assert!(helper.contains("namespace Vendor {"));
    assert!(helper.contains("@method  spin()"));
}

// ════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════

#[test]
fn missing_class_map_errors_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    write_manifest(tmp.path(), FOO_MANIFEST);

    let err = run(options_for(tmp.path())).unwrap_err();
    assert!(err.to_string().contains("class map not found"));
    assert!(!tmp.path().join("_macro_ide_helper.php").exists());
}

#[test]
fn missing_manifest_errors_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    write_class_map(tmp.path(), &["App\\Foo"]);

    let err = run(options_for(tmp.path())).unwrap_err();
    assert!(err.to_string().contains("macro manifest not found"));
    assert!(!tmp.path().join("_macro_ide_helper.php").exists());
}

#[test]
fn malformed_manifest_entry_does_not_abort_the_run() {
    let tmp = TempDir::new().unwrap();
    write_class_map(tmp.path(), &["App\\Foo", "App\\Broken"]);
    let manifest = r#"{
        "classes": [
            { "class": "App\\Broken", "macros": [ { "parameters": [] } ] },
            {
                "class": "App\\Foo",
                "macros": [
                    { "name": "bar", "defined_by": "App\\P", "file": "app/P.php", "start_line": 1, "end_line": 2 }
                ]
            }
        ]
    }"#;
    write_manifest(tmp.path(), manifest);

    run(options_for(tmp.path())).unwrap();

    let helper = fs::read_to_string(tmp.path().join("_macro_ide_helper.php")).unwrap();
    assert!(helper.contains("class Foo {}"));
    assert!(!helper.contains("Broken"));
}

// ════════════════════════════════════════════════════════════════════
// Configuration
// ════════════════════════════════════════════════════════════════════

#[test]
fn config_file_changes_the_output_name() {
    let tmp = TempDir::new().unwrap();
    write_class_map(tmp.path(), &["App\\Foo"]);
    write_manifest(tmp.path(), FOO_MANIFEST);
    fs::write(tmp.path().join("macrodoc.yaml"), "filename: _ide_macros.php\n").unwrap();

    run(options_for(tmp.path())).unwrap();

    assert!(tmp.path().join("_ide_macros.php").exists());
    assert!(!tmp.path().join("_macro_ide_helper.php").exists());
}

#[test]
fn output_flag_wins_over_config_file() {
    let tmp = TempDir::new().unwrap();
    write_class_map(tmp.path(), &["App\\Foo"]);
    write_manifest(tmp.path(), FOO_MANIFEST);
    fs::write(tmp.path().join("macrodoc.yaml"), "filename: _ide_macros.php\n").unwrap();

    let mut options = options_for(tmp.path());
    options.output = Some(PathBuf::from("_from_flag.php"));
    run(options).unwrap();

    assert!(tmp.path().join("_from_flag.php").exists());
    assert!(!tmp.path().join("_ide_macros.php").exists());
}

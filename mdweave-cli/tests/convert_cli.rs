use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use tempfile::tempdir;

#[test]
fn converts_markdown_to_docx_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.md");
    fs::write(&input, "# Title\n\nHello world\n- item one\n1. first\n").unwrap();
    let output = dir.path().join("report.docx");

    let mut cmd = cargo_bin_cmd!("mdweave");
    cmd.current_dir(dir.path())
        .arg(&input)
        .arg("-o")
        .arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote:"));

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn output_defaults_to_docx_extension_next_to_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "plain paragraph\n").unwrap();

    let mut cmd = cargo_bin_cmd!("mdweave");
    cmd.current_dir(dir.path()).arg(&input);

    cmd.assert().success().stdout(predicate::str::contains("notes.docx"));
    assert!(dir.path().join("notes.docx").exists());
}

#[test]
fn missing_input_is_a_clean_no_op() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.md");

    let mut cmd = cargo_bin_cmd!("mdweave");
    cmd.current_dir(dir.path()).arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Markdown file not found:"));
    assert!(!dir.path().join("absent.docx").exists());
}

#[test]
fn missing_image_reference_degrades_to_placeholder_text() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    let input = dir.path().join("docs").join("report.md");
    fs::write(&input, "![logo](images/logo.png)\n").unwrap();
    let output = dir.path().join("report.docx");

    let mut cmd = cargo_bin_cmd!("mdweave");
    cmd.current_dir(dir.path())
        .arg(&input)
        .arg("-o")
        .arg(&output);
    cmd.assert().success();

    let bytes = fs::read(&output).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    assert!(xml.contains("[Missing image: images/logo.png]"));
}

#[test]
fn config_file_overrides_body_font() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.md");
    fs::write(&input, "body text\n").unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[convert.docx]\nbody_font = \"Georgia\"\n").unwrap();
    let output = dir.path().join("report.docx");

    let mut cmd = cargo_bin_cmd!("mdweave");
    cmd.current_dir(dir.path())
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--config")
        .arg(&config);
    cmd.assert().success();

    let bytes = fs::read(&output).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/styles.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    assert!(xml.contains("w:ascii=\"Georgia\""));
}

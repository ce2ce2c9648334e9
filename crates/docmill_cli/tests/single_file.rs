use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const PAGE: &str = r#"<html><head><title>Page</title></head><body>
<div id="content-wrap">
    <div class="content"><h1>Heading</h1><p>Hello world</p></div>
</div>
</body></html>"#;

fn docmill() -> Command {
    Command::cargo_bin("docmill").expect("binary builds")
}

#[test]
fn converts_a_single_file_with_default_output() {
    let temp = tempfile::TempDir::new().unwrap();
    let input = temp.path().join("Page.html");
    fs::write(&input, PAGE).unwrap();

    docmill()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted"));

    let markdown = fs::read_to_string(temp.path().join("Page.md")).unwrap();
    assert!(markdown.contains("Hello world"));
}

#[test]
fn explicit_output_path_is_respected() {
    let temp = tempfile::TempDir::new().unwrap();
    let input = temp.path().join("Page.html");
    let output = temp.path().join("renamed.md");
    fs::write(&input, PAGE).unwrap();

    docmill().arg(&input).arg(&output).assert().success();

    assert!(output.exists());
    assert!(!temp.path().join("Page.md").exists());
}

#[test]
fn missing_input_file_is_a_user_facing_error() {
    let temp = tempfile::TempDir::new().unwrap();
    docmill()
        .current_dir(temp.path())
        .arg("nope.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn batch_mode_without_doc_trees_reports_an_error() {
    let temp = tempfile::TempDir::new().unwrap();
    docmill()
        .current_dir(temp.path())
        .arg("-y")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manual"));
}

#[test]
fn batch_mode_converts_doc_trees_in_cwd() {
    let temp = tempfile::TempDir::new().unwrap();
    let manual = temp.path().join("Manual").join("sub");
    fs::create_dir_all(&manual).unwrap();
    fs::write(manual.join("Page.html"), PAGE).unwrap();

    docmill()
        .current_dir(temp.path())
        .args(["-y", "--threads", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manual -> output-manual"))
        .stdout(predicate::str::contains("1 converted, 0 failed"));

    let out = temp.path().join("output-manual").join("sub").join("Page.md");
    assert!(fs::read_to_string(out).unwrap().contains("Hello world"));
}

#[test]
fn batch_mode_prompt_cancels_on_anything_but_yes() {
    let temp = tempfile::TempDir::new().unwrap();
    let manual = temp.path().join("Manual");
    fs::create_dir_all(&manual).unwrap();
    fs::write(manual.join("Page.html"), PAGE).unwrap();

    docmill()
        .current_dir(temp.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion cancelled"));

    assert!(!temp.path().join("output-manual").exists());
}

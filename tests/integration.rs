use std::fs;
use std::path::Path;

use tempfile::TempDir;

use filex::Shell;
use filex::config::ShellConfig;

// Drive a full shell session from a scripted input string and capture
// everything the shell printed.
fn run_script(start_dir: &Path, script: &str) -> String {
    let config = ShellConfig {
        start_dir: start_dir.display().to_string(),
        ..ShellConfig::default()
    };

    let mut shell = Shell::new(config).expect("shell should start");
    let mut reader = script.as_bytes();
    let mut output = Vec::new();
    shell
        .run(&mut reader, &mut output)
        .expect("session should not fail on in-memory streams");

    String::from_utf8(output).expect("shell output should be valid UTF-8")
}

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_quit_immediately() {
    let dir = TempDir::new().unwrap();
    let output = run_script(dir.path(), "0\n");

    assert!(output.contains("1. List files"));
    assert!(output.contains("Enter your choice: "));
    assert!(output.ends_with("Exiting File Explorer...\n"));
}

#[test]
fn test_eof_quits_like_choice_zero() {
    let dir = TempDir::new().unwrap();
    let output = run_script(dir.path(), "");

    assert!(output.ends_with("Exiting File Explorer...\n"));
}

#[test]
fn test_create_file_then_list_shows_it_once() {
    let dir = TempDir::new().unwrap();
    let output = run_script(dir.path(), "3\nnotes.txt\n1\n0\n");

    assert!(output.contains("File created: notes.txt"));
    assert_eq!(count_occurrences(&output, "[FILE] notes.txt"), 1);
    assert!(dir.path().join("notes.txt").is_file());
}

#[test]
fn test_create_then_delete_directory_omits_it_from_listing() {
    let dir = TempDir::new().unwrap();
    let output = run_script(dir.path(), "4\nstuff\n5\nstuff\n1\n0\n");

    assert!(output.contains("Directory created: stuff"));
    assert!(output.contains("Deleted."));
    // The directory shows up in no listing after the delete
    assert!(!output.contains("[DIR] stuff"));
    assert!(!dir.path().join("stuff").exists());
}

#[test]
fn test_change_directory_updates_prompt_header() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();

    let output = run_script(dir.path(), "2\nsub\n0\n");

    let canonical_sub = dir.path().join("sub").canonicalize().unwrap();
    assert!(output.contains(&format!("Current Directory: {}", canonical_sub.display())));
}

#[test]
fn test_change_directory_not_found() {
    let dir = TempDir::new().unwrap();
    let output = run_script(dir.path(), "2\nghost\n0\n");

    assert!(output.contains("Directory not found."));
    // Current directory is unchanged in the following menu
    let canonical = dir.path().canonicalize().unwrap();
    assert_eq!(
        count_occurrences(&output, &format!("Current Directory: {}", canonical.display())),
        2
    );
}

#[test]
fn test_copy_directory_reproduces_descendants() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("tree/a/b")).unwrap();
    fs::write(dir.path().join("tree/top.txt"), b"top").unwrap();
    fs::write(dir.path().join("tree/a/b/leaf.txt"), b"leaf").unwrap();

    let output = run_script(dir.path(), "6\ntree\ntree_copy\n0\n");

    assert!(output.contains("Copied successfully."));
    assert_eq!(fs::read(dir.path().join("tree_copy/top.txt")).unwrap(), b"top");
    assert_eq!(
        fs::read(dir.path().join("tree_copy/a/b/leaf.txt")).unwrap(),
        b"leaf"
    );
    // Source is untouched
    assert!(dir.path().join("tree/a/b/leaf.txt").is_file());
}

#[test]
fn test_copy_file_overwrites_destination() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("src.txt"), b"fresh").unwrap();
    fs::write(dir.path().join("dst.txt"), b"stale").unwrap();

    let output = run_script(dir.path(), "6\nsrc.txt\ndst.txt\n0\n");

    assert!(output.contains("Copied successfully."));
    assert_eq!(fs::read(dir.path().join("dst.txt")).unwrap(), b"fresh");
}

#[test]
fn test_move_file_relocates_content() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("old.txt"), b"payload").unwrap();

    let output = run_script(dir.path(), "7\nold.txt\nnew.txt\n0\n");

    assert!(output.contains("Moved successfully."));
    assert!(!dir.path().join("old.txt").exists());
    assert_eq!(fs::read(dir.path().join("new.txt")).unwrap(), b"payload");
}

#[test]
fn test_move_missing_source_reports_error() {
    let dir = TempDir::new().unwrap();
    let output = run_script(dir.path(), "7\nghost\nnew.txt\n0\n");

    assert!(output.contains("Error moving:"));
}

#[test]
fn test_search_nested_file_found_exactly_once() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
    fs::write(dir.path().join("a/b/c/needle.txt"), b"x").unwrap();
    fs::write(dir.path().join("a/decoy.txt"), b"x").unwrap();

    let output = run_script(dir.path(), "8\nneedle.txt\n0\n");

    let expected = dir
        .path()
        .canonicalize()
        .unwrap()
        .join("a/b/c/needle.txt");
    assert_eq!(
        count_occurrences(&output, &format!("Found: {}", expected.display())),
        1
    );
}

#[cfg(unix)]
#[test]
fn test_set_then_show_permissions_round_trip() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("perm.txt"), b"x").unwrap();

    let output = run_script(dir.path(), "10\nperm.txt\n640\n9\nperm.txt\n0\n");

    assert!(output.contains("Permissions updated."));
    assert!(output.contains("Permissions for perm.txt: rw-r-----"));
}

#[cfg(unix)]
#[test]
fn test_set_permissions_rejects_non_octal_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("perm.txt"), b"x").unwrap();

    let output = run_script(dir.path(), "10\nperm.txt\nxyz\n0\n");

    assert!(output.contains("Invalid permission mode: xyz"));
    assert!(!output.contains("Permissions updated."));
}

#[test]
fn test_invalid_choice_reprompts() {
    let dir = TempDir::new().unwrap();
    let output = run_script(dir.path(), "42\n0\n");

    assert!(output.contains("Invalid choice."));
    // The menu came back after the invalid input
    assert_eq!(count_occurrences(&output, "Enter your choice: "), 2);
}

#[test]
fn test_delete_missing_path_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let output = run_script(dir.path(), "5\nghost\n0\n");

    assert!(output.contains("Path not found."));
}

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tfdoc::header::load_header;

fn testdata(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("testdata").join(name)
}

#[test]
fn test_load_header_from_block_comment() {
    let expected = "Example of 'foo_bar' module in `foo_bar.tf`.\n\n- list item 1\n- list item 2\n\nEven inline **formatting** in _here_ is possible.\nand some [link](https://domain.com/)";
    assert_eq!(load_header(testdata("full-example").join("main.tf")), expected);
}

#[test]
fn test_load_header_empty() {
    assert_eq!(load_header(testdata("empty-header").join("main.tf")), "");
}

#[test]
fn test_load_header_non_existent() {
    assert_eq!(load_header(testdata("non-exist").join("main.tf")), "");
}

#[test]
fn test_load_header_from_line_comments() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("main.tf");
    fs::write(
        &path,
        "# Network module\n#\n# - creates a VPC\n# - creates subnets\n\nresource \"aws_vpc\" \"this\" {}\n",
    )
    .unwrap();

    assert_eq!(load_header(&path), "Network module\n\n- creates a VPC\n- creates subnets");
}

#[test]
fn test_load_header_keeps_text_on_opening_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("main.tf");
    fs::write(&path, "/** Network module\n * Creates a VPC.\n */\n\nresource \"aws_vpc\" \"this\" {}\n").unwrap();

    assert_eq!(load_header(&path), "Network module\nCreates a VPC.");
}

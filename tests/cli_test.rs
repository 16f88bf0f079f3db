use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tfdoc::cli::Args;
use tfdoc::config::SortByOverride;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("tfdoc")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_default_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.path, PathBuf::from("."));
    assert!(!parsed.output_values);
    assert!(!parsed.verbose);

    let overrides = parsed.overrides();
    assert_eq!(overrides.path, Some(PathBuf::from(".")));
    assert_eq!(overrides.output_values, None);
    assert_eq!(overrides.sort_by, None);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--header-from",
        "doc.tf",
        "--output-values",
        "--output-values-path",
        "values.json",
        "--sort-by-required",
        "-v",
        "./module",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert!(parsed.verbose);

    let overrides = parsed.overrides();
    assert_eq!(overrides.path, Some(PathBuf::from("./module")));
    assert_eq!(overrides.header_from, Some(PathBuf::from("doc.tf")));
    assert_eq!(overrides.output_values, Some(true));
    assert_eq!(overrides.output_values_path, Some(PathBuf::from("values.json")));
    assert_eq!(overrides.sort_by, Some(SortByOverride { name: None, required: Some(true) }));
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["./a", "./b"])).is_err());
}

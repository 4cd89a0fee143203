use std::path::PathBuf;

use caption_stack::{
    app::{parse_args_from, write_bash_completions, AppError, ReportVerbosity},
    LibError, ShortImagePolicy,
};

fn parse(args: &[&str]) -> Result<caption_stack::app::AppCfg, AppError> {
    parse_args_from(std::iter::once("caption_stack").chain(args.iter().copied()))
}

#[test]
fn test_defaults() {
    let cfg = parse(&[]).unwrap();
    let merge_cfg = &cfg.merge_cfg;

    assert_eq!(merge_cfg.input_dir, PathBuf::from("input_fig_folder"));
    assert_eq!(merge_cfg.subtitle_ratio, 6.0);
    assert_eq!(merge_cfg.short_image_policy, ShortImagePolicy::Clamp);
    assert_eq!(cfg.output_cfg.verbosity, ReportVerbosity::Default);
    assert!(!cfg.generate_bash_completions);

    //output_<date> <time>.png
    let output = merge_cfg.output_path.to_string_lossy().into_owned();
    assert!(output.starts_with("output_"));
    assert!(output.ends_with(".png"));
    assert_eq!(output.len(), "output_2024-01-31 23_59_59.png".len());
}

#[test]
fn test_explicit_values() {
    let cfg = parse(&[
        "-i",
        "shots",
        "--output",
        "merged.png",
        "--subtitle-ratio",
        "3.5",
        "--short-images",
        "reject",
        "--verbose",
    ])
    .unwrap();

    assert_eq!(cfg.merge_cfg.input_dir, PathBuf::from("shots"));
    assert_eq!(cfg.merge_cfg.output_path, PathBuf::from("merged.png"));
    assert_eq!(cfg.merge_cfg.subtitle_ratio, 3.5);
    assert_eq!(cfg.merge_cfg.short_image_policy, ShortImagePolicy::Reject);
    assert_eq!(cfg.output_cfg.verbosity, ReportVerbosity::Verbose);
}

#[test]
fn test_quiet() {
    let cfg = parse(&["--quiet"]).unwrap();
    assert_eq!(cfg.output_cfg.verbosity, ReportVerbosity::Quiet);

    assert!(matches!(
        parse(&["--quiet", "--verbose"]),
        Err(AppError::ArgParse(_))
    ));
}

#[test]
fn test_bad_ratio() {
    assert!(matches!(
        parse(&["-r", "six"]),
        Err(AppError::ParseSubtitleRatio(s)) if s == "six"
    ));
    assert!(matches!(
        parse(&["-r", "0"]),
        Err(AppError::Merge(LibError::InvalidSubtitleRatio(_)))
    ));
    assert!(matches!(
        parse(&["-r", "-2"]),
        Err(AppError::Merge(LibError::InvalidSubtitleRatio(_)))
    ));
}

#[test]
fn test_unknown_short_image_policy() {
    assert!(matches!(
        parse(&["--short-images", "stretch"]),
        Err(AppError::ArgParse(_))
    ));
}

#[test]
fn test_generate_completions_flag() {
    let cfg = parse(&["--generate-bash-completions"]).unwrap();
    assert!(cfg.generate_bash_completions);
}

#[test]
fn test_bash_completions_list_the_options() {
    let mut out = Vec::new();
    write_bash_completions(&mut out);
    let script = String::from_utf8(out).unwrap();

    assert!(script.contains("caption_stack"));
    for flag in &[
        "--input-dir",
        "--output",
        "--subtitle-ratio",
        "--short-images",
        "--quiet",
        "--verbose",
        "--generate-bash-completions",
    ] {
        assert!(script.contains(flag), "missing {}", flag);
    }
}

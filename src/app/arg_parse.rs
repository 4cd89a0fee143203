use std::{
    ffi::{OsStr, OsString},
    io::Write,
    path::PathBuf,
};

use crate::{
    app::*,
    library::{
        definitions::{
            DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PREFIX, DEFAULT_OUTPUT_TIME_FORMAT,
            DEFAULT_SUBTITLE_RATIO, IMAGE_EXTENSION,
        },
        MergeCfg, ShortImagePolicy,
    },
};

const INPUT_DIR: &str = "Input dir";
const OUTPUT_PATH: &str = "Output path";
const SUBTITLE_RATIO: &str = "Subtitle ratio";
const SHORT_IMAGES: &str = "Short images";
const QUIET: &str = "Quiet";
const VERBOSE: &str = "Verbose";
const GENERATE_BASH_COMPLETIONS: &str = "Generate bash completions";

pub fn build_cli() -> clap::App<'static, 'static> {
    //args are not added through method chaining because this appears to break rustfmt.
    let mut clap_app = clap::App::new("Caption stack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Stacks the subtitle bands of a folder of screenshots beneath the first screenshot");

    clap_app = clap_app.arg(
        clap::Arg::with_name(INPUT_DIR)
            .short("i")
            .long("input-dir")
            .takes_value(true)
            .default_value(DEFAULT_INPUT_DIR)
            .help("Directory containing the screenshots. Only .png files directly inside it are used, in file name order.")
            .display_order(1),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(OUTPUT_PATH)
            .short("o")
            .long("output")
            .takes_value(true)
            .help("Where to write the merged image [default: output_<date> <time>.png in the current directory]")
            .display_order(2),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(SUBTITLE_RATIO)
            .short("r")
            .long("subtitle-ratio")
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("The subtitle band is 1/N of the first screenshot's height. Larger numbers give smaller bands. [default: 6]")
            .display_order(3),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(SHORT_IMAGES)
            .long("short-images")
            .takes_value(true)
            .possible_values(&ShortImagePolicy::NAMES)
            .default_value("clamp")
            .help("What to do with a screenshot that is shorter than the subtitle band")
            .long_help(concat!(
                "What to do with a screenshot that is shorter than the subtitle band once resized to the ",
                "width of the first screenshot. 'clamp' uses the whole screenshot and leaves the rest of ",
                "its band white. 'reject' stops with an error."
            )),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(QUIET)
            .long("quiet")
            .help("Quiet verbosity: Only print errors and warnings (this hides the summary)")
            .conflicts_with(VERBOSE),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(VERBOSE)
            .long("verbose")
            .help("Print detailed progress for every screenshot"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(GENERATE_BASH_COMPLETIONS)
            .long("generate-bash-completions")
            .help("Print bash completions to stdout and exit"),
    );

    clap_app
}

pub fn write_bash_completions(out: &mut impl Write) {
    build_cli().gen_completions_to(env!("CARGO_PKG_NAME"), clap::Shell::Bash, out);
}

pub fn parse_args() -> Result<AppCfg, AppError> {
    let matches = build_cli().get_matches();
    cfg_from_matches(&matches)
}

pub fn parse_args_from<I, T>(args: I) -> Result<AppCfg, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli()
        .get_matches_from_safe(args)
        .map_err(|e| AppError::ArgParse(e.message))?;
    cfg_from_matches(&matches)
}

fn cfg_from_matches(matches: &clap::ArgMatches) -> Result<AppCfg, AppError> {
    let input_dir = PathBuf::from(
        matches
            .value_of_os(INPUT_DIR)
            .unwrap_or_else(|| OsStr::new(DEFAULT_INPUT_DIR)),
    );

    let output_path = match matches.value_of_os(OUTPUT_PATH) {
        Some(output_path) => PathBuf::from(output_path),
        None => default_output_path(),
    };

    let subtitle_ratio = match matches.value_of(SUBTITLE_RATIO) {
        Some(ratio) => match ratio.parse() {
            Ok(ratio) => ratio,
            Err(_e) => return Err(AppError::ParseSubtitleRatio(ratio.to_string())),
        },
        None => DEFAULT_SUBTITLE_RATIO,
    };

    let short_image_policy = matches
        .value_of(SHORT_IMAGES)
        .and_then(ShortImagePolicy::from_name)
        .unwrap_or_default();

    let merge_cfg = MergeCfg::new(input_dir, output_path)
        .subtitle_ratio(subtitle_ratio)
        .short_image_policy(short_image_policy);

    //bail before touching the filesystem if the ratio can never work.
    merge_cfg.validate()?;

    let verbosity = if matches.is_present(QUIET) {
        ReportVerbosity::Quiet
    } else if matches.is_present(VERBOSE) {
        ReportVerbosity::Verbose
    } else {
        ReportVerbosity::Default
    };

    Ok(AppCfg {
        merge_cfg,
        output_cfg: OutputCfg { verbosity },
        generate_bash_completions: matches.is_present(GENERATE_BASH_COMPLETIONS),
    })
}

pub fn default_output_path() -> PathBuf {
    let timestamp = chrono::Local::now().format(DEFAULT_OUTPUT_TIME_FORMAT);
    PathBuf::from(format!(
        "{}{}{}",
        DEFAULT_OUTPUT_PREFIX, timestamp, IMAGE_EXTENSION
    ))
}

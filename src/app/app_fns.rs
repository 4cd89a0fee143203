use std::error::Error;

use crate::{
    app::*,
    library::{merge_screenshots, MergeReport},
};

pub fn run_app() -> i32 {
    //Parse arguments and bail early if there is an error.
    let cfg = match parse_args() {
        Ok(cfg) => {
            configure_logs(cfg.output_cfg.verbosity);
            cfg
        }
        Err(fatal) => {
            //The logger is configured from the parsed arguments, so it isn't running yet.
            configure_logs(ReportVerbosity::Verbose);
            print_fatal_err(&fatal, ReportVerbosity::Verbose);
            return 1;
        }
    };

    if cfg.generate_bash_completions {
        write_bash_completions(&mut std::io::stdout());
        return 0;
    }

    //the summary is logged by the merge itself.
    match run_app_inner(&cfg) {
        Ok(_report) => 0,
        Err(fatal_error) => {
            print_fatal_err(&fatal_error, cfg.output_cfg.verbosity);
            1
        }
    }
}

fn run_app_inner(cfg: &AppCfg) -> Result<MergeReport, AppError> {
    let merge_cfg = &cfg.merge_cfg;

    debug!(
        target: "app",
        "Input dir: {}, output: {}, subtitle ratio: {}, short images: {:?}",
        merge_cfg.input_dir.display(),
        merge_cfg.output_path.display(),
        merge_cfg.subtitle_ratio,
        merge_cfg.short_image_policy
    );

    if merge_cfg.output_path.exists() {
        warn!(
            target: "app",
            "{} already exists and will be overwritten",
            merge_cfg.output_path.display()
        );
    }

    let (_canvas, report) = merge_screenshots(merge_cfg)?;
    Ok(report)
}

fn print_fatal_err(fatal_err: &AppError, verbosity: ReportVerbosity) {
    error!(target: "app-errorlog", "{}", fatal_err);

    if verbosity != ReportVerbosity::Quiet {
        let mut source: Option<&(dyn Error + 'static)> = fatal_err.source();
        while let Some(e) = source {
            error!(target: "app-errorlog", "    caused by: {}", e);
            source = e.source();
        }
    }
}

pub fn configure_logs(verbosity: ReportVerbosity) {
    use simplelog::*;

    let mut cfg = simplelog::ConfigBuilder::new();
    cfg.set_time_level(LevelFilter::Debug);

    let min_loglevel = match verbosity {
        ReportVerbosity::Quiet => LevelFilter::Warn,
        ReportVerbosity::Default => LevelFilter::Info,
        ReportVerbosity::Verbose => LevelFilter::Trace,
    };

    if let Err(e) = TermLogger::init(
        min_loglevel,
        cfg.build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to start logging: {}", e);
    }
}

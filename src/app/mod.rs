mod app_cfg;
mod app_fns;
mod arg_parse;
mod errors;

//exports
pub use app_cfg::{AppCfg, OutputCfg, ReportVerbosity};
pub use app_fns::{configure_logs, run_app};
pub use arg_parse::{build_cli, parse_args, parse_args_from, write_bash_completions};
pub use errors::AppError;

use crate::library::MergeCfg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportVerbosity {
    Quiet,
    Default,
    Verbose,
}

#[derive(Debug, Clone)]
pub struct OutputCfg {
    pub verbosity: ReportVerbosity,
}

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub merge_cfg: MergeCfg,
    pub output_cfg: OutputCfg,

    pub generate_bash_completions: bool,
}

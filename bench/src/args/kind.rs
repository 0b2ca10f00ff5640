use super::kinds::size_sweep::SizeSweepArgs;
use super::kinds::tune::TuneArgs;
use crate::config::BenchConfig;
use clap::Subcommand;
use transfer_bench_report::direction::TransferDirection;
use transfer_bench_report::sweep_kind::SweepKind;

#[derive(Subcommand, Debug)]
pub enum SweepKindCommand {
    #[command(
        about = "Upload throughput by file size",
        long_about = "Uploads one random file per size with a fixed transfer configuration",
        visible_alias = "up",
        verbatim_doc_comment
    )]
    Upload(SizeSweepArgs),

    #[command(
        about = "Download throughput by file size",
        long_about = "Downloads one existing object per size with a fixed transfer configuration",
        visible_alias = "down",
        verbatim_doc_comment
    )]
    Download(SizeSweepArgs),

    #[command(
        about = "Multipart tuning sweep",
        long_about = "Transfers one file with every combination of threshold, concurrency, chunksize and use_threads",
        visible_alias = "t",
        verbatim_doc_comment
    )]
    Tune(TuneArgs),

    #[command(about = "Print examples", visible_alias = "e", verbatim_doc_comment)]
    Examples,
}

impl SweepKindCommand {
    /// `None` for commands that do not run a sweep.
    pub fn as_simple_kind(&self) -> Option<SweepKind> {
        match self {
            SweepKindCommand::Upload(_) | SweepKindCommand::Download(_) => Some(SweepKind::FileSize),
            SweepKindCommand::Tune(_) => Some(SweepKind::Tuning),
            SweepKindCommand::Examples => None,
        }
    }

    /// Direction of the sweep once the configuration is resolved.
    pub fn direction(&self, config: &BenchConfig) -> TransferDirection {
        match self {
            SweepKindCommand::Upload(_) => TransferDirection::Upload,
            SweepKindCommand::Download(_) => TransferDirection::Download,
            SweepKindCommand::Tune(_) | SweepKindCommand::Examples => config.tune.direction,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SweepKindCommand::Upload(_) => "upload",
            SweepKindCommand::Download(_) => "download",
            SweepKindCommand::Tune(_) => "tune",
            SweepKindCommand::Examples => "examples",
        }
    }

    pub fn apply_overrides(&self, config: &mut BenchConfig) {
        match self {
            SweepKindCommand::Upload(args) | SweepKindCommand::Download(args) => {
                args.apply_overrides(&mut config.sweep)
            }
            SweepKindCommand::Tune(args) => args.apply_overrides(&mut config.tune),
            SweepKindCommand::Examples => {}
        }
    }

    pub fn command_parts(&self) -> Vec<String> {
        match self {
            SweepKindCommand::Upload(args) | SweepKindCommand::Download(args) => {
                args.command_parts()
            }
            SweepKindCommand::Tune(args) => args.command_parts(),
            SweepKindCommand::Examples => Vec::new(),
        }
    }
}

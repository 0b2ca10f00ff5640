use clap::Parser;
use figlet_rs::FIGfont;
use std::process::ExitCode;
use tracing::{error, info};
use transfer_bench::args::common::TransferBenchArgs;
use transfer_bench::args::examples::print_examples;
use transfer_bench::args::kind::SweepKindCommand;
use transfer_bench::benchmark_runner;
use transfer_bench::config::provider::ConfigProvider;
use transfer_bench::error::BenchError;
use transfer_bench::logging::Logging;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = TransferBenchArgs::parse();

    if let SweepKindCommand::Examples = args.sweep_kind {
        print_examples();
        return ExitCode::SUCCESS;
    }

    let mut logging = Logging::new();
    if let Err(error) = logging.init(args.quiet, &args.log_file) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    if !args.quiet {
        if let Ok(standard_font) = FIGfont::standard() {
            if let Some(figure) = standard_font.convert("Transfer Bench") {
                println!("{}", figure);
            }
        }
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("Benchmark failed: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &TransferBenchArgs) -> Result<(), BenchError> {
    let config = ConfigProvider::new(args.config.clone())
        .load_config(|config| args.apply_overrides(config))?;

    info!("Starting the benchmark...");
    benchmark_runner::run(args, &config).await?;
    info!("Finished the benchmark.");
    Ok(())
}

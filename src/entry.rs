use clap::Parser;
use tracing::{error, info};

use crate::app::{print_json_report, print_summary};
use crate::args::{OutputFormat, TesterArgs};
use crate::config::load_config;
use crate::error::AppResult;
use crate::http::run_load_test;

pub(crate) fn run() -> AppResult<()> {
    let args = TesterArgs::parse();

    crate::logger::init_logging(args.verbose, args.no_color);

    run_with_args(args).inspect_err(|err| error!("{}", err))
}

fn run_with_args(args: TesterArgs) -> AppResult<()> {
    let output_format = args.output_format;
    let no_color = args.no_color;
    let config = load_config(args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    info!("Starting the load test for {}...", config.url);
    let report = runtime.block_on(run_load_test(&config))?;

    match output_format {
        OutputFormat::Text => print_summary(&report, no_color),
        OutputFormat::Json => print_json_report(&report)?,
    }
    Ok(())
}

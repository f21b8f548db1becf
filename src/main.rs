use std::io;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use filetree::cli::{Cli, should_use_color};
use filetree::fs::RealFileSystem;
use filetree::prompt;
use filetree::report::{self, ReportRequest};
use filetree::sink::{ConsoleSink, LineSink};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("filetree: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let mut settings = cli.settings(&cwd);
    if cli.interactive {
        let stdin = io::stdin();
        settings = prompt::prompt_settings(&mut stdin.lock(), &mut io::stdout(), settings)?;
    }

    let request = ReportRequest {
        target: settings.target.clone(),
        destination: settings.destination().to_path_buf(),
        options: cli.walk_options(settings.sort_key),
        timestamp: Local::now().naive_local(),
    };

    let mut console = ConsoleSink::new(should_use_color(cli.color));
    let console_sink: Option<&mut dyn LineSink> = if settings.mirror_console {
        Some(&mut console)
    } else {
        None
    };

    let summary = report::generate(&RealFileSystem, &request, console_sink).await?;
    println!("Report saved to: {}", summary.report_path.display());
    Ok(())
}

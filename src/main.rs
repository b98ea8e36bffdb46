use anyhow::Context;
use clap::Parser;
use shortener::cli::Cli;
use shortener::client::ShortenClient;
use shortener::logging::{init_tracing, LogSink};
use shortener::submission::SubmissionController;
use shortener::ui::form::FormState;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;

    let sink = if cli.once.is_some() {
        LogSink::Stderr
    } else {
        LogSink::File(Cli::log_path(&config))
    };
    init_tracing(&config.logging.level, sink).context("Failed to set up logging")?;

    let client = ShortenClient::new(&config.service).context("Failed to build HTTP client")?;
    let controller = SubmissionController::new(client);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.once {
        Some(url) => {
            let state = runtime.block_on(controller.submit(FormState::default(), &url));
            match (state.result(), state.error()) {
                (Some(short_url), _) => {
                    println!("{short_url}");
                    Ok(())
                }
                (None, error) => {
                    anyhow::bail!("{}", error.unwrap_or(shortener::client::GENERIC_FAILURE))
                }
            }
        }
        None => {
            shortener::ui::runtime::run(&config, controller, runtime.handle().clone())?;
            Ok(())
        }
    }
}

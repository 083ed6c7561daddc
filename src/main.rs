//! Wiring & DI. Entry point: load config, bootstrap adapters, run the command.
//! No business logic here; text handling is delegated to TextService.

use chatfix::adapters::output::StdoutSink;
use chatfix::adapters::ui::TuiInputPort;
use chatfix::ports::{InputPort, OutputPort};
use chatfix::shared::{AppConfig, OutputFormat};
use chatfix::usecases::TextService;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chatfix")]
#[command(about = "Fix messy movie titles and parse exported chat lines")]
struct Cli {
    /// Output format for parsed lines (overrides CHATFIX_OUTPUT_FORMAT)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a title (words are joined with single spaces)
    Title {
        /// Treat the input as a JSON value; non-strings give an empty title
        #[arg(long)]
        json: bool,

        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Parse one `DD/MM/YYYY, HH:MM - Sender: Message` line
    Parse {
        /// Treat the input as a JSON value; non-strings are rejected
        #[arg(long)]
        json: bool,

        #[arg(allow_hyphen_values = true)]
        line: String,
    },

    /// Prompt for titles and lines until you quit (default)
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (cfg, config_error) = AppConfig::or_default_with_error(AppConfig::load());

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cfg.log_level_or_default().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(e) = config_error {
        warn!(error = %e, "using default configuration");
    }

    let format = cli.format.unwrap_or_else(|| cfg.output_format_or_default());
    debug!(%format, "output format selected");

    let output: Arc<dyn OutputPort> = Arc::new(StdoutSink::new(format));
    let service = Arc::new(TextService::new(output));

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Title { json, words } => {
            let raw = words.join(" ");
            let result = if json {
                service.fix_title_value(&parse_json_arg(&raw)?).await
            } else {
                service.fix_title(&raw).await
            };
            result.map_err(|e| anyhow::anyhow!("{}", e))?;
        }
        Command::Parse { json, line } => {
            let result = if json {
                service.parse_value(&parse_json_arg(&line)?).await
            } else {
                service.parse_line(&line).await
            };
            result.map_err(|e| anyhow::anyhow!("{}", e))?;
        }
        Command::Interactive => {
            info!("starting interactive session");
            let input_port: Arc<dyn InputPort> =
                Arc::new(TuiInputPort::new(Arc::clone(&service)));
            input_port
                .run()
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
        }
    }

    Ok(())
}

fn parse_json_arg(raw: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(raw).map_err(|e| anyhow::anyhow!("--json input is not valid JSON: {}", e))
}

use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use moodlist::{cli, config, error, server};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the interactive client
    Run(RunOptions),

    /// Serve the request handlers behind a local gateway
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RunOptions {
    /// Client config file with the gateway url (asked for when omitted)
    #[clap(long)]
    client_config: Option<PathBuf>,

    /// Spotify config file with client id, secret and redirect uri
    #[clap(long)]
    spotify_config: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Gateway config file; the process environment overrides its values
    #[clap(long)]
    config: Option<PathBuf>,

    /// Address to listen on, overrides SERVER_ADDRESS
    #[clap(long)]
    addr: Option<std::net::SocketAddr>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(opt) => {
            init_tracing("warn");
            cli::run(opt.client_config, opt.spotify_config).await;
        }
        Command::Serve(opt) => {
            init_tracing("info");
            let path = opt.config.unwrap_or_else(config::default_gateway_config);
            let mut gateway_config = match config::GatewayConfig::load(&path).await {
                Ok(c) => c,
                Err(e) => error!("Cannot load gateway configuration. Err: {}", e),
            };
            if let Some(addr) = opt.addr {
                gateway_config.addr = addr;
            }

            if let Err(e) = server::start_gateway_server(gateway_config).await {
                error!("Gateway server stopped. Err: {}", e);
            }
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

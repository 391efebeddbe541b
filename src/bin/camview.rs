use camview::{setup_tracing, AppConfig, AppResult, JpegViewer, Server};
use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use tokio::runtime;

#[derive(Parser)]
#[command(version)]
pub struct CommandLine {
    /// path to config file
    #[arg(short, long)]
    pub conf: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
    /// log level (v: info, vv: debug, vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Parser)]
pub enum Command {
    PrintConfig,
}

fn main() -> AppResult<()> {
    dotenv().ok();

    let commandline: CommandLine = CommandLine::parse();
    let config_path = commandline.conf.as_ref().map_or_else(
        || {
            let mut path = PathBuf::from("./");
            path.push("conf.toml");
            path
        },
        PathBuf::from,
    );
    let config = AppConfig::set_up_config(config_path)?;

    if let Some(Command::PrintConfig) = commandline.command {
        println!("{:#?}", config);
        return Ok(());
    }

    let default_filter = match commandline.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let _log_guard = setup_tracing(default_filter)?;

    // the protocol is one connection at a time; a single-threaded runtime
    // is all the server needs
    let rt = runtime::Builder::new_current_thread().enable_all().build()?;

    rt.block_on(async {
        let viewer = JpegViewer::new(&config.viewer);
        let mut server = Server::bind(&config.network, viewer).await?;
        server.run().await
    })
}

use clap::{CommandFactory, Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{get_route::GetRouteArgs, get_segment::GetSegmentArgs};

mod get_route;
mod get_segment;
mod output;
mod parsers;
mod provider_args;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Route a single pair of points
    #[command(visible_alias = "s")]
    Segment {
        #[command(flatten)]
        args: GetSegmentArgs,
    },
    /// Route an ordered list of stops and stitch the legs together
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: GetRouteArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Segment { args }) => get_segment::run(args).await?,
        Some(Commands::Route { args }) => get_route::run(args).await?,
        None => Cli::command().print_help()?,
    }

    Ok(())
}

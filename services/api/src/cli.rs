use crate::assess::{run_assessment, run_country_listing, AssessArgs, CatalogArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use uni_readiness::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "University Readiness Assessment",
    about = "Score a student profile against a university catalog and suggest Ambitious, Target and Safe universities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess a profile from the command line and print the report
    Assess(AssessArgs),
    /// List the countries available in the catalog
    Countries(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assessment(args),
        Command::Countries(args) => run_country_listing(args),
    }
}

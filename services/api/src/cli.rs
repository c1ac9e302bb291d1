use crate::demo::{run_demo, run_program_export, DemoArgs, ProgramExportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use prevention_sst::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Prevention Program Engine",
    about = "Generate and serve LMRSST prevention programs from the command line",
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
    /// Generate prevention programs without starting the service
    Program {
        #[command(subcommand)]
        command: ProgramCommand,
    },
    /// Run a CLI demo generating programs for sample establishments
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ProgramCommand {
    /// Export a Markdown program for one establishment or a full roster
    Export(ProgramExportArgs),
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
        Command::Program {
            command: ProgramCommand::Export(args),
        } => run_program_export(args),
        Command::Demo(args) => run_demo(args),
    }
}

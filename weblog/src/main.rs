use clap::{Parser, Subcommand};
use weblog_core::cli::{self, RunArgs, conf::ConfigCmd};
use weblog_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "weblog", version, about = "Weblog: web server access-log analytics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an access log and report every analysis
    Analyze {
        #[command(flatten)]
        args: RunArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse an access log and report line accounting only
    Parse {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let opts = Cli::parse();
    init_logging();

    let result = match opts.command {
        Command::Analyze { args, json } => cli::analyze::analyze(&args, json),
        Command::Parse { args } => cli::analyze::parse(&args),
        Command::Config { cmd } => cli::conf::run(cmd),
    };

    if let Err(e) = result {
        eprintln!("weblog error: {e:#}");
        std::process::exit(1);
    }
}

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use fretforge::config::{Config, ScoringWeights};
use fretforge::scorer::Scorer;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Analyze(cmd::analyze::AnalyzeArgs),
    Batch(cmd::batch::BatchArgs),
    Shapes(cmd::shapes::ShapesArgs),
}

impl Commands {
    fn config(&self) -> &Config {
        match self {
            Commands::Analyze(args) => &args.config,
            Commands::Batch(args) => &args.config,
            Commands::Shapes(args) => &args.config,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Commands::Analyze(_) => "analyze",
            Commands::Batch(_) => "batch",
            Commands::Shapes(_) => "shapes",
        }
    }
}

fn resolve_weights(cli: &Cli, sub_matches: &ArgMatches) -> ScoringWeights {
    let cli_weights = &cli.command.config().weights;
    let Some(path) = &cli.weights else {
        return cli_weights.clone();
    };

    info!("⚖️  Loading Weights from: {}", path);
    let mut file_weights = ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });
    file_weights.merge_from_cli(cli_weights, sub_matches);
    file_weights
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    let sub_matches = matches
        .subcommand_matches(cli.command.name())
        .unwrap_or_else(|| {
            error!("❌ Missing subcommand arguments");
            process::exit(2);
        });

    let weights = resolve_weights(&cli, sub_matches);
    let scorer = match Scorer::new(weights) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            error!("❌ FATAL ERROR INITIALIZING SCORER:");
            error!("   {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, scorer),
        Commands::Batch(args) => cmd::batch::run(args, scorer),
        Commands::Shapes(_) => {
            cmd::shapes::run(scorer);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

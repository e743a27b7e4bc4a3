use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use repogen::{
    FixtureGenerator, MutationPlan, RepogenConfig, RngSource, SystemRunner, TreeMutator,
};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "repogen")]
#[command(version, about = "test data and version-control activity generator", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// root directory to generate into (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    path: PathBuf,

    /// output format (json or human)
    #[arg(short, long, default_value = "human", global = true)]
    format: OutputFormat,

    /// log verbosity
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// generate structured service fixtures under .harness/orgs/<org>/services
    Fixtures {
        /// number of fixture files
        #[arg(short, long)]
        count: Option<usize>,

        /// seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// populate a working tree with random files and commit/push it
    Mutate {
        /// number of files to create
        #[arg(long)]
        files: Option<usize>,

        /// number of directories to spread files over
        #[arg(long)]
        dirs: Option<usize>,

        /// run the modify pass
        #[arg(long)]
        modify: bool,

        /// run the delete pass
        #[arg(long)]
        delete: bool,

        /// run the rename pass
        #[arg(long)]
        rename: bool,

        /// run the final modify pass
        #[arg(long)]
        final_modify: bool,

        /// run every mutation pass
        #[arg(long)]
        all: bool,

        /// skip pushing to the remote
        #[arg(long)]
        no_push: bool,

        /// remote to push to
        #[arg(long)]
        remote: Option<String>,

        /// branch to push
        #[arg(long)]
        branch: Option<String>,

        /// seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(&cli.log_level);
    debug!("Parsed CLI arguments: {cli:?}");

    let mut config = RepogenConfig::load_or_default(&cli.path);

    match cli.command {
        Commands::Fixtures { count, seed } => {
            if let Some(count) = count {
                config.fixtures.count = count;
            }
            config
                .fixtures
                .validate()
                .context("invalid [fixtures] configuration")?;
            handle_fixtures(&cli.path, &cli.format, &config, seed)?;
        }
        Commands::Mutate {
            files,
            dirs,
            modify,
            delete,
            rename,
            final_modify,
            all,
            no_push,
            remote,
            branch,
            seed,
        } => {
            if let Some(files) = files {
                config.mutator.file_count = files;
            }
            if let Some(dirs) = dirs {
                config.mutator.dir_count = dirs;
            }
            if let Some(remote) = remote {
                config.mutator.remote = remote;
            }
            if let Some(branch) = branch {
                config.mutator.branch = branch;
            }
            config
                .mutator
                .validate()
                .context("invalid [mutator] configuration")?;

            let plan = MutationPlan {
                modify: modify || all,
                delete: delete || all,
                rename: rename || all,
                final_modify: final_modify || all,
                push: !no_push,
            };
            handle_mutate(&cli.path, &cli.format, &config, &plan, seed)?;
        }
    }

    Ok(())
}

fn setup_tracing(log_level: &LogLevel) {
    if let Some(level) = log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn rng_for(seed: Option<u64>) -> RngSource {
    match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    }
}

fn handle_fixtures(
    path: &PathBuf,
    format: &OutputFormat,
    config: &RepogenConfig,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = rng_for(seed);
    let report = FixtureGenerator::new(&config.fixtures)
        .generate(path, &mut rng)
        .context("failed to generate fixtures")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!(
                "generated {} fixture files in {}",
                report.files.len(),
                report.services_dir.display()
            );
        }
    }

    Ok(())
}

fn handle_mutate(
    path: &PathBuf,
    format: &OutputFormat,
    config: &RepogenConfig,
    plan: &MutationPlan,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = rng_for(seed);
    let runner = SystemRunner::new(path);
    let report = TreeMutator::new(path, &config.mutator, &runner)
        .run(plan, &mut rng)
        .context("failed to populate working tree")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            for summary in &report.phases {
                println!("{}: {} files", summary.phase, summary.files);
            }
            for checkpoint in &report.checkpoints {
                let status = if checkpoint.succeeded() { "ok" } else { "failed" };
                println!("checkpoint '{}': {}", checkpoint.message, status);
            }
            if let Some(push) = &report.push {
                let status = if push.succeeded() { "ok" } else { "failed" };
                println!("{}: {}", push.command, status);
            }
            println!("tracked files: {}", report.tracked_files);
        }
    }

    Ok(())
}

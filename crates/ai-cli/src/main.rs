//! percept - learn and inspect agent decision trees.
//!
//! - `percept learn` - induce a tree from recorded examples
//! - `percept decide` - evaluate a tree against given facts
//! - `percept record` - append one labeled example
//! - `percept simulate` - run the enemy behavior tree and record what it does
//! - `percept init` - write a default config

use std::path::{Path, PathBuf};

use ai_core::{Action, Attribute, TrainingExample};
use ai_dt::{defaults, io as tree_io, learn_from_path, Id3Config};
use ai_tools::{CsvRecorder, ExampleSink, NullSink};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use ai_cli::config::CONFIG_PATH;
use ai_cli::{parse_fact, run_simulation, state_from_facts, LearnerConfig, SimConfig};

#[derive(Parser)]
#[command(name = "percept")]
#[command(about = "Decision trees learned from recorded agent behavior", version)]
struct Cli {
    /// Config file (defaults to .percept/config.yaml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn a decision tree from an example table
    Learn {
        /// Example table to learn from
        #[arg(long)]
        data: Option<PathBuf>,

        /// Candidate split attributes, comma separated
        #[arg(long, value_delimiter = ',')]
        attributes: Option<Vec<String>>,

        /// Split on any non-empty partition regardless of gain
        #[arg(long)]
        no_epsilon: bool,

        /// Where to write the learned tree
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the action a tree chooses for the given facts
    Decide {
        /// Tree file written by `learn`
        #[arg(long)]
        tree: Option<PathBuf>,

        /// Perception fact, e.g. `canSeeEnemy=true` (repeatable)
        #[arg(long = "fact", value_parser = parse_fact)]
        facts: Vec<(Attribute, bool)>,
    },

    /// Append one labeled example to the table
    Record {
        /// Perception fact, e.g. `enemyNear=1` (repeatable)
        #[arg(long = "fact", value_parser = parse_fact)]
        facts: Vec<(Attribute, bool)>,

        /// Action taken, by name (`FLEE_ENEMY`) or ordinal
        #[arg(long)]
        action: Action,

        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Run the enemy behavior tree and record one example per tick
    Simulate {
        #[arg(long, default_value_t = 1_000)]
        ticks: u64,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        data: Option<PathBuf>,

        /// Append to an existing table instead of starting a new one
        #[arg(long)]
        append: bool,
    },

    /// Write a default config
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let project_root = std::env::current_dir().context("Failed to get current directory")?;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Learn {
            data,
            attributes,
            no_epsilon,
            out,
        } => learn(
            load_config(config_path, &project_root)?,
            data,
            attributes,
            no_epsilon,
            out,
        ),
        Commands::Decide { tree, facts } => {
            decide(&load_config(config_path, &project_root)?, tree, &facts)
        }
        Commands::Record {
            facts,
            action,
            data,
        } => record(&load_config(config_path, &project_root)?, &facts, action, data),
        Commands::Simulate {
            ticks,
            seed,
            data,
            append,
        } => simulate(
            &load_config(config_path, &project_root)?,
            ticks,
            seed,
            data,
            append,
        ),
        Commands::Init => init_project(&project_root),
    }
}

fn load_config(path: Option<&Path>, project_root: &Path) -> Result<LearnerConfig> {
    LearnerConfig::discover(path, project_root)
}

fn learn(
    mut config: LearnerConfig,
    data: Option<PathBuf>,
    attributes: Option<Vec<String>>,
    no_epsilon: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    if let Some(data) = data {
        config.data_path = data;
    }
    if let Some(attributes) = attributes {
        config.attributes = Some(attributes.into_iter().map(Attribute::from).collect());
    }
    let mut options = config.learn_options();
    if no_epsilon {
        options = options.with_config(Id3Config::exhaustive());
    }

    let tree = learn_from_path(&config.data_path, &options);
    print!("{}", tree.render());
    info!(depth = tree.depth(), leaves = tree.leaf_count(), "learned tree");

    let out = out.unwrap_or(config.tree_path);
    tree_io::save(&tree, &out)?;
    info!(path = %out.display(), "tree saved");
    Ok(())
}

fn decide(config: &LearnerConfig, tree: Option<PathBuf>, facts: &[(Attribute, bool)]) -> Result<()> {
    let path = tree.unwrap_or_else(|| config.tree_path.clone());
    let tree = if path.exists() {
        tree_io::load(&path)?
    } else {
        warn!(
            path = %path.display(),
            data = %config.data_path.display(),
            "no saved tree; learning from data"
        );
        learn_from_path(&config.data_path, &config.learn_options())
    };

    let state = state_from_facts(&config.vocabulary(), facts);
    let action = tree.decide(&state);
    info!(state = %state, "decided");
    println!("{action}");
    Ok(())
}

fn record(
    config: &LearnerConfig,
    facts: &[(Attribute, bool)],
    action: Action,
    data: Option<PathBuf>,
) -> Result<()> {
    let path = data.unwrap_or_else(|| config.data_path.clone());
    let vocabulary = config.vocabulary();
    let example = TrainingExample::new(state_from_facts(&vocabulary, facts), action);

    let mut recorder = CsvRecorder::append(&path, vocabulary)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    recorder.record(&example.state, example.action);
    recorder.into_inner()?;
    info!(path = %path.display(), action = %action, "example recorded");
    Ok(())
}

fn simulate(
    config: &LearnerConfig,
    ticks: u64,
    seed: Option<u64>,
    data: Option<PathBuf>,
    append: bool,
) -> Result<()> {
    let path = data.unwrap_or_else(|| config.data_path.clone());
    let vocabulary = config.vocabulary();
    let opened = if append {
        CsvRecorder::append(&path, vocabulary.clone())
    } else {
        CsvRecorder::create(&path, vocabulary.clone())
    };
    let (sink, recording): (Box<dyn ExampleSink>, bool) = match opened {
        Ok(recorder) => (Box::new(recorder), true),
        Err(err) => {
            warn!(error = %err, "recording disabled");
            (Box::new(NullSink), false)
        }
    };

    let sim = SimConfig {
        ticks,
        seed: seed.unwrap_or(config.seed),
        ..SimConfig::default()
    };
    let mut report = run_simulation(&sim, &vocabulary, sink);
    report
        .sink
        .flush()
        .with_context(|| format!("Failed to record examples to {}", path.display()))?;

    println!("ticks: {}", report.ticks);
    for (action, count) in &report.action_counts {
        println!("{action}: {count}");
    }
    if recording {
        info!(path = %path.display(), "simulation recorded");
    }
    Ok(())
}

fn init_project(project_root: &Path) -> Result<()> {
    let config_path = project_root.join(CONFIG_PATH);
    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    if config_path.exists() {
        info!(path = %config_path.display(), "config already present");
    } else {
        let yaml = LearnerConfig::default().to_yaml()?;
        std::fs::write(&config_path, format!("# percept learner configuration\n\n{yaml}"))
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        info!(path = %config_path.display(), "config written");
    }

    println!("Initialized percept in {}", project_root.display());
    // The learner falls back to this tree until data is recorded.
    print!("{}", defaults::fallback_tree().render());
    Ok(())
}

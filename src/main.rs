/*!
# Moodtrack - A Personal Mood Journal

This file contains the main application flow: logging setup, configuration,
and dispatch of the subcommands to the library operations.

## Usage

```
moodtrack [OPTIONS] <COMMAND>

Commands:
  log        Log a mood entry (prompts for anything not given)
  trends     Show how often each mood was logged
  correlate  Show which activities occur with which moods
  stats      Show mood statistics
  streaks    Show positive-mood streaks
  export     Export the mood table
  seed       Fill an empty mood table with sample entries

Options:
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
      --log-level <LOG_LEVEL>    Log level filter (overrides RUST_LOG)
  -v, --verbose                  Print verbose output (debug logging)
  -h, --help                     Print help
  -V, --version                  Print version
```

## Configuration

See `moodtrack::config` for the `MOODTRACK_*` environment variables.
*/

use chrono::{Local, NaiveDate};
use clap::Parser;
use moodtrack::ai::{OllamaClient, SuggestionProvider};
use moodtrack::cli::{CliArgs, Commands, ExportArgs, LogArgs, SeedArgs};
use moodtrack::config::Config;
use moodtrack::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
};
use moodtrack::errors::AppResult;
use moodtrack::mood_core::{self, EntryDraft};
use moodtrack::ops;
use moodtrack::setup::{self, PromptOverwrite};
use moodtrack::store::{AddOutcome, EntryStore, Overwrite, OverwriteDecision, SeedOutcome};
use std::io;
use std::process;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(args: &CliArgs) {
    let level = match (&args.log_level, args.verbose) {
        (Some(level), _) => level.clone(),
        (None, true) => "debug".to_string(),
        (None, false) => DEFAULT_LOG_LEVEL.to_string(),
    };
    let filter = if args.log_level.is_some() || args.verbose {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if args.log_format == LOG_FORMAT_JSON {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}

/// The main entry point for the moodtrack application.
///
/// Any error is logged once here and turned into a non-zero exit status.
fn main() {
    let args = CliArgs::parse();
    init_tracing(&args);

    let correlation_id = uuid::Uuid::new_v4().to_string();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> AppResult<()> {
    debug!("CLI arguments: {:?}", args);

    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let store = EntryStore::from_config(&config);
    let today = Local::now().date_naive();

    if config.auto_seed && !matches!(args.command, Commands::Seed(_)) {
        let outcome =
            store.seed_sample_data(config.sample_entries, today, &mut rand::thread_rng())?;
        debug!("Auto-seed: {:?}", outcome);
    }

    match args.command {
        Commands::Log(log_args) => log(&store, &config, log_args, today),
        Commands::Trends => {
            println!("{}", ops::trends_report(&store.load_all()));
            Ok(())
        }
        Commands::Correlate => {
            println!("{}", ops::correlation_report(&store.load_all()));
            Ok(())
        }
        Commands::Stats => {
            println!("{}", ops::statistics_report(&store.load_all()));
            Ok(())
        }
        Commands::Streaks => {
            println!("{}", ops::streaks_report(&store.load_all(), today));
            Ok(())
        }
        Commands::Export(export_args) => export(&store, &config, export_args),
        Commands::Seed(seed_args) => seed(&store, &config, &seed_args, today),
    }
}

fn log(store: &EntryStore, config: &Config, args: LogArgs, today: NaiveDate) -> AppResult<()> {
    let date = args.parse_date().transpose()?.unwrap_or(today);

    // Reject bad flag values before asking for anything else.
    if let Some(mood) = &args.mood {
        mood_core::validate_mood(mood)?;
    }
    if let Some(activities) = &args.activities {
        mood_core::parse_activities(activities)?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mood = match args.mood.clone() {
        Some(mood) => mood,
        None => setup::prompt_mood(&mut input, &mut output)?,
    };
    let activities = match args.activities.clone() {
        Some(activities) => activities,
        None => setup::prompt_activities(&mut input, &mut output)?,
    };
    let notes = match args.notes.clone() {
        Some(notes) => notes,
        None => setup::prompt_notes(&mut input, &mut output)?,
    };
    drop(input);

    let draft = EntryDraft::new(mood, activities, notes);
    let mut decision: Box<dyn OverwriteDecision> = if args.yes {
        Box::new(Overwrite::Always)
    } else if args.no {
        Box::new(Overwrite::Never)
    } else {
        Box::new(PromptOverwrite::stdio())
    };

    let client = OllamaClient::new(&config.ollama_url, &config.chat_model);
    let suggester: Option<&dyn SuggestionProvider> = if args.no_suggest {
        None
    } else {
        Some(&client)
    };

    let report = ops::log_mood(store, suggester, &draft, date, &mut *decision)?;
    match &report.outcome {
        AddOutcome::Saved { replaced: true, .. } => println!("Entry replaced successfully."),
        AddOutcome::Saved { .. } => println!("Entry saved successfully."),
        AddOutcome::NotSaved { .. } => println!("Entry not saved."),
    }

    match &report.suggestion {
        Some(Ok(text)) => {
            println!("\n**Suggestions to Improve or Maintain Your Mood:**");
            println!("{}", text);
        }
        Some(Err(msg)) => println!("Error fetching suggestions: {}", msg),
        None => {}
    }
    if let Some(tip) = report.tip {
        println!("\n**Mood Improvement Tips:**");
        println!("{}", tip);
    }
    Ok(())
}

fn export(store: &EntryStore, config: &Config, args: ExportArgs) -> AppResult<()> {
    let target = args.output.unwrap_or_else(|| config.export_file());
    let count = store.export_to(&target)?;
    println!(
        "Data exported successfully to {} ({} entries).",
        target.display(),
        count
    );
    Ok(())
}

fn seed(store: &EntryStore, config: &Config, args: &SeedArgs, today: NaiveDate) -> AppResult<()> {
    let count = args.count.unwrap_or(config.sample_entries);
    let mut rng = rand::thread_rng();
    match store.seed_sample_data(count, today, &mut rng)? {
        SeedOutcome::Created(n) => println!(
            "Created {} and added {} sample entries.",
            store.path().display(),
            n
        ),
        SeedOutcome::Populated(n) => {
            println!("Added {} sample entries to {}.", n, store.path().display())
        }
        SeedOutcome::AlreadyPopulated(_) => println!(
            "{} already contains data. Sample data not added.",
            store.path().display()
        ),
    }
    Ok(())
}

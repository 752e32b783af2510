mod logging;
mod render;

use std::{
    io::{BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use {
    anyhow::Context,
    clap::{Parser, Subcommand},
    memorybox_config::MemoryBoxConfig,
    memorybox_memory::{MemoryConfig, MemoryError, MemoryManager},
    tracing::debug,
};

#[derive(Parser)]
#[command(name = "memorybox", version, about = "Remember short phrases and recall them by keyword")]
struct Cli {
    /// Path to a config file (default: <config dir>/memorybox.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database file, overriding the config file.
    #[arg(long, env = "MEMORYBOX_DB", global = true)]
    db: Option<PathBuf>,

    /// Log filter, e.g. `info` or `memorybox_memory=debug`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save a phrase. Use `-` to read it from stdin.
    Remember { words: Vec<String> },
    /// Find every saved phrase sharing a keyword with the query.
    Recall { words: Vec<String> },
    /// Show every saved phrase, oldest first.
    List,
    /// Show how many phrases are saved and where.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = memorybox_config::discover_and_load(cli.config.as_deref())?;
    let level = cli
        .log_level
        .clone()
        .or_else(|| config.logging.level.clone())
        .unwrap_or_else(|| "warn".into());
    logging::init(&level, cli.json_logs || config.logging.json);

    let db_path = resolve_db_path(cli.db.clone(), &config);
    debug!(db_path = %db_path.display(), "resolved database path");
    let manager = MemoryManager::open(MemoryConfig::with_db_path(&db_path))
        .await
        .with_context(|| format!("failed to open memory database at {}", db_path.display()))?;

    Ok(match run(&cli, &manager, &mut std::io::stdout()).await? {
        Outcome::Done => ExitCode::SUCCESS,
        Outcome::Declined => ExitCode::FAILURE,
    })
}

/// Whether the command did what was asked.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Done,
    /// Blank phrase; nothing was saved.
    Declined,
}

async fn run(
    cli: &Cli,
    manager: &MemoryManager,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let output = match &cli.command {
        Command::Remember { words } => {
            let text = phrase(words)?;
            match manager.remember(&text).await {
                Ok(record) if cli.json => serde_json::to_string_pretty(&record)? + "\n",
                Ok(record) => render::remembered(&record),
                Err(MemoryError::InvalidInput) => {
                    eprintln!("{}", render::NOT_CAUGHT);
                    return Ok(Outcome::Declined);
                },
                Err(e) => return Err(e).context("could not save memory"),
            }
        },
        Command::Recall { words } => {
            let query = phrase(words)?;
            let results = manager
                .recall(&query)
                .await
                .context("could not search memories")?;
            if cli.json {
                serde_json::to_string_pretty(&results)? + "\n"
            } else {
                render::recalled(&query, &results)
            }
        },
        Command::List => {
            let records = manager.list().await.context("could not list memories")?;
            if cli.json {
                serde_json::to_string_pretty(&records)? + "\n"
            } else {
                render::numbered(&records)
            }
        },
        Command::Status => {
            let status = manager.status().await.context("could not read status")?;
            if cli.json {
                serde_json::to_string_pretty(&status)? + "\n"
            } else {
                format!(
                    "memories: {}\ndatabase: {}\n",
                    status.total_memories,
                    status.db_path.display()
                )
            }
        },
    };

    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(Outcome::Done)
}

/// `--db` beats the config file, which beats the platform data dir.
fn resolve_db_path(flag: Option<PathBuf>, config: &MemoryBoxConfig) -> PathBuf {
    flag.or_else(|| config.memory.db_path.clone())
        .unwrap_or_else(memorybox_config::default_db_path)
}

/// Join positional words into one phrase; a lone `-` reads a line from stdin.
fn phrase(words: &[String]) -> anyhow::Result<String> {
    if let [only] = words
        && only == "-"
    {
        return read_line(std::io::stdin().lock());
    }
    Ok(words.join(" "))
}

fn read_line(mut reader: impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read phrase from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

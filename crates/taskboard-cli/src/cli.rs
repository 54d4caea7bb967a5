use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use taskboard_domain::Direction;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A staged task board kept in a local snapshot file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the board slot file (or set TASKBOARD_FILE env var)
    #[arg(long, global = true, value_name = "FILE", env = "TASKBOARD_FILE")]
    pub file: Option<PathBuf>,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE", env = "TASKBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the whole board
    Show,
    /// Task operations
    Task(TaskCommand),
    /// Tag operations
    Tag(TagCommand),
    /// Find tasks by name and tags
    Search(SearchArgs),
    /// Task counts per stage and completion summary
    Stats,
    /// Tasks with a due date, earliest first
    Due,
    /// Export the board snapshot
    Export(ExportArgs),
    /// Replace the board with a snapshot file
    Import(ImportArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Task commands
#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Append a new task to a stage
    Add {
        #[arg(long)]
        list: String,
    },
    /// Get a specific task
    Get {
        #[arg(long)]
        id: String,
    },
    /// Update task fields
    Update(TaskUpdateArgs),
    /// Delete a task
    Delete {
        #[arg(long)]
        list: String,
        #[arg(long)]
        id: String,
    },
    /// Move a task to the neighbouring stage
    Move {
        #[arg(long)]
        id: String,
        /// Stage the task is currently in
        #[arg(long)]
        from: String,
        /// left or right
        #[arg(long)]
        direction: Direction,
    },
}

#[derive(Args)]
pub struct TaskUpdateArgs {
    #[arg(long)]
    pub list: String,
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Due date (YYYY-MM-DD or RFC 3339)
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<String>,
    #[arg(long)]
    pub clear_due: bool,
}

// Tag commands
#[derive(Args)]
pub struct TagCommand {
    #[command(subcommand)]
    pub action: TagAction,
}

#[derive(Subcommand)]
pub enum TagAction {
    /// Add a tag to a task
    Add(TagArgs),
    /// Remove a tag from a task
    Delete(TagArgs),
    /// List every tag in use
    List,
}

#[derive(Args)]
pub struct TagArgs {
    #[arg(long)]
    pub list: String,
    #[arg(long)]
    pub task: String,
    #[arg(long)]
    pub tag: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Case-insensitive text to look for in task names
    #[arg(long, default_value = "")]
    pub query: String,
    /// Only tasks carrying at least one of these tags (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Snapshot file to import
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

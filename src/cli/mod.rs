#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::{CommandFactory as _, Parser, Subcommand};

use crate::config;
use crate::output::list;
use crate::task::model::{Status, Task};
use crate::task::store::TaskStore;

#[derive(Debug, Parser)]
#[command(name = "ttrack", version, about = "File-backed task tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),
    /// Change a task's description
    Update(UpdateArgs),
    /// Remove a task
    #[command(alias = "rm")]
    Delete(DeleteArgs),
    /// Set a task's status
    Mark(MarkArgs),
    /// List tasks, optionally filtered by status
    List(ListArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Task description
    pub description: String,
}

#[derive(Debug, Parser)]
pub struct UpdateArgs {
    /// Task ID
    pub id: u32,
    /// New description
    pub description: String,
}

#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Task ID
    pub id: u32,
}

#[derive(Debug, Parser)]
pub struct MarkArgs {
    /// Task ID
    pub id: u32,
    /// New status (todo | in-progress | done)
    pub status: String,
}

#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Only show tasks with this status
    pub status: Option<String>,
    /// Output in JSON format
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct CompletionArgs {
    pub shell: clap_complete::Shell,
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.cmd {
        Commands::Add(args) => cmd_add(&args),
        Commands::Update(args) => cmd_update(&args),
        Commands::Delete(args) => cmd_delete(&args),
        Commands::Mark(args) => cmd_mark(&args),
        Commands::List(args) => cmd_list(&args),
        Commands::Completion(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "ttrack", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn open_store() -> anyhow::Result<TaskStore> {
    let cfg = config::load()?;
    Ok(TaskStore::new(cfg.store_path()?))
}

fn cmd_add(args: &AddArgs) -> anyhow::Result<ExitCode> {
    let store = open_store()?;
    let id = store.add(&args.description)?;
    println!("Task added successfully with the ID: {id}");
    Ok(ExitCode::SUCCESS)
}

fn cmd_update(args: &UpdateArgs) -> anyhow::Result<ExitCode> {
    let store = open_store()?;
    store.update(args.id, &args.description)?;
    println!("Task with ID {} has been updated.", args.id);
    Ok(ExitCode::SUCCESS)
}

fn cmd_delete(args: &DeleteArgs) -> anyhow::Result<ExitCode> {
    let store = open_store()?;
    store.delete(args.id)?;
    println!("Task with ID: {} has been deleted.", args.id);
    Ok(ExitCode::SUCCESS)
}

fn cmd_mark(args: &MarkArgs) -> anyhow::Result<ExitCode> {
    // Validate the status before the store is touched, so a bad value
    // can never reach disk.
    let status: Status = args.status.parse()?;
    let store = open_store()?;
    store.mark(args.id, status)?;
    println!("Task with ID: {} has been updated to: {status}.", args.id);
    Ok(ExitCode::SUCCESS)
}

fn cmd_list(args: &ListArgs) -> anyhow::Result<ExitCode> {
    let filter: Option<Status> = args.status.as_deref().map(str::parse).transpose()?;
    let store = open_store()?;
    let tasks: Vec<Task> = store.list(filter)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(ExitCode::SUCCESS);
    }

    if tasks.is_empty() && store.list(None)?.is_empty() {
        println!("No tasks found. The list is empty.");
        return Ok(ExitCode::SUCCESS);
    }

    print!("{}", list::render(&tasks));
    Ok(ExitCode::SUCCESS)
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use sprig::areas::repository::Repository;
use sprig::artifacts::core::{PagerWriter, should_page};
use sprig::errors::RepositoryError;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive
const LOG_ENV: &str = "SPRIG_LOG";

#[derive(Parser)]
#[command(
    name = "sprig",
    version = "0.1.0",
    about = "A small single-user version control system",
    long_about = "sprig keeps snapshots of a working directory as commits, \
    with branches, a staging area and three-way merges. \
    Repository state lives in the .sprig directory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Create a new repository in the current directory",
        long_about = "This command creates the .sprig directory, the initial commit \
        and the main branch pointing at it."
    )]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        path: String,
    },
    #[command(name = "commit", about = "Record the staged changes as a new commit")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file, or stage its removal and delete it if tracked"
    )]
    Rm {
        #[arg(index = 1)]
        path: String,
    },
    #[command(name = "log", about = "Show the history of the current head")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working changes")]
    Status,
    #[command(
        name = "checkout",
        about = "Restore a file or switch branches",
        long_about = "checkout -- <file> restores a file from the head commit, \
        checkout <commit> -- <file> restores it from another commit, \
        checkout <branch> switches to a branch."
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name, or a commit id when a file is given")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        path: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the head commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "reset", about = "Move the current branch to a commit")]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;
    let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Init => repository.init().await?,
        Commands::Add { path } => repository.add(path).await?,
        Commands::Commit { message } => repository.commit(message).await?,
        Commands::Rm { path } => repository.rm(path).await?,
        Commands::Log => {
            with_pager(&repository, async { repository.log().await }).await?
        }
        Commands::GlobalLog => {
            with_pager(&repository, async { repository.global_log().await }).await?
        }
        Commands::Find { message } => repository.find(message).await?,
        Commands::Status => repository.status().await?,
        Commands::Checkout { target, path } => match (target, path) {
            (target, Some(path)) => repository.checkout_file(target.as_deref(), path).await?,
            (Some(branch), None) => repository.checkout_branch(branch).await?,
            (None, None) => return Err(RepositoryError::IncorrectOperands.into()),
        },
        Commands::Branch { name } => repository.branch(name).await?,
        Commands::RmBranch { name } => repository.rm_branch(name).await?,
        Commands::Reset { commit } => repository.reset(commit).await?,
        Commands::Merge { branch } => repository.merge(branch).await?,
    }

    Ok(())
}

/// Run a command with its output going through the pager when stdout is a
/// terminal
async fn with_pager(
    repository: &Repository,
    command: impl Future<Output = Result<()>>,
) -> Result<()> {
    if !should_page() {
        return command.await;
    }

    let pager = minus::Pager::new();
    let stdout = repository.replace_writer(Box::new(PagerWriter::new(pager.clone())));
    let result = command.await;
    repository.replace_writer(stdout);
    result?;

    minus::page_all(pager)?;
    Ok(())
}

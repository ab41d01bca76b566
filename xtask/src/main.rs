use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for the sprite sandbox")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand, Clone, Copy)]
enum Task {
    /// fmt, clippy, test, deny and doc in sequence
    Check,
    /// cargo fmt --check
    Fmt,
    /// clippy with warnings denied
    Clippy,
    /// Unit tests for every crate
    Test,
    /// cargo deny (licenses, bans, sources)
    Deny,
    /// rustdoc without dependencies
    Doc,
    /// Build the whole workspace
    Build,
    /// Launch the desktop sandbox with verbose logging
    Run,
}

impl Task {
    fn cargo_args(self) -> &'static [&'static str] {
        match self {
            Task::Check => &[],
            Task::Fmt => &["fmt", "--all", "--", "--check"],
            Task::Clippy => &[
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ],
            Task::Test => &["test", "--workspace"],
            Task::Deny => &["deny", "check", "licenses", "bans", "sources"],
            Task::Doc => &["doc", "--workspace", "--no-deps"],
            Task::Build => &["build", "--workspace"],
            Task::Run => &["run", "-p", "sandbox-desktop", "--", "--verbose"],
        }
    }

    fn expand(self) -> Vec<Task> {
        match self {
            Task::Check => vec![Task::Fmt, Task::Clippy, Task::Test, Task::Deny, Task::Doc],
            other => vec![other],
        }
    }
}

fn cargo(args: &[&str]) -> Result<()> {
    println!("==> cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {} failed ({status})", args[0]);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    for task in cli.command.expand() {
        cargo(task.cargo_args())?;
    }
    Ok(())
}

pub mod output;

use crate::config;
use crate::errors::Result;
use crate::git::{self, GitCli};
use crate::runner::ShellRunner;
use crate::stack::{CommandTemplate, StackFilter, StackWalker};
use clap::Parser;
use output::Output;
use std::path::PathBuf;
use tracing::{debug, warn};

const PLACEHOLDER_HELP: &str = "\
You can use placeholders in your command:
  * %P will be replaced by the previous, i.e. parent, branch name
  * %B will be replaced by the current branch name

Example:
  for-each-stacked feature1 git merge %P
      Goes to each branch and merges the changes from the parent
      branch into the child branch";

#[derive(Debug, Parser)]
#[command(name = "for-each-stacked")]
#[command(about = "Run a command on stacked git branches")]
#[command(version)]
#[command(after_help = PLACEHOLDER_HELP)]
pub struct Cli {
    /// Print every command instead of running it
    #[arg(long)]
    pub dryrun: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Settings file (defaults to ~/.for-each-stacked/config.json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Selects the stack: `feature3` walks feature3, feature4, ...; other
    /// prefixes match branch names by plain prefix
    pub branch_prefix: String,

    /// Command to run on every branch; tokens are joined with spaces
    #[arg(
        value_name = "CMD",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub cmd: Vec<String>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        self.setup_logging();

        let settings = config::load_settings(self.config.as_deref())?;
        if self.no_color {
            console::set_colors_enabled(false);
        }

        if self.dryrun {
            Output::info("running in dryrun mode");
        }
        Output::info(format!("prefix: {}", self.branch_prefix));

        let repo = git::get_current_repository()?;
        let info = repo.get_info()?;
        debug!(
            "Repository at {} on {}",
            info.path.display(),
            info.head_branch.as_deref().unwrap_or("<unknown>")
        );
        if info.is_dirty {
            warn!("Working tree has uncommitted changes; checkouts may fail");
        }

        let source = GitCli::new(settings.git.executable.clone());
        let mut runner = ShellRunner::new(self.dryrun)
            .with_shell(settings.shell.program.clone())
            .with_echo_prefix(settings.output.echo_prefix.clone());

        let filter = StackFilter::from_prefix(&self.branch_prefix);
        let template = CommandTemplate::from_args(&self.cmd);

        let summary = StackWalker::new(&source, &mut runner)
            .with_git(settings.git.executable.clone())
            .walk(&filter, &template)?;

        debug!(
            "Visited {} branches, ran {} commands, skipped {}",
            summary.branches.len(),
            summary.commands.len(),
            summary.skipped.len()
        );
        Ok(())
    }

    fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr);

        if self.no_color {
            subscriber.with_ansi(false).init();
        } else {
            subscriber.init();
        }
    }
}

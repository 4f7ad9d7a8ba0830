use crate::cli::output::Output;
use crate::errors::Result;
use crate::git::{checkout_command, BranchSource};
use crate::runner::CommandRunner;
use crate::stack::branch::sort_branches;
use crate::stack::filter::StackFilter;
use crate::stack::template::{CommandTemplate, Expansion};
use tracing::debug;

/// What happened during a completed walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Branches checked out, in stack order
    pub branches: Vec<String>,
    /// Expanded commands handed to the runner
    pub commands: Vec<String>,
    /// Branches whose command was skipped because it needed a parent
    pub skipped: Vec<String>,
}

/// Walks a stack of branches: checkout, expand, run, for each branch in order
pub struct StackWalker<'a> {
    source: &'a dyn BranchSource,
    runner: &'a mut dyn CommandRunner,
    git: String,
}

impl<'a> StackWalker<'a> {
    pub fn new(source: &'a dyn BranchSource, runner: &'a mut dyn CommandRunner) -> Self {
        Self {
            source,
            runner,
            git: "git".to_string(),
        }
    }

    /// Program used in the checkout command
    pub fn with_git<S: Into<String>>(mut self, git: S) -> Self {
        self.git = git.into();
        self
    }

    /// The sorted branches `filter` selects
    pub fn stack(&self, filter: &StackFilter) -> Result<Vec<String>> {
        let branches = self.source.local_branches()?;
        Ok(sort_branches(filter.select(branches)))
    }

    /// Run `template` on every branch of the stack.
    ///
    /// Stops at the first command that fails; later branches are not checked out.
    pub fn walk(&mut self, filter: &StackFilter, template: &CommandTemplate) -> Result<WalkSummary> {
        let stack = self.stack(filter)?;
        debug!("Stack for {:?}: {:?}", filter, stack);

        let mut summary = WalkSummary::default();
        let mut previous: Option<&str> = None;

        for branch in &stack {
            self.runner.run(&checkout_command(&self.git, branch))?;
            summary.branches.push(branch.clone());

            match template.expand(branch, previous) {
                Expansion::Expanded(command) => {
                    self.runner.run(&command)?;
                    summary.commands.push(command);
                }
                Expansion::MissingParent(unexpanded) => {
                    Output::info(format!(
                        "Failed to expand command on branch {branch}, skipping ({unexpanded})"
                    ));
                    summary.skipped.push(branch.clone());
                }
            }

            previous = Some(branch.as_str());
        }

        Ok(summary)
    }
}

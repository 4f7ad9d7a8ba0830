use crate::stack::branch::{BranchName, StackNumber};
use std::cmp::Ordering;

/// Decides which local branches belong to the stack named by a prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackFilter {
    /// Same textual prefix, number at or above the starting number
    FromNumber { prefix: String, start: StackNumber },
    /// Plain string-prefix match
    StartsWith(String),
}

impl StackFilter {
    pub fn from_prefix(branch_prefix: &str) -> Self {
        match BranchName::parse(branch_prefix) {
            BranchName::Numbered { prefix, number, .. } => StackFilter::FromNumber {
                prefix,
                start: number,
            },
            BranchName::Plain(prefix) => StackFilter::StartsWith(prefix),
        }
    }

    pub fn matches(&self, branch: &str) -> bool {
        match self {
            StackFilter::StartsWith(prefix) => branch.starts_with(prefix.as_str()),
            StackFilter::FromNumber { prefix, start } => match BranchName::parse(branch) {
                BranchName::Numbered {
                    prefix: branch_prefix,
                    number,
                    ..
                } => branch_prefix == *prefix && number.value_cmp(start) != Ordering::Less,
                BranchName::Plain(_) => false,
            },
        }
    }

    /// Keep the branches that belong to the stack, in their original order
    pub fn select<I, S>(&self, branches: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        branches
            .into_iter()
            .map(Into::into)
            .filter(|branch| self.matches(branch))
            .collect()
    }
}

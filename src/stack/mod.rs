//! Stack traversal
//!
//! This module implements the stack walk:
//! - Branch name decomposition and numeric-aware ordering
//! - Selecting the branches that belong to a stack
//! - Placeholder expansion for the per-branch command
//! - The checkout / expand / run loop

pub mod branch;
pub mod filter;
pub mod template;
pub mod walker;

pub use branch::{sort_branches, BranchName, StackNumber};
pub use filter::StackFilter;
pub use template::{CommandTemplate, Expansion};
pub use walker::{StackWalker, WalkSummary};

/// Replaced with the previous (parent) branch
pub const PARENT_PLACEHOLDER: &str = "%P";
/// Replaced with the current branch
pub const BRANCH_PLACEHOLDER: &str = "%B";

/// The user's command, joined once from its tokens and never re-split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    template: String,
}

/// Outcome of expanding a template for one branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    Expanded(String),
    /// The template needs `%P` but the branch has no parent; carries the template unchanged
    MissingParent(String),
}

impl Expansion {
    pub fn is_expanded(&self) -> bool {
        matches!(self, Expansion::Expanded(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Expansion::Expanded(command) | Expansion::MissingParent(command) => command,
        }
    }

    pub fn into_parts(self) -> (String, bool) {
        match self {
            Expansion::Expanded(command) => (command, true),
            Expansion::MissingParent(command) => (command, false),
        }
    }
}

impl CommandTemplate {
    pub fn new<S: Into<String>>(template: S) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Join command tokens with single spaces
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        Self::new(
            args.iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    pub fn needs_parent(&self) -> bool {
        self.template.contains(PARENT_PLACEHOLDER)
    }

    pub fn expand(&self, current: &str, previous: Option<&str>) -> Expansion {
        let with_parent = if self.needs_parent() {
            match previous {
                Some(parent) => self.template.replace(PARENT_PLACEHOLDER, parent),
                None => return Expansion::MissingParent(self.template.clone()),
            }
        } else {
            self.template.clone()
        };

        Expansion::Expanded(with_parent.replace(BRANCH_PLACEHOLDER, current))
    }
}

impl std::fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template)
    }
}

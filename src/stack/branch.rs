use std::cmp::Ordering;
use std::fmt;

/// The numeric run of a branch name, compared by value.
///
/// Kept as its digit string so arbitrarily long runs never overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackNumber {
    digits: String,
}

impl StackNumber {
    pub(crate) fn new(digits: &str) -> Self {
        Self {
            digits: digits.to_string(),
        }
    }

    /// Digits with leading zeros stripped ("0" for an all-zero run)
    fn significant(&self) -> &str {
        let trimmed = self.digits.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }

    /// The digits exactly as they appear in the branch name
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Compare by numeric value
    pub fn value_cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant(), other.significant());
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

/// A branch name, decomposed when it looks like `<prefix><number><suffix>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchName {
    Numbered {
        raw: String,
        prefix: String,
        number: StackNumber,
        suffix: String,
    },
    Plain(String),
}

impl BranchName {
    /// Split `name` at the first digit run that follows a non-digit character.
    ///
    /// Everything before that run (leading digits included) is the prefix,
    /// and whatever follows it is the suffix. Names with no such run stay `Plain`.
    pub fn parse(name: &str) -> Self {
        let text_start = match name.find(|c: char| !c.is_ascii_digit()) {
            Some(idx) => idx,
            None => return BranchName::Plain(name.to_string()),
        };
        let digits_start = match name[text_start..].find(|c: char| c.is_ascii_digit()) {
            Some(offset) => text_start + offset,
            None => return BranchName::Plain(name.to_string()),
        };

        let rest = &name[digits_start..];
        let digits_len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());

        BranchName::Numbered {
            raw: name.to_string(),
            prefix: name[..digits_start].to_string(),
            number: StackNumber::new(&rest[..digits_len]),
            suffix: rest[digits_len..].to_string(),
        }
    }

    /// The full, unmodified branch name
    pub fn as_str(&self) -> &str {
        match self {
            BranchName::Numbered { raw, .. } => raw,
            BranchName::Plain(raw) => raw,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            BranchName::Numbered { raw, .. } => raw,
            BranchName::Plain(raw) => raw,
        }
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Ord for BranchName {
    // Numbered names come first, ordered by (prefix, number, suffix) with the
    // raw name as a tie-break; plain names follow in string order.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                BranchName::Numbered {
                    raw: raw_a,
                    prefix: prefix_a,
                    number: number_a,
                    suffix: suffix_a,
                },
                BranchName::Numbered {
                    raw: raw_b,
                    prefix: prefix_b,
                    number: number_b,
                    suffix: suffix_b,
                },
            ) => prefix_a
                .cmp(prefix_b)
                .then_with(|| number_a.value_cmp(number_b))
                .then_with(|| suffix_a.cmp(suffix_b))
                .then_with(|| raw_a.cmp(raw_b)),
            (BranchName::Numbered { .. }, BranchName::Plain(_)) => Ordering::Less,
            (BranchName::Plain(_), BranchName::Numbered { .. }) => Ordering::Greater,
            (BranchName::Plain(a), BranchName::Plain(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for BranchName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort branch names into stack order, so `branch2` comes before `branch10`.
///
/// Names are returned unchanged, only reordered.
pub fn sort_branches<I, S>(branches: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed: Vec<BranchName> = branches
        .into_iter()
        .map(|b| BranchName::parse(b.as_ref()))
        .collect();
    parsed.sort();
    parsed.into_iter().map(BranchName::into_string).collect()
}

use std::fmt::Display;

/// A line of a clinic listing that doesn't look like `<name>: <entry>`.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InvalidListingLine {
    /// Line number, starting from 1
    pub line: usize,
    pub content: String,
}

impl Display for InvalidListingLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid listing line {}: expected `<name>: <opening hours>`, found `{}`",
            self.line, self.content,
        )
    }
}

impl std::error::Error for InvalidListingLine {}

use std::fmt;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
    Parser(pest::error::Error<Rule>),
    MissingToken { position: usize },
    UnmappedWeekday(String),
    InvalidHourRange { start: u8, end: u8 },
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(pest_err: pest::error::Error<Rule>) -> Self {
        Self::Parser(pest_err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parser(pest_err) => write!(f, "{}", pest_err),
            Self::MissingToken { position } => {
                write!(f, "missing token at position {}", position)
            }
            Self::UnmappedWeekday(token) => write!(f, "unknown week day `{}`", token),
            Self::InvalidHourRange { .. } => {
                write!(f, "the startHour shouldn't be greater than the endHour")
            }
        }
    }
}

impl std::error::Error for Error {}

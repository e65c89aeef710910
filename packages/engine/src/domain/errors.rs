// Errors raised while reading input and building caves.

use std::error::Error;
use std::fmt;

use super::geometry::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A vertex token without the `x,y` separator
    MissingComma(String),
    InvalidNumber(String),
    EmptyPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based input line
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::MissingComma(token) => {
                write!(f, "line {}: expected `x,y`, got `{}`", self.line, token)
            }
            ParseErrorKind::InvalidNumber(raw) => {
                write!(f, "line {}: invalid coordinate `{}`", self.line, raw)
            }
            ParseErrorKind::EmptyPath => write!(f, "line {}: rock path has no vertices", self.line),
        }
    }
}

impl Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaveError {
    Parse(ParseError),
    /// Rock segments must be horizontal or vertical
    DiagonalSegment { start: Point, end: Point },
    InvalidSettings(String),
    /// Rock coordinates put the cave outside the addressable range
    TooLarge(String),
}

impl fmt::Display for CaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaveError::Parse(e) => write!(f, "parse error: {}", e),
            CaveError::DiagonalSegment { start, end } => {
                write!(f, "rock segment {} -> {} is not axis-aligned", start, end)
            }
            CaveError::InvalidSettings(msg) => write!(f, "invalid cave settings: {}", msg),
            CaveError::TooLarge(msg) => write!(f, "cave too large: {}", msg),
        }
    }
}

impl Error for CaveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CaveError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for CaveError {
    fn from(e: ParseError) -> Self {
        CaveError::Parse(e)
    }
}

//! Input - rock path parsing
//!
//! One formation per line: `x,y` vertices joined by ` -> `.
//! Blank lines are skipped; everything else must parse.

use crate::core::utils::seq::split_on;

use super::errors::{ParseError, ParseErrorKind};
use super::geometry::{Point, RockPath};

const ARROW: &str = "->";

pub fn parse_paths(input: &str) -> Result<Vec<RockPath>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_path(line).map_err(|kind| ParseError { line: idx + 1, kind }))
        .collect()
}

/// Parse a single line. Whitespace inside a vertex (`498, 4`) is tolerated.
pub fn parse_path(line: &str) -> Result<RockPath, ParseErrorKind> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let path = split_on(&tokens, |_, t| *t == ARROW)
        .into_iter()
        .map(|vertex| parse_point(&vertex.concat()))
        .collect::<Result<RockPath, _>>()?;

    if path.is_empty() {
        return Err(ParseErrorKind::EmptyPath);
    }
    Ok(path)
}

fn parse_point(token: &str) -> Result<Point, ParseErrorKind> {
    let (x, y) = token
        .split_once(',')
        .ok_or_else(|| ParseErrorKind::MissingComma(token.to_string()))?;
    Ok(Point::new(parse_coord(x)?, parse_coord(y)?))
}

fn parse_coord(raw: &str) -> Result<i32, ParseErrorKind> {
    raw.trim()
        .parse()
        .map_err(|_| ParseErrorKind::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_lines() {
        let paths = parse_paths("498,4 -> 498,6 -> 496,6\n503,4 -> 502,4 -> 502,9 -> 494,9\n").unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0], vec![Point::new(498, 4), Point::new(498, 6), Point::new(496, 6)]);
        assert_eq!(paths[1].len(), 4);
        assert_eq!(paths[1][3], Point::new(494, 9));
    }

    #[test]
    fn skips_blank_lines_and_keeps_line_numbers() {
        let err = parse_paths("1,1 -> 1,2\n\n  \n3,x -> 3,4").unwrap_err();
        assert_eq!(err.line, 4);
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber("x".to_string()));
    }

    #[test]
    fn tolerates_spaces_inside_vertices() {
        let path = parse_path("498, 4 -> 498 ,6").unwrap();
        assert_eq!(path, vec![Point::new(498, 4), Point::new(498, 6)]);
    }

    #[test]
    fn single_vertex_line_is_a_path() {
        assert_eq!(parse_path("7,8").unwrap(), vec![Point::new(7, 8)]);
    }

    #[test]
    fn rejects_missing_comma() {
        let err = parse_path("498 4 -> 498,6");
        // "498" and "4" land in the same vertex group and concatenate to "4984"
        assert_eq!(err, Err(ParseErrorKind::MissingComma("4984".to_string())));
    }

    #[test]
    fn arrows_only_is_empty() {
        assert_eq!(parse_path("-> ->"), Err(ParseErrorKind::EmptyPath));
    }

    #[test]
    fn error_message_names_the_line() {
        let err = parse_paths("1,2 -> 3").unwrap_err();
        assert_eq!(err.to_string(), "line 1: expected `x,y`, got `3`");
    }
}

//! Tree reference parser implementation using nom.
//!
//! A record is a single line of the MeSH tree file:
//!
//! ```text
//! <heading>;<segment>.<segment>. … .<segment>
//! ```
//!
//! Exactly one `;` separates the heading from the tree number. Neither the
//! heading nor the segments are validated beyond that.

use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};

use crate::error::{MeshError, MeshResult};
use crate::reference::TreeReference;

/// Parse a single tree record line.
///
/// # Arguments
/// * `line` - The raw record, without its line terminator
///
/// # Returns
/// The parsed reference, or [`MeshError::Format`] carrying the line if it
/// does not contain exactly one `;`.
///
/// # Examples
///
/// ```rust
/// use mesh_tree::parse_reference;
///
/// let reference = parse_reference("Herpes Zoster;C01.925.256.466.930.750").unwrap();
/// assert_eq!(reference.heading, "Herpes Zoster");
/// assert_eq!(reference.path, ["C01", "925", "256", "466", "930", "750"]);
///
/// assert!(parse_reference("Herpes Zoster").is_err());
/// assert!(parse_reference("Herpes;Zoster;C01").is_err());
/// ```
pub fn parse_reference(line: &str) -> MeshResult<TreeReference> {
    match all_consuming(tree_reference)(line) {
        Ok((_, reference)) => Ok(reference),
        Err(_) => Err(MeshError::format(line)),
    }
}

fn tree_reference(input: &str) -> IResult<&str, TreeReference> {
    map(
        separated_pair(heading, char(';'), tree_number),
        |(heading, path)| TreeReference::new(heading, path),
    )(input)
}

fn heading(input: &str) -> IResult<&str, &str> {
    take_till(|c| c == ';')(input)
}

fn tree_number(input: &str) -> IResult<&str, Vec<String>> {
    separated_list1(char('.'), map(segment, str::to_string))(input)
}

fn segment(input: &str) -> IResult<&str, &str> {
    take_till(|c| c == '.' || c == ';')(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let r = parse_reference("A;1").unwrap();
        assert_eq!(r.heading, "A");
        assert_eq!(r.path, ["1"]);
    }

    #[test]
    fn test_parse_multi_segment() {
        let r = parse_reference("Neuralgia, Postherpetic;C10.668.829.500.675").unwrap();
        assert_eq!(r.heading, "Neuralgia, Postherpetic");
        assert_eq!(r.path, ["C10", "668", "829", "500", "675"]);
    }

    #[test]
    fn test_heading_is_not_trimmed_or_lowercased() {
        let r = parse_reference("  Mixed Case ;D01").unwrap();
        assert_eq!(r.heading, "  Mixed Case ");
    }

    #[test]
    fn test_round_trip_line() {
        for line in [
            "A;1",
            "Body Regions;A01",
            "Abdomen;A01.923.047",
            "Neuralgia, Postherpetic;C10.668.829.500.675",
        ] {
            let r = parse_reference(line).unwrap();
            assert_eq!(r.to_string(), line);
            assert_eq!(r.path_string(), line.split_once(';').unwrap().1);
        }
    }

    #[test]
    fn test_missing_separator_is_error() {
        let err = parse_reference("X").unwrap_err();
        assert_eq!(err.line(), Some("X"));
    }

    #[test]
    fn test_extra_separator_is_error() {
        let err = parse_reference("A;1;2").unwrap_err();
        assert_eq!(err.line(), Some("A;1;2"));
    }

    #[test]
    fn test_empty_line_is_error() {
        assert!(parse_reference("").is_err());
    }

    #[test]
    fn test_empty_segments_are_accepted() {
        let r = parse_reference("A;").unwrap();
        assert_eq!(r.path, [""]);

        let r = parse_reference("A;1..2").unwrap();
        assert_eq!(r.path, ["1", "", "2"]);
    }

    #[test]
    fn test_empty_heading_is_accepted() {
        let r = parse_reference(";C01").unwrap();
        assert_eq!(r.heading, "");
        assert_eq!(r.path, ["C01"]);
    }
}

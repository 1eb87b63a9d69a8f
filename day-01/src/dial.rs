use miette::{Diagnostic, SourceSpan};
use nom::{
    branch::alt,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, value},
    sequence::pair,
    IResult,
};
use thiserror::Error;

/// Number of clicks on the dial, numbered `0..DIAL_SIZE`.
pub const DIAL_SIZE: i64 = 100;
/// The dial always starts pointing here.
pub const DIAL_START: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub direction: Direction,
    pub distance: u32,
}

impl Rotation {
    pub fn new(direction: Direction, distance: u32) -> Self {
        Self {
            direction,
            distance,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse rotation on line {line}")]
#[diagnostic(
    code(day01::parse_error),
    help("rotations look like `L68` or `R14`")
)]
pub struct ParseError {
    line: usize,
    #[source_code]
    src: String,
    #[label("here")]
    span: SourceSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: i64,
}

impl Default for Dial {
    fn default() -> Self {
        Self::new(DIAL_START)
    }
}

impl Dial {
    pub fn new(position: i64) -> Self {
        Self {
            position: position.rem_euclid(DIAL_SIZE),
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn is_at_zero(&self) -> bool {
        self.position == 0
    }

    /// Turns the dial and returns how many clicks landed on 0 on the way,
    /// counting the final resting click but not the starting one.
    pub fn turn(&mut self, rotation: Rotation) -> i64 {
        let start = self.position;
        let distance = i64::from(rotation.distance);

        let (end, zero_hits) = match rotation.direction {
            Direction::Right => (
                start + distance,
                (start + distance).div_euclid(DIAL_SIZE) - start.div_euclid(DIAL_SIZE),
            ),
            Direction::Left => (
                start - distance,
                (start - 1).div_euclid(DIAL_SIZE) - (start - distance - 1).div_euclid(DIAL_SIZE),
            ),
        };

        self.position = end.rem_euclid(DIAL_SIZE);
        zero_hits
    }
}

// region: nom parser
fn direction(input: &str) -> IResult<&str, Direction> {
    alt((
        value(Direction::Left, char('L')),
        value(Direction::Right, char('R')),
    ))(input)
}

fn distance(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(input)
}

fn rotation(input: &str) -> IResult<&str, Rotation> {
    let (input, (direction, distance)) = pair(direction, distance)(input)?;
    Ok((input, Rotation::new(direction, distance)))
}

/// Parses one rotation per line. Blank lines are skipped.
pub fn parse_rotations(input: &str) -> Result<Vec<Rotation>, ParseError> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            all_consuming(rotation)(line)
                .map(|(_, rotation)| rotation)
                .map_err(|_| ParseError {
                    line: line_no,
                    src: line.to_string(),
                    span: (0, line.len()).into(),
                })
        })
        .collect()
}
// endregion

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_rotations() -> miette::Result<()> {
        let input = "L68\nR48\n\nL5\n";
        assert_eq!(
            vec![
                Rotation::new(Direction::Left, 68),
                Rotation::new(Direction::Right, 48),
                Rotation::new(Direction::Left, 5),
            ],
            parse_rotations(input)?
        );
        Ok(())
    }

    #[rstest]
    #[case("X12")]
    #[case("L")]
    #[case("R-4")]
    #[case("L12abc")]
    #[case("R4294967296")]
    #[case("R9223372036854775807")]
    fn test_parse_rejects_malformed(#[case] line: &str) {
        assert!(parse_rotations(line).is_err());
    }

    #[test]
    fn test_parse_largest_distance() -> miette::Result<()> {
        let rotations = parse_rotations("L4294967295")?;
        assert_eq!(vec![Rotation::new(Direction::Left, u32::MAX)], rotations);

        let mut dial = Dial::default();
        assert_eq!(42_949_673, dial.turn(rotations[0]));
        assert_eq!(55, dial.position());
        Ok(())
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse_rotations("L1\nR2\nQ3").unwrap_err();
        assert_eq!(3, err.line);
    }

    #[rstest]
    #[case(50, Rotation::new(Direction::Left, 68), 82, 1)]
    #[case(82, Rotation::new(Direction::Left, 30), 52, 0)]
    #[case(52, Rotation::new(Direction::Right, 48), 0, 1)]
    #[case(0, Rotation::new(Direction::Left, 5), 95, 0)]
    #[case(0, Rotation::new(Direction::Right, 100), 0, 1)]
    #[case(50, Rotation::new(Direction::Right, 1000), 50, 10)]
    #[case(50, Rotation::new(Direction::Left, 150), 0, 2)]
    #[case(50, Rotation::new(Direction::Right, 0), 50, 0)]
    fn test_turn(
        #[case] start: i64,
        #[case] rotation: Rotation,
        #[case] end: i64,
        #[case] zero_hits: i64,
    ) {
        let mut dial = Dial::new(start);
        assert_eq!(zero_hits, dial.turn(rotation));
        assert_eq!(end, dial.position());
    }

    #[test]
    fn test_default_dial() {
        assert_eq!(DIAL_START, Dial::default().position());
    }
}

use miette::{Diagnostic, SourceSpan};
use nom::{
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res, opt},
    multi::separated_list0,
    sequence::{separated_pair, terminated},
    IResult,
};
use num_bigint::BigUint;
use thiserror::Error;

/// Inclusive range of product IDs. `start <= end` is not checked; a
/// reversed range simply contains nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub start: BigUint,
    pub end: BigUint,
}

impl Range {
    pub fn new(start: impl Into<BigUint>, end: impl Into<BigUint>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn contains(&self, id: &BigUint) -> bool {
        &self.start <= id && id <= &self.end
    }
}

/// Ranges in input order. Overlaps are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<Range>,
}

impl RangeSet {
    pub fn new(ranges: Vec<Range>) -> Self {
        Self { ranges }
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Range> {
        self.ranges.iter()
    }

    /// Largest upper bound across all ranges, or zero when there are none.
    pub fn max_id(&self) -> BigUint {
        self.ranges
            .iter()
            .map(|range| &range.end)
            .max()
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains(&self, id: &BigUint) -> bool {
        self.ranges.iter().any(|range| range.contains(id))
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse ID ranges")]
#[diagnostic(
    code(day02::parse_error),
    help("expected `start-end` pairs separated by commas, e.g. `11-22,95-115`")
)]
pub struct ParseError {
    #[source_code]
    src: String,
    #[label("this entry is malformed")]
    span: SourceSpan,
}

// region: nom parser
fn id(input: &str) -> IResult<&str, BigUint> {
    map_res(digit1, |digits: &str| digits.parse::<BigUint>())(input)
}

fn range(input: &str) -> IResult<&str, Range> {
    map(separated_pair(id, char('-'), id), |(start, end)| Range {
        start,
        end,
    })(input)
}

fn range_list(input: &str) -> IResult<&str, Vec<Range>> {
    terminated(separated_list0(char(','), range), opt(char(',')))(input)
}

/// Parses `a-b,c-d,...`. Surrounding whitespace and one trailing comma are
/// tolerated; anything else that is not a range is an error.
pub fn parse_ranges(input: &str) -> Result<RangeSet, ParseError> {
    let input = input.trim();

    match all_consuming(range_list)(input) {
        Ok((_, ranges)) => Ok(RangeSet::new(ranges)),
        Err(err) => {
            let rest = match err {
                nom::Err::Error(e) | nom::Err::Failure(e) => e.input,
                nom::Err::Incomplete(_) => "",
            };
            // widen to the whole comma-delimited entry
            let failed_at = input.len() - rest.len();
            let offset = input[..failed_at].rfind(',').map_or(0, |comma| comma + 1);
            let entry = &input[offset..];
            let len = entry.find(',').unwrap_or(entry.len());
            Err(ParseError {
                src: input.to_string(),
                span: (offset, len).into(),
            })
        }
    }
}
// endregion

use crate::{
    candidates::{sum_invalid_ids, RepeatPolicy},
    ranges::parse_ranges,
};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let ranges = parse_ranges(input)?;
    let total = sum_invalid_ids(&ranges, RepeatPolicy::Twice);
    Ok(total.to_string())
}

use crate::bank::total_joltage;

/// Batteries to switch on in every bank.
pub const PART1_DIGITS: usize = 2;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let total = total_joltage(input, PART1_DIGITS)?;
    Ok(total.to_string())
}

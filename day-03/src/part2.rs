use crate::bank::total_joltage;

/// Batteries to switch on in every bank.
pub const PART2_DIGITS: usize = 12;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let total = total_joltage(input, PART2_DIGITS)?;
    Ok(total.to_string())
}

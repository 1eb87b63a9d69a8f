use tracing::debug;

use crate::dial::{parse_rotations, Dial};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let rotations = parse_rotations(input)?;

    let mut dial = Dial::default();
    let mut zero_count = 0;
    for rotation in rotations {
        dial.turn(rotation);
        if dial.is_at_zero() {
            zero_count += 1;
        }
    }

    debug!(zero_count, "dial came to rest on zero");
    Ok(zero_count.to_string())
}

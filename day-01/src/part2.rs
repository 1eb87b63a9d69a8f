use tracing::{debug, trace};

use crate::dial::{parse_rotations, Dial};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let rotations = parse_rotations(input)?;

    let mut dial = Dial::default();
    let zero_count = rotations
        .into_iter()
        .map(|rotation| {
            let hits = dial.turn(rotation);
            trace!(?rotation, hits, position = dial.position());
            hits
        })
        .sum::<i64>();

    debug!(zero_count, "clicks on zero");
    Ok(zero_count.to_string())
}

pub mod candidates;
pub mod ranges;
pub mod part1;
pub mod part2;

use crate::{
    candidates::{sum_invalid_ids, RepeatPolicy},
    ranges::parse_ranges,
};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let ranges = parse_ranges(input)?;
    let total = sum_invalid_ids(&ranges, RepeatPolicy::AtLeastTwice);
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test_log::test]
    fn test_process() -> miette::Result<()> {
        let input = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,1698522-1698528,446443-446449,38593856-38593862,565653-565659,824824821-824824827,2121212118-2121212124";
        assert_eq!("4174379265", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("10-50", "110")]
    #[case("100-200,300-400", "444")]
    #[case("11-22,22-33", "66")]
    #[case("222220-222224", "222222")]
    #[case("", "0")]
    fn test_process_small(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn test_process_rejects_malformed() {
        assert!(process("11-22,95").is_err());
        assert!(process("11-22,abc-115").is_err());
    }
}

use miette::{Diagnostic, SourceSpan};
use nom::{character::complete::digit1, combinator::all_consuming};
use thiserror::Error;
use tracing::trace;

/// Most batteries whose joltage still fits a `u64`.
pub const MAX_SELECTION: usize = 19;

#[derive(Debug, Error, Diagnostic)]
pub enum BankError {
    #[error("Bank on line {line} contains something other than a digit")]
    #[diagnostic(code(day03::invalid_digit))]
    InvalidDigit {
        line: usize,
        #[source_code]
        src: String,
        #[label("not a digit")]
        span: SourceSpan,
    },
    #[error("Bank on line {line} has {len} batteries but {needed} must be switched on")]
    #[diagnostic(code(day03::bank_too_short))]
    TooShort {
        line: usize,
        len: usize,
        needed: usize,
    },
    #[error(
        "Cannot switch on {needed} batteries, at most {} fit a joltage reading",
        MAX_SELECTION
    )]
    #[diagnostic(code(day03::selection_too_large))]
    SelectionTooLarge { needed: usize },
    #[error("Total joltage does not fit in 64 bits")]
    #[diagnostic(code(day03::total_overflow))]
    TotalOverflow,
}

/// A row of batteries, each rated with a single digit joltage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    line: usize,
    digits: Vec<u8>,
}

impl Bank {
    pub fn parse(line: usize, input: &str) -> Result<Self, BankError> {
        match all_consuming(digit1::<&str, nom::error::Error<&str>>)(input) {
            Ok((_, digits)) => Ok(Self {
                line,
                digits: digits.bytes().map(|b| b - b'0').collect(),
            }),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
                let offset = input.len() - e.input.len();
                let len = e.input.chars().next().map_or(0, char::len_utf8);
                Err(BankError::InvalidDigit {
                    line,
                    src: input.to_string(),
                    span: (offset, len).into(),
                })
            }
            Err(nom::Err::Incomplete(_)) => Err(BankError::InvalidDigit {
                line,
                src: input.to_string(),
                span: (input.len(), 0).into(),
            }),
        }
    }

    /// Largest number that can be read off `count` batteries taken in order.
    ///
    /// Walks the bank once, keeping a stack of picked digits and popping a
    /// smaller digit whenever a larger one arrives and there are still
    /// batteries left to skip.
    pub fn max_joltage(&self, count: usize) -> Result<u64, BankError> {
        if count > MAX_SELECTION {
            return Err(BankError::SelectionTooLarge { needed: count });
        }

        let mut to_skip = self
            .digits
            .len()
            .checked_sub(count)
            .ok_or(BankError::TooShort {
                line: self.line,
                len: self.digits.len(),
                needed: count,
            })?;

        let mut picked: Vec<u8> = Vec::with_capacity(self.digits.len());
        for &digit in &self.digits {
            while to_skip > 0 && picked.last().is_some_and(|&last| last < digit) {
                picked.pop();
                to_skip -= 1;
            }
            picked.push(digit);
        }
        picked.truncate(count);

        Ok(picked
            .iter()
            .fold(0, |acc, &digit| acc * 10 + u64::from(digit)))
    }
}

/// Sums the best `count`-battery joltage of every bank. Blank lines are
/// skipped; a total past `u64::MAX` is an error.
#[tracing::instrument(skip(input))]
pub fn total_joltage(input: &str, count: usize) -> Result<u64, BankError> {
    let joltages = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| -> Result<u64, BankError> {
            let joltage = Bank::parse(line_no, line)?.max_joltage(count)?;
            trace!(line = line_no, joltage);
            Ok(joltage)
        });

    itertools::process_results(joltages, |mut joltages| {
        joltages.try_fold(0u64, u64::checked_add)
    })?
    .ok_or(BankError::TotalOverflow)
}

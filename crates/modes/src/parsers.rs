//! Library of parser functions for whitespace delimited numeric tables

// podtools modules
use podtools_utils::f;

// nom parser combinators
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::IResult;

/// Check for lines with nothing but whitespace
pub(crate) fn is_blank(i: &str) -> bool {
    i.trim().is_empty()
}

/// A single whitespace-free token as an f64, with nothing left over
///
/// Numbers that run into each other, such as `1.02.0`, are rejected rather
/// than split.
pub(crate) fn token_f64(i: &str) -> IResult<&str, f64> {
    all_consuming(double)(i)
}

/// Split a row into whitespace separated tokens without parsing them
pub(crate) fn tokens(i: &str) -> Vec<&str> {
    i.split_whitespace().collect()
}

/// Parse a token as a number, or describe why it failed
pub(crate) fn parse_f64(token: &str) -> Result<f64, String> {
    match token_f64(token) {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(f!("unable to parse \"{token}\" as a number")),
    }
}

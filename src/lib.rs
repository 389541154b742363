//! Dice notation such as `2d6 + 1d4 - 3`: parsing, rolling and rendering, and
//! rolling notation embedded in free text such as table cells.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let expr = tabledice::parse("  1 d 20 + 2d6 - 1 ").unwrap();
//! assert_eq!(expr.to_string(), "1d20 + 2d6 - 1");
//! assert_eq!(expr.bounds(), (2, 31));
//!
//! let roll = expr.roll(&mut StdRng::seed_from_u64(7));
//! assert!((2..=31).contains(&roll.total()));
//! ```

pub mod common;
pub mod parse;
pub mod roll;
pub mod scan;

pub use parse::ast::{Clause, Constant, Dice, Expression, Term};
pub use parse::{ParseError, ParseErrorKind};
pub use roll::{RollResult, RolledTerm, Roller, Stringify};
pub use scan::{substitute, substitute_all};

/// Parses dice notation into an [Expression].
///
/// # Errors
/// Returns a [ParseError] if the input contains a character that starts no
/// token, or if the tokens do not form an expression.
pub fn parse(s: &str) -> Result<Expression, ParseError> {
    let ret = parse::parse(s);
    if let Err(err) = &ret {
        tracing::trace!(input = s, error = %err, "failed to parse dice notation");
    }
    ret
}

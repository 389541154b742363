pub(crate) mod roller;
mod stringify;
mod tree;

use crate::parse::ast::Expression;

pub use roller::Roller;
pub use stringify::{LabeledStringifier, SimpleStringifier, Stringify};
pub use tree::{Eval, RollResult, RolledTerm};

/// Rolls every term of `expr` from left to right.
pub fn eval<R: Roller>(expr: &Expression, roller: &mut R) -> RollResult {
    let terms = expr
        .terms
        .mapped_ref(|term| RolledTerm::new(term.sign, term.clause.roll(roller)));
    let result = RollResult::new(terms);
    tracing::trace!(expression = %expr, total = result.total(), "rolled");
    result
}

impl Expression {
    /// Evaluates the expression once. Each call draws fresh values.
    pub fn roll<R: Roller>(&self, roller: &mut R) -> RollResult {
        eval(self, roller)
    }
}

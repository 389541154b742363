use crate::common::*;
use crate::roll::Eval;
use std::fmt;

/// A parsed dice expression: one or more signed terms, in source order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Expression {
    pub(crate) terms: NonEmpty<Term>,
}

impl Expression {
    pub(crate) fn new(terms: NonEmpty<Term>) -> Self {
        Self { terms }
    }

    /// The terms of the expression. The leading term always carries an
    /// explicit sign, which is [Sign::Add] unless the source started with `-`.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The lowest and highest totals this expression can roll. Sums beyond
    /// the range of [Int] saturate.
    pub fn bounds(&self) -> (Int, Int) {
        self.terms.iter().fold((0, 0), |(lo, hi), term| {
            let (term_lo, term_hi) = term.bounds();
            (lo.saturating_add(term_lo), hi.saturating_add(term_hi))
        })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.terms.first();
        if first.sign.is_negative() {
            write!(f, "{}", first.sign)?;
        }
        write!(f, "{}", first.clause)?;
        for term in self.terms.iter().skip(1) {
            write!(f, " {}", term)?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Term {
    pub sign: Sign,
    pub clause: Clause,
}

impl Term {
    pub fn new(sign: Sign, clause: impl Into<Clause>) -> Self {
        Self {
            sign,
            clause: clause.into(),
        }
    }

    /// The number of dice, or the value of a constant.
    pub fn count(&self) -> UInt {
        self.clause.count()
    }

    /// The number of faces, or `None` for a constant.
    pub fn sides(&self) -> Option<NonZeroUInt> {
        self.clause.sides()
    }

    /// Signed bounds of this term's contribution to the total.
    pub fn bounds(&self) -> (Int, Int) {
        let (lo, hi) = self.clause.bounds();
        match self.sign {
            Sign::Add => (lo, hi),
            Sign::Sub => (-hi, -lo),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sign, self.clause)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[enum_dispatch::enum_dispatch(Eval)]
pub enum Clause {
    Constant(Constant),
    Dice(Dice),
}

impl Clause {
    pub fn count(&self) -> UInt {
        match self {
            Self::Constant(c) => c.value,
            Self::Dice(d) => d.count,
        }
    }

    pub fn sides(&self) -> Option<NonZeroUInt> {
        match self {
            Self::Constant(_) => None,
            Self::Dice(d) => Some(d.sides),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(c) => fmt::Display::fmt(c, f),
            Self::Dice(d) => fmt::Display::fmt(d, f),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Constant {
    pub value: UInt,
}

impl Constant {
    pub const fn new(value: UInt) -> Self {
        Self { value }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    pub count: UInt,
    pub sides: NonZeroUInt,
}

impl Dice {
    pub const fn new(count: UInt, sides: NonZeroUInt) -> Self {
        Self { count, sides }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

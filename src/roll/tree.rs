use super::roller::Roller;
use super::stringify::{SimpleStringifier, Stringify};
use crate::common::*;
use crate::parse::ast::{Clause, Constant, Dice};
use std::fmt;

/// Evaluation of a single clause.
#[enum_dispatch::enum_dispatch]
pub trait Eval {
    /// Draws the clause's values from `roller`.
    fn roll<R: Roller>(&self, roller: &mut R) -> Vec<UInt>;

    /// The lowest and highest unsigned sum the clause can produce, clamped
    /// to the range of [Int].
    fn bounds(&self) -> (Int, Int);
}

impl Eval for Constant {
    fn roll<R: Roller>(&self, _: &mut R) -> Vec<UInt> {
        vec![self.value]
    }

    fn bounds(&self) -> (Int, Int) {
        (self.value.into(), self.value.into())
    }
}

impl Eval for Dice {
    fn roll<R: Roller>(&self, roller: &mut R) -> Vec<UInt> {
        if self.count == 0 {
            return Vec::new();
        }
        roller.roll_iter(self.count as usize, self.sides).collect()
    }

    fn bounds(&self) -> (Int, Int) {
        let count = Int::from(self.count);
        (count, count.saturating_mul(Int::from(self.sides.get())))
    }
}

/// The evaluated form of one term: its sign and the faces rolled.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RolledTerm {
    pub sign: Sign,
    pub values: Vec<UInt>,
}

impl RolledTerm {
    pub fn new(sign: Sign, values: Vec<UInt>) -> Self {
        Self { sign, values }
    }

    /// The term's contribution to the total, sign applied.
    pub fn total(&self) -> Int {
        let sum: Int = self.values.iter().copied().map(Int::from).sum();
        self.sign.apply(sum)
    }
}

/// One full evaluation of an expression.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollResult {
    pub(crate) terms: NonEmpty<RolledTerm>,
}

impl RollResult {
    pub(crate) fn new(terms: NonEmpty<RolledTerm>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[RolledTerm] {
        &self.terms
    }

    pub fn total(&self) -> Int {
        self.terms.iter().map(RolledTerm::total).sum()
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&SimpleStringifier::new().breakdown(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::StepRoller;

    fn roller() -> StepRoller {
        StepRoller::new(NonZeroUInt::new(3).unwrap(), 1)
    }

    #[test]
    fn test_eval_constant() {
        let mut r = roller();
        assert_eq!(Constant::new(6).roll(&mut r), vec![6]);
        assert_eq!(r.rolls, 0);
    }

    #[test]
    fn test_eval_dice() {
        let mut r = roller();
        let d = Dice::new(3, NonZeroUInt::new(4).unwrap());
        assert_eq!(d.roll(&mut r), vec![3, 4, 1]);
        assert_eq!(d.bounds(), (3, 12));
    }

    #[test]
    fn test_eval_zero_dice() {
        let mut r = roller();
        let d = Dice::new(0, NonZeroUInt::new(20).unwrap());
        assert_eq!(d.roll(&mut r), Vec::<UInt>::new());
        assert_eq!(r.rolls, 0);
        assert_eq!(d.bounds(), (0, 0));
    }

    #[test]
    fn test_bounds_saturate() {
        let d = Dice::new(UInt::MAX, NonZeroUInt::new(UInt::MAX).unwrap());
        assert_eq!(d.bounds(), (Int::from(UInt::MAX), Int::MAX));
        let c = Clause::from(d);
        assert_eq!(c.bounds(), (Int::from(UInt::MAX), Int::MAX));
    }

    #[test]
    fn test_totals() {
        let roll = RollResult::new(vec1![
            RolledTerm::new(Sign::Add, vec![3, 5]),
            RolledTerm::new(Sign::Sub, vec![2]),
            RolledTerm::new(Sign::Add, vec![]),
        ]);
        assert_eq!(roll.terms()[0].total(), 8);
        assert_eq!(roll.terms()[1].total(), -2);
        assert_eq!(roll.terms()[2].total(), 0);
        assert_eq!(roll.total(), 6);
    }
}

use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    Rng,
};

/// A source of die faces.
///
/// Every [Rng] is a roller. Callers that evaluate concurrently must each own
/// their roller.
pub trait Roller {
    type RollIter<'a>: Iterator<Item = UInt> + 'a
    where
        Self: 'a;

    /// Rolls one die, returning a face in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    /// Rolls `num` dice of the same size, lazily.
    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_>;
}

impl<R: Rng> Roller for R {
    type RollIter<'a> = std::iter::Take<DistIter<Uniform<UInt>, &'a mut Self, UInt>>
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num)
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;

#[cfg(test)]
mod step {
    use super::*;

    /// Yields `initial, initial + step, ...`, wrapped into `1..=sides`.
    pub(crate) struct StepRoller {
        current: UInt,
        step: UInt,
        /// How many faces have been handed out so far.
        pub(crate) rolls: usize,
    }

    impl StepRoller {
        pub fn new(initial: NonZeroUInt, step: UInt) -> Self {
            Self {
                current: initial.get(),
                step,
                rolls: 0,
            }
        }
    }

    impl Roller for StepRoller {
        type RollIter<'a> = StepIter<'a>;

        fn roll(&mut self, sides: NonZeroUInt) -> UInt {
            let ret = (self.current - 1) % sides.get() + 1;
            self.current += self.step;
            self.rolls += 1;
            ret
        }

        fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
            StepIter {
                roller: self,
                num,
                sides,
            }
        }
    }

    pub(crate) struct StepIter<'a> {
        roller: &'a mut StepRoller,
        num: usize,
        sides: NonZeroUInt,
    }

    impl Iterator for StepIter<'_> {
        type Item = UInt;

        fn next(&mut self) -> Option<Self::Item> {
            if self.num == 0 {
                None
            } else {
                self.num -= 1;
                Some(self.roller.roll(self.sides))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn sides(n: UInt) -> NonZeroUInt {
        NonZeroUInt::new(n).unwrap()
    }

    #[test]
    fn test_step_roller_wraps() {
        let mut roller = StepRoller::new(sides(5), 1);
        let rolls: Vec<_> = roller.roll_iter(4, sides(6)).collect();
        assert_eq!(rolls, vec![5, 6, 1, 2]);
        assert_eq!(roller.rolls, 4);
    }

    #[test]
    fn test_rng_roller_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [1, 2, 6, 20, 100] {
            assert!(rng.roll_iter(200, sides(n)).all(|x| (1..=n).contains(&x)));
            let x = Roller::roll(&mut rng, sides(n));
            assert!((1..=n).contains(&x));
        }
    }

    #[test]
    fn test_rng_roller_take() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(rng.roll_iter(0, sides(6)).count(), 0);
        assert_eq!(rng.roll_iter(13, sides(6)).count(), 13);
    }
}

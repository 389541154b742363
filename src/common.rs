use std::fmt::{self, Write};
use std::num::NonZeroU32;
pub use vec1::vec1;

/// The type of a signed roll total.
pub type Int = i64;
/// The type of a die face, a dice count or a constant.
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Sign {
    #[default]
    Add,
    Sub,
}

impl Sign {
    /// Applies the sign to an unsigned amount.
    pub fn apply(self, x: Int) -> Int {
        match self {
            Self::Add => x,
            Self::Sub => -x,
        }
    }

    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Sub)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Add => '+',
            Self::Sub => '-',
        };
        f.write_char(c)
    }
}

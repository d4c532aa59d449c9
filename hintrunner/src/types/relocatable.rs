use core::fmt::{self, Display};
use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::types::errors::math_errors::MathError;
use crate::{relocatable, Felt252};

/// A memory address: a segment together with an offset into it.
///
/// Segment indexes are kept signed so that addresses can be ordered and
/// compared with the bases handed out by the segment manager.
#[derive(Eq, Ord, Hash, PartialEq, PartialOrd, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Relocatable {
    pub segment_index: isize,
    pub offset: usize,
}

/// A memory value: either a field element or a relocatable address
/// (segment base pointers are stored as the latter).
#[derive(Eq, Ord, Hash, PartialEq, PartialOrd, Clone, Debug, Serialize, Deserialize)]
pub enum MaybeRelocatable {
    RelocatableValue(Relocatable),
    Int(Felt252),
}

impl From<(isize, usize)> for Relocatable {
    fn from(index_offset: (isize, usize)) -> Self {
        Relocatable {
            segment_index: index_offset.0,
            offset: index_offset.1,
        }
    }
}

impl From<(isize, usize)> for MaybeRelocatable {
    fn from(index_offset: (isize, usize)) -> Self {
        MaybeRelocatable::RelocatableValue(Relocatable::from(index_offset))
    }
}

impl From<Felt252> for MaybeRelocatable {
    fn from(num: Felt252) -> Self {
        MaybeRelocatable::Int(num)
    }
}

impl From<&Felt252> for MaybeRelocatable {
    fn from(num: &Felt252) -> Self {
        MaybeRelocatable::Int(*num)
    }
}

impl From<Relocatable> for MaybeRelocatable {
    fn from(rel: Relocatable) -> Self {
        MaybeRelocatable::RelocatableValue(rel)
    }
}

impl From<&Relocatable> for MaybeRelocatable {
    fn from(rel: &Relocatable) -> Self {
        MaybeRelocatable::RelocatableValue(*rel)
    }
}

impl From<&MaybeRelocatable> for MaybeRelocatable {
    fn from(other: &MaybeRelocatable) -> Self {
        other.clone()
    }
}

impl TryFrom<&MaybeRelocatable> for Relocatable {
    type Error = MathError;
    fn try_from(other: &MaybeRelocatable) -> Result<Self, MathError> {
        match other {
            MaybeRelocatable::RelocatableValue(rel) => Ok(*rel),
            MaybeRelocatable::Int(num) => Err(MathError::Felt252ToRelocatable(Box::new(*num))),
        }
    }
}

impl Display for Relocatable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.segment_index, self.offset)
    }
}

impl Display for MaybeRelocatable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MaybeRelocatable::RelocatableValue(rel) => rel.fmt(f),
            MaybeRelocatable::Int(num) => write!(f, "{num}"),
        }
    }
}

impl Add<usize> for Relocatable {
    type Output = Result<Relocatable, MathError>;
    fn add(self, other: usize) -> Result<Self, MathError> {
        self.offset
            .checked_add(other)
            .map(|x| Relocatable::from((self.segment_index, x)))
            .ok_or_else(|| MathError::RelocatableAddUsizeOffsetExceeded(Box::new((self, other))))
    }
}

/// Signed offset addition, used to resolve register-relative cell
/// references. The resulting offset must stay non-negative.
impl Add<i32> for Relocatable {
    type Output = Result<Relocatable, MathError>;
    fn add(self, other: i32) -> Result<Self, MathError> {
        if other >= 0 {
            self + other as usize
        } else {
            self - other.unsigned_abs() as usize
        }
    }
}

impl Sub<usize> for Relocatable {
    type Output = Result<Relocatable, MathError>;
    fn sub(self, other: usize) -> Result<Self, MathError> {
        if self.offset < other {
            return Err(MathError::RelocatableSubUsizeNegOffset(Box::new((
                self, other,
            ))));
        }
        let new_offset = self.offset - other;
        Ok(relocatable!(self.segment_index, new_offset))
    }
}

impl MaybeRelocatable {
    /// Returns a reference to the inner value if it is a Felt252, returns None otherwise.
    pub fn get_int_ref(&self) -> Option<&Felt252> {
        match self {
            MaybeRelocatable::Int(num) => Some(num),
            MaybeRelocatable::RelocatableValue(_) => None,
        }
    }

    /// Returns the inner value if it is a Relocatable, returns None otherwise.
    pub fn get_relocatable(&self) -> Option<Relocatable> {
        match self {
            MaybeRelocatable::RelocatableValue(rel) => Some(*rel),
            MaybeRelocatable::Int(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::*;
    use assert_matches::assert_matches;

    #[test]
    fn add_usize_to_relocatable() {
        let addr = relocatable!(1, 7);
        assert_matches!(addr + 5usize, Ok(x) if x == relocatable!(1, 12));
    }

    #[test]
    fn add_usize_to_relocatable_overflow() {
        let addr = relocatable!(1, usize::MAX);
        assert_matches!(
            addr + 1usize,
            Err(MathError::RelocatableAddUsizeOffsetExceeded(bx)) if *bx == (addr, 1)
        );
    }

    #[test]
    fn add_positive_i32_to_relocatable() {
        let addr = relocatable!(1, 5);
        assert_matches!(addr + 10_i32, Ok(x) if x == relocatable!(1, 15));
    }

    #[test]
    fn add_negative_i32_to_relocatable() {
        let addr = relocatable!(1, 5);
        assert_matches!(addr + (-3_i32), Ok(x) if x == relocatable!(1, 2));
    }

    #[test]
    fn add_negative_i32_to_relocatable_underflow() {
        let addr = relocatable!(1, 2);
        assert_matches!(
            addr + (-3_i32),
            Err(MathError::RelocatableSubUsizeNegOffset(bx)) if *bx == (addr, 3)
        );
    }

    #[test]
    fn sub_usize_from_relocatable_underflow() {
        let addr = relocatable!(2, 1);
        assert_matches!(
            addr - 3usize,
            Err(MathError::RelocatableSubUsizeNegOffset(bx)) if *bx == (addr, 3)
        );
    }

    #[test]
    fn relocatable_from_maybe_relocatable() {
        assert_matches!(
            Relocatable::try_from(&mayberelocatable!(1, 2)),
            Ok(x) if x == relocatable!(1, 2)
        );
        assert_matches!(
            Relocatable::try_from(&mayberelocatable!(17)),
            Err(MathError::Felt252ToRelocatable(bx)) if *bx == Felt252::from(17)
        );
    }

    #[test]
    fn display_relocatable_and_int() {
        assert_eq!(mayberelocatable!(1, 5).to_string(), "1:5");
        assert_eq!(mayberelocatable!(123).to_string(), "123");
    }
}

use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::types::operand::{CellRef, ResOperand};

/// The closed set of hints the runner executes.
///
/// A `Hint` is built once, when a compiled program's hint table is loaded,
/// and is immutable afterwards; it holds no state between invocations of
/// [`execute`](Hint::execute). Execution semantics live in
/// [`crate::hint_runner`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    /// Allocates a new empty segment and writes its base address to `dst`.
    AllocSegment { dst: CellRef },
    /// Writes 1 to `dst` if `lhs < rhs` over the canonical field
    /// representatives, 0 otherwise.
    TestLessThan {
        lhs: ResOperand,
        rhs: ResOperand,
        dst: CellRef,
    },
    TestLessThanOrEqual {
        lhs: ResOperand,
        rhs: ResOperand,
        dst: CellRef,
    },
    /// Multiplies two u128 operands exactly and splits the 256-bit product
    /// into its 128-bit halves.
    WideMul128 {
        lhs: ResOperand,
        rhs: ResOperand,
        low: CellRef,
        high: CellRef,
    },
    /// Prints the cells in `[start, end)` to standard output, one
    /// `[DEBUG]` line per cell.
    DebugPrint { start: ResOperand, end: ResOperand },
    /// Writes a modular square root of `value` to `dst`.
    SquareRoot { value: ResOperand, dst: CellRef },
}

impl Hint {
    /// Stable identifier used in logs and error reports.
    pub fn name(&self) -> &'static str {
        match self {
            Hint::AllocSegment { .. } => "AllocSegment",
            Hint::TestLessThan { .. } => "TestLessThan",
            Hint::TestLessThanOrEqual { .. } => "TestLessThanOrEqual",
            Hint::WideMul128 { .. } => "WideMul128",
            Hint::DebugPrint { .. } => "DebugPrint",
            Hint::SquareRoot { .. } => "SquareRoot",
        }
    }
}

impl Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Felt252;

    #[test]
    fn hint_names_are_stable() {
        let dst = CellRef::Ap(0);
        let op = ResOperand::Immediate(Felt252::from(1));
        let cases = [
            (Hint::AllocSegment { dst }, "AllocSegment"),
            (
                Hint::TestLessThan {
                    lhs: op,
                    rhs: op,
                    dst,
                },
                "TestLessThan",
            ),
            (
                Hint::TestLessThanOrEqual {
                    lhs: op,
                    rhs: op,
                    dst,
                },
                "TestLessThanOrEqual",
            ),
            (
                Hint::WideMul128 {
                    lhs: op,
                    rhs: op,
                    low: CellRef::Ap(1),
                    high: CellRef::Ap(2),
                },
                "WideMul128",
            ),
            (Hint::DebugPrint { start: op, end: op }, "DebugPrint"),
            (Hint::SquareRoot { value: op, dst }, "SquareRoot"),
        ];
        for (hint, expected) in cases {
            assert_eq!(hint.name(), expected);
            assert_eq!(hint.to_string(), expected);
        }
    }
}

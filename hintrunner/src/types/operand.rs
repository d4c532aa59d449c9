use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::Felt252;

/// A register-relative reference to a cell of the execution segment,
/// `[ap + off]` or `[fp + off]`.
///
/// The offset is the signed 16-bit displacement the compiled hint table
/// encodes; the register value it is added to is unsigned, so resolution can
/// fail on underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellRef {
    Ap(i16),
    Fp(i16),
}

impl Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRef::Ap(offset) => write!(f, "ap + {offset}"),
            CellRef::Fp(offset) => write!(f, "fp + {offset}"),
        }
    }
}

/// An operand a hint can resolve into a value: a compile-time literal
/// already reduced into the field, or a dereference of a referenced cell.
///
/// Richer program formats may extend this with derived operands (double
/// dereferences, binary operations); any such variant has to resolve under
/// the same contract as these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResOperand {
    Immediate(Felt252),
    Deref(CellRef),
}

impl Display for ResOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResOperand::Immediate(value) => write!(f, "{value}"),
            ResOperand::Deref(cell) => write!(f, "[{cell}]"),
        }
    }
}

impl From<Felt252> for ResOperand {
    fn from(value: Felt252) -> Self {
        ResOperand::Immediate(value)
    }
}

impl From<CellRef> for ResOperand {
    fn from(cell: CellRef) -> Self {
        ResOperand::Deref(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_cell_refs() {
        assert_eq!(CellRef::Ap(5).to_string(), "ap + 5");
        assert_eq!(CellRef::Fp(-3).to_string(), "fp + -3");
    }

    #[test]
    fn display_res_operands() {
        assert_eq!(
            ResOperand::Immediate(Felt252::from(13)).to_string(),
            "13"
        );
        assert_eq!(ResOperand::Deref(CellRef::Ap(0)).to_string(), "[ap + 0]");
    }
}

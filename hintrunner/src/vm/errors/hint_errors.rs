// The `(*.0).0` syntax of thiserror falsely triggers this clippy warning
#![allow(clippy::explicit_auto_deref)]

use thiserror::Error;

use crate::types::errors::math_errors::MathError;
use crate::types::relocatable::{MaybeRelocatable, Relocatable};
use crate::vm::errors::{memory_errors::MemoryError, vm_errors::VirtualMachineError};
use crate::Felt252;

#[derive(Debug, Error)]
pub enum HintError {
    #[error(transparent)]
    Internal(#[from] VirtualMachineError),
    #[error(transparent)]
    Memory(#[from] MemoryError),
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("{} operand {} should be u128", (*.0).0, (*.0).1)]
    WideMul128OperandOutOfRange(Box<(&'static str, Felt252)>),
    #[error("Expected operand {0} to be a relocatable value")]
    OperandNotRelocatable(Box<MaybeRelocatable>),
    #[error("Debug print start {} is bigger than its end {}", (*.0).0, (*.0).1)]
    DebugPrintRangeInverted(Box<(Relocatable, Relocatable)>),
    #[error("Square root of {0} is not an element of the field")]
    SquareRootNonResidue(Box<Felt252>),
}

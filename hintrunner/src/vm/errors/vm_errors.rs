use thiserror::Error;

use crate::types::errors::math_errors::MathError;
use crate::vm::errors::memory_errors::MemoryError;

#[derive(Debug, Error)]
pub enum VirtualMachineError {
    #[error(transparent)]
    Math(#[from] MathError),
    #[error(transparent)]
    Memory(#[from] MemoryError),
}

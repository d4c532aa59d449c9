// The `(*.0).0` syntax of thiserror falsely triggers this clippy warning
#![allow(clippy::explicit_auto_deref)]

use thiserror::Error;

use crate::types::relocatable::Relocatable;
use crate::Felt252;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("Cant convert felt: {0} to Relocatable")]
    Felt252ToRelocatable(Box<Felt252>),
    #[error("Operation failed: {} - {}, offsets cant be negative", (*.0).0, (*.0).1)]
    RelocatableSubUsizeNegOffset(Box<(Relocatable, usize)>),
    #[error("Operation failed: {} + {}, maximum offset value exceeded", (*.0).0, (*.0).1)]
    RelocatableAddUsizeOffsetExceeded(Box<(Relocatable, usize)>),
    #[error("is_quad_residue: p must be > 0")]
    IsQuadResidueZeroPrime,
}

//! # Hint execution core for a Cairo-style virtual machine
//!
//! Cairo programs occasionally need values that the constrained instruction
//! set cannot derive on its own: integer comparisons, wide multiplications,
//! modular square roots, fresh memory segments. The compiler emits a *hint*
//! at those points, and the host VM hands control to this crate, which
//! resolves the hint's operands against the current register and memory
//! state, performs the computation with native arithmetic, and writes the
//! result back into VM memory for the following constrained instructions to
//! consume.
//!
//! The crate owns the closed set of hint variants ([`types::hints::Hint`]),
//! the operand language they are expressed in ([`types::operand`]), and the
//! field / wide-integer arithmetic their semantics depend on
//! ([`math_utils`]). A minimal [`vm`] module provides the registers and
//! segmented memory the hints run against, so the core is executable and
//! testable in isolation; instruction decoding, tracing and proof generation
//! live in the host, not here.

#![forbid(unsafe_code)]

pub mod hint_runner;
pub mod math_utils;
pub mod types;
pub mod utils;
pub mod vm;

pub use starknet_types_core::felt::Felt as Felt252;

//! Execution semantics for the hint set.
//!
//! Each hint is a single atomic resolve-compute-write transition against the
//! VM state: operands are resolved first (possibly reading memory), the side
//! computation runs over native arithmetic, and the results are written back
//! through the VM's memory. Hints hold no state of their own between
//! invocations.

pub(crate) mod debug_print;
pub mod hint_runner_utils;

use num_bigint::BigUint;

use crate::math_utils;
use crate::types::hints::Hint;
use crate::types::operand::{CellRef, ResOperand};
use crate::vm::errors::hint_errors::HintError;
use crate::vm::vm_core::VirtualMachine;
use crate::Felt252;

use self::debug_print::format_debug_row;
use self::hint_runner_utils::{as_relocatable, cell_ref_to_relocatable, res_operand_get_val};

impl Hint {
    /// Runs the hint against the given VM state.
    ///
    /// Errors propagate immediately to the caller; writes already performed
    /// by the failing call are left in place.
    pub fn execute(&self, vm: &mut VirtualMachine) -> Result<(), HintError> {
        match self {
            Hint::AllocSegment { dst } => alloc_segment(vm, dst),
            Hint::TestLessThan { lhs, rhs, dst } => test_less_than(vm, lhs, rhs, dst),
            Hint::TestLessThanOrEqual { lhs, rhs, dst } => {
                test_less_than_or_equal(vm, lhs, rhs, dst)
            }
            Hint::WideMul128 {
                lhs,
                rhs,
                low,
                high,
            } => wide_mul_128(vm, lhs, rhs, low, high),
            Hint::DebugPrint { start, end } => debug_print(vm, start, end),
            Hint::SquareRoot { value, dst } => square_root(vm, value, dst),
        }
    }
}

fn alloc_segment(vm: &mut VirtualMachine, dst: &CellRef) -> Result<(), HintError> {
    let segment = vm.add_memory_segment();
    vm.insert_value(cell_ref_to_relocatable(dst, vm)?, segment)
        .map_err(HintError::from)
}

fn test_less_than(
    vm: &mut VirtualMachine,
    lhs: &ResOperand,
    rhs: &ResOperand,
    dst: &CellRef,
) -> Result<(), HintError> {
    let lhs_value = res_operand_get_val(vm, lhs)?;
    let rhs_value = res_operand_get_val(vm, rhs)?;
    let result = Felt252::from((lhs_value < rhs_value) as u8);

    vm.insert_value(cell_ref_to_relocatable(dst, vm)?, result)
        .map_err(HintError::from)
}

fn test_less_than_or_equal(
    vm: &mut VirtualMachine,
    lhs: &ResOperand,
    rhs: &ResOperand,
    dst: &CellRef,
) -> Result<(), HintError> {
    let lhs_value = res_operand_get_val(vm, lhs)?;
    let rhs_value = res_operand_get_val(vm, rhs)?;
    let result = Felt252::from((lhs_value <= rhs_value) as u8);

    vm.insert_value(cell_ref_to_relocatable(dst, vm)?, result)
        .map_err(HintError::from)
}

fn wide_mul_128(
    vm: &mut VirtualMachine,
    lhs: &ResOperand,
    rhs: &ResOperand,
    low: &CellRef,
    high: &CellRef,
) -> Result<(), HintError> {
    let mask128 = BigUint::from(u128::MAX);
    let lhs_felt = res_operand_get_val(vm, lhs)?;
    let rhs_felt = res_operand_get_val(vm, rhs)?;
    let lhs_val = lhs_felt.to_biguint();
    let rhs_val = rhs_felt.to_biguint();
    if lhs_val > mask128 {
        return Err(HintError::WideMul128OperandOutOfRange(Box::new((
            "lhs", lhs_felt,
        ))));
    }
    if rhs_val > mask128 {
        return Err(HintError::WideMul128OperandOutOfRange(Box::new((
            "rhs", rhs_felt,
        ))));
    }

    // Both destination cells must resolve before either write is performed.
    let low_addr = cell_ref_to_relocatable(low, vm)?;
    let high_addr = cell_ref_to_relocatable(high, vm)?;

    // The product is exact: it is split at bit 128, never reduced modulo the
    // field prime.
    let prod = lhs_val * rhs_val;
    vm.insert_value(low_addr, Felt252::from(&prod & &mask128))?;
    vm.insert_value(high_addr, Felt252::from(prod >> 128u32))?;
    Ok(())
}

fn debug_print(vm: &mut VirtualMachine, start: &ResOperand, end: &ResOperand) -> Result<(), HintError> {
    let start_addr = as_relocatable(vm, start)?;
    let end_addr = as_relocatable(vm, end)?;

    if start_addr.offset > end_addr.offset {
        return Err(HintError::DebugPrintRangeInverted(Box::new((
            start_addr, end_addr,
        ))));
    }

    let mut curr = start_addr;
    while curr.offset < end_addr.offset {
        let value = vm.get_integer(curr)?;
        println!("{}", format_debug_row(value));
        curr = (curr + 1_usize)?;
    }
    Ok(())
}

fn square_root(vm: &mut VirtualMachine, value: &ResOperand, dst: &CellRef) -> Result<(), HintError> {
    let value = res_operand_get_val(vm, value)?;
    let root = math_utils::sqrt(&value)
        .ok_or_else(|| HintError::SquareRootNonResidue(Box::new(value)))?;

    vm.insert_value(cell_ref_to_relocatable(dst, vm)?, root)
        .map_err(HintError::from)
}

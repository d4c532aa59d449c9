use crate::types::errors::math_errors::MathError;
use crate::types::operand::{CellRef, ResOperand};
use crate::types::relocatable::{MaybeRelocatable, Relocatable};
use crate::vm::errors::hint_errors::HintError;
use crate::vm::errors::memory_errors::MemoryError;
use crate::vm::errors::vm_errors::VirtualMachineError;
use crate::vm::vm_core::VirtualMachine;
use crate::Felt252;

/// Resolves a register-relative cell reference into a concrete address in
/// the execution segment. Fails if the signed offset would take the unsigned
/// register value below zero.
pub fn cell_ref_to_relocatable(
    cell_ref: &CellRef,
    vm: &VirtualMachine,
) -> Result<Relocatable, MathError> {
    let (base, offset) = match cell_ref {
        CellRef::Ap(offset) => (vm.get_ap(), *offset),
        CellRef::Fp(offset) => (vm.get_fp(), *offset),
    };
    base + offset as i32
}

pub(crate) fn get_cell_val(
    vm: &VirtualMachine,
    cell: &CellRef,
) -> Result<Felt252, VirtualMachineError> {
    Ok(*vm.get_integer(cell_ref_to_relocatable(cell, vm)?)?)
}

/// Fetches the value of `res_operand` from the vm, as a field element.
pub fn res_operand_get_val(
    vm: &VirtualMachine,
    res_operand: &ResOperand,
) -> Result<Felt252, VirtualMachineError> {
    match res_operand {
        ResOperand::Deref(cell) => get_cell_val(vm, cell),
        ResOperand::Immediate(x) => Ok(*x),
    }
}

/// Fetches the raw memory value of `res_operand`, which may be an address.
pub(crate) fn res_operand_get_maybe(
    vm: &VirtualMachine,
    res_operand: &ResOperand,
) -> Result<MaybeRelocatable, VirtualMachineError> {
    match res_operand {
        ResOperand::Deref(cell) => {
            let addr = cell_ref_to_relocatable(cell, vm)?;
            vm.get_maybe(&addr).ok_or_else(|| {
                VirtualMachineError::Memory(MemoryError::UnknownMemoryCell(Box::new(addr)))
            })
        }
        ResOperand::Immediate(x) => Ok(MaybeRelocatable::Int(*x)),
    }
}

/// Resolves an operand that is expected to carry a memory address.
pub(crate) fn as_relocatable(
    vm: &VirtualMachine,
    value: &ResOperand,
) -> Result<Relocatable, HintError> {
    let value = res_operand_get_maybe(vm, value)?;
    match value.get_relocatable() {
        Some(addr) => Ok(addr),
        None => Err(HintError::OperandNotRelocatable(Box::new(value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relocatable;
    use crate::utils::test_utils::*;
    use assert_matches::assert_matches;

    #[test]
    fn cell_ref_resolution_is_register_relative() {
        let mut vm = vm!();
        vm.set_ap(5);
        vm.set_fp(2);
        assert_matches!(
            cell_ref_to_relocatable(&CellRef::Ap(2), &vm),
            Ok(x) if x == relocatable!(1, 7)
        );
        assert_matches!(
            cell_ref_to_relocatable(&CellRef::Fp(-1), &vm),
            Ok(x) if x == relocatable!(1, 1)
        );
    }

    #[test]
    fn cell_ref_resolution_cant_underflow() {
        let vm = vm!();
        assert_matches!(
            cell_ref_to_relocatable(&CellRef::Ap(-1), &vm),
            Err(MathError::RelocatableSubUsizeNegOffset(_))
        );
    }

    #[test]
    fn immediate_resolves_without_memory_access() {
        let vm = vm!();
        assert_matches!(
            res_operand_get_val(&vm, &ResOperand::Immediate(Felt252::from(13))),
            Ok(x) if x == Felt252::from(13)
        );
    }

    #[test]
    fn deref_resolves_through_memory() {
        let mut vm = vm!();
        add_segments!(vm, 2);
        vm.insert_value(relocatable!(1, 0), Felt252::from(23))
            .unwrap();
        assert_matches!(
            res_operand_get_val(&vm, &ResOperand::Deref(CellRef::Ap(0))),
            Ok(x) if x == Felt252::from(23)
        );
    }

    #[test]
    fn deref_of_unwritten_cell_fails() {
        let mut vm = vm!();
        add_segments!(vm, 2);
        assert_matches!(
            res_operand_get_val(&vm, &ResOperand::Deref(CellRef::Ap(0))),
            Err(VirtualMachineError::Memory(MemoryError::UnknownMemoryCell(
                bx
            ))) if *bx == relocatable!(1, 0)
        );
    }

    #[test]
    fn deref_of_relocatable_cell_is_not_an_integer() {
        let mut vm = vm!();
        add_segments!(vm, 2);
        vm.insert_value(relocatable!(1, 0), relocatable!(2, 0))
            .unwrap();
        assert_matches!(
            res_operand_get_val(&vm, &ResOperand::Deref(CellRef::Ap(0))),
            Err(VirtualMachineError::Memory(MemoryError::ExpectedInteger(_)))
        );
    }

    #[test]
    fn as_relocatable_rejects_integers() {
        let vm = vm!();
        assert_matches!(
            as_relocatable(&vm, &ResOperand::Immediate(Felt252::from(7))),
            Err(HintError::OperandNotRelocatable(_))
        );
    }
}

use crate::types::relocatable::{MaybeRelocatable, Relocatable};
use crate::vm::context::run_context::RunContext;
use crate::vm::errors::memory_errors::MemoryError;
use crate::vm::vm_memory::memory_segments::MemorySegmentManager;
use crate::Felt252;

/// The VM state a hint runs against: the `ap`/`fp` registers and the
/// segmented memory.
///
/// Hints receive this by mutable reference for the duration of a single
/// `execute` call and must not retain it beyond that. There is exactly one
/// owner of the state at any time; this core is single-threaded.
pub struct VirtualMachine {
    pub(crate) run_context: RunContext,
    pub segments: MemorySegmentManager,
}

impl VirtualMachine {
    pub fn new() -> VirtualMachine {
        VirtualMachine {
            run_context: RunContext::new(0, 0),
            segments: MemorySegmentManager::new(),
        }
    }

    /// Allocates a new, empty segment and returns its base address.
    pub fn add_memory_segment(&mut self) -> Relocatable {
        self.segments.add()
    }

    pub fn get_ap(&self) -> Relocatable {
        self.run_context.get_ap()
    }

    pub fn get_fp(&self) -> Relocatable {
        self.run_context.get_fp()
    }

    pub fn set_ap(&mut self, ap: usize) {
        self.run_context.ap = ap
    }

    pub fn set_fp(&mut self, fp: usize) {
        self.run_context.fp = fp
    }

    /// Gets the integer value corresponding to the Relocatable address
    pub fn get_integer(&self, key: Relocatable) -> Result<&Felt252, MemoryError> {
        self.segments.memory.get_integer(key)
    }

    /// Gets the relocatable value corresponding to the Relocatable address
    pub fn get_relocatable(&self, key: Relocatable) -> Result<Relocatable, MemoryError> {
        self.segments.memory.get_relocatable(key)
    }

    /// Gets a MaybeRelocatable value from memory, or None if the cell was never written.
    pub fn get_maybe(&self, key: &Relocatable) -> Option<MaybeRelocatable> {
        self.segments.memory.get(key).cloned()
    }

    pub fn insert_value<T: Into<MaybeRelocatable>>(
        &mut self,
        key: Relocatable,
        val: T,
    ) -> Result<(), MemoryError> {
        self.segments.memory.insert_value(key, val)
    }
}

impl Default for VirtualMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relocatable;
    use crate::utils::test_utils::*;

    #[test]
    fn registers_follow_the_run_context() {
        let mut vm = vm!();
        vm.set_ap(7);
        vm.set_fp(11);
        assert_eq!(vm.get_ap(), relocatable!(1, 7));
        assert_eq!(vm.get_fp(), relocatable!(1, 11));
    }

    #[test]
    fn add_memory_segment_grows_the_segment_count() {
        let mut vm = vm!();
        add_segments!(vm, 2);
        assert_eq!(vm.segments.num_segments(), 2);
        assert_eq!(vm.add_memory_segment(), relocatable!(2, 0));
        assert_eq!(vm.segments.num_segments(), 3);
    }

    #[test]
    fn insert_and_read_back() {
        let mut vm = vm!();
        add_segments!(vm, 2);
        vm.insert_value(relocatable!(1, 0), Felt252::from(42))
            .unwrap();
        assert_eq!(
            vm.get_integer(relocatable!(1, 0)).unwrap(),
            &Felt252::from(42)
        );
        assert_eq!(
            vm.get_maybe(&relocatable!(1, 0)),
            Some(mayberelocatable!(42))
        );
        assert_eq!(vm.get_maybe(&relocatable!(1, 1)), None);
    }
}

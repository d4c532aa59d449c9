use core::fmt;

use crate::types::relocatable::{MaybeRelocatable, Relocatable};
use crate::vm::errors::memory_errors::MemoryError;
use crate::Felt252;

/// Segmented, write-once memory.
///
/// Each segment is a growable vector of cells; a cell is either unwritten
/// (`None`) or holds a [`MaybeRelocatable`]. Writing next to the end of a
/// segment grows it; writing past the end leaves `None` gaps in between.
/// Segments are only ever created through
/// [`MemorySegmentManager::add`](crate::vm::vm_memory::memory_segments::MemorySegmentManager::add)
/// and never reclaimed.
pub struct Memory {
    pub(crate) data: Vec<Vec<Option<MaybeRelocatable>>>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory { data: Vec::new() }
    }

    /// Inserts a value into a memory address.
    ///
    /// Returns an error if the address belongs to a non-allocated segment,
    /// or if the cell already holds a different value. Re-inserting the
    /// value a cell already holds is a no-op.
    pub fn insert<V>(&mut self, key: Relocatable, val: V) -> Result<(), MemoryError>
    where
        MaybeRelocatable: From<V>,
    {
        let val = MaybeRelocatable::from(val);
        let data_len = self.data.len();
        let segment = usize::try_from(key.segment_index)
            .ok()
            .and_then(|i| self.data.get_mut(i))
            .ok_or_else(|| {
                MemoryError::UnallocatedSegment(Box::new((key.segment_index, data_len)))
            })?;

        let (len, capacity) = (segment.len(), segment.capacity());
        if len <= key.offset {
            let new_len = key
                .offset
                .checked_add(1)
                .ok_or(MemoryError::VecCapacityExceeded)?;
            segment
                .try_reserve(new_len.saturating_sub(capacity))
                .map_err(|_| MemoryError::VecCapacityExceeded)?;
            segment.resize(new_len, None);
        }

        match segment[key.offset] {
            None => segment[key.offset] = Some(val),
            Some(ref current_cell) => {
                if current_cell != &val {
                    // Existing memory cannot be changed
                    return Err(MemoryError::InconsistentMemory(Box::new((
                        key,
                        current_cell.clone(),
                        val,
                    ))));
                }
            }
        };
        Ok(())
    }

    /// Retrieves a value from memory, or None if the cell was never written.
    pub fn get(&self, key: &Relocatable) -> Option<&MaybeRelocatable> {
        let segment = usize::try_from(key.segment_index).ok()?;
        self.data.get(segment)?.get(key.offset)?.as_ref()
    }

    /// Gets the value from a memory address as a Felt252 value.
    /// Returns an Error if the value at the memory address is missing or not a Felt252.
    pub fn get_integer(&self, key: Relocatable) -> Result<&Felt252, MemoryError> {
        match self
            .get(&key)
            .ok_or_else(|| MemoryError::UnknownMemoryCell(Box::new(key)))?
        {
            MaybeRelocatable::Int(int) => Ok(int),
            MaybeRelocatable::RelocatableValue(_) => {
                Err(MemoryError::ExpectedInteger(Box::new(key)))
            }
        }
    }

    /// Gets the value from a memory address as a Relocatable value.
    /// Returns an Error if the value at the memory address is missing or not a Relocatable.
    pub fn get_relocatable(&self, key: Relocatable) -> Result<Relocatable, MemoryError> {
        match self
            .get(&key)
            .ok_or_else(|| MemoryError::UnknownMemoryCell(Box::new(key)))?
        {
            MaybeRelocatable::RelocatableValue(rel) => Ok(*rel),
            MaybeRelocatable::Int(_) => Err(MemoryError::ExpectedRelocatable(Box::new(key))),
        }
    }

    /// Inserts a value into memory, converting it first into a MaybeRelocatable.
    pub fn insert_value<T: Into<MaybeRelocatable>>(
        &mut self,
        key: Relocatable,
        val: T,
    ) -> Result<(), MemoryError> {
        self.insert(key, val.into())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, segment) in self.data.iter().enumerate() {
            for (j, cell) in segment.iter().enumerate() {
                if let Some(value) = cell {
                    writeln!(f, "({i},{j}) : {value}")?;
                }
            }
        }
        Ok(())
    }
}

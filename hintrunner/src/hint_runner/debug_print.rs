use crate::Felt252;

/// Renders one output row of the DebugPrint hint: the cell's canonical
/// representative in lowercase hexadecimal, with no leading zeros and no
/// prefix. Zero renders as `0`.
pub(crate) fn format_debug_row(value: &Felt252) -> String {
    format!("[DEBUG] {:x}", value.to_biguint())
}

use crate::types::relocatable::Relocatable;

/// Index of the distinguished segment holding the running program's
/// stack-like working memory, the one `ap` and `fp` point into.
pub const EXECUTION_SEGMENT_INDEX: isize = 1;

/// The register state a hint executes against: the allocation pointer and
/// the frame pointer, both unsigned offsets into the execution segment.
///
/// The host instruction loop advances them between steps; hints only read
/// them.
pub struct RunContext {
    pub(crate) ap: usize,
    pub(crate) fp: usize,
}

impl RunContext {
    pub fn new(ap: usize, fp: usize) -> RunContext {
        RunContext { ap, fp }
    }

    pub fn get_ap(&self) -> Relocatable {
        Relocatable::from((EXECUTION_SEGMENT_INDEX, self.ap))
    }

    pub fn get_fp(&self) -> Relocatable {
        Relocatable::from((EXECUTION_SEGMENT_INDEX, self.fp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relocatable;

    #[test]
    fn registers_point_into_the_execution_segment() {
        let run_context = RunContext::new(5, 2);
        assert_eq!(run_context.get_ap(), relocatable!(1, 5));
        assert_eq!(run_context.get_fp(), relocatable!(1, 2));
    }
}

//! Events emitted by the auto generator toward the host grid/audio layer.

/// Why a generation run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// Reached the end of the page without looping
    PageEnd,
    /// No candidate cleared the brightness threshold
    DeadEnd,
    /// Explicit stop request
    Cancelled,
}

impl HaltReason {
    pub fn name(&self) -> &'static str {
        match self {
            HaltReason::PageEnd => "page-end",
            HaltReason::DeadEnd => "dead-end",
            HaltReason::Cancelled => "cancelled",
        }
    }
}

/// Generator output. The host applies note additions and page clears to the
/// grid it owns; `Halted` is always the final event of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorEvent {
    NoteAdded {
        pitch: u8,
        step: usize,
        velocity: u8,
        duration: u32,
    },
    /// Looping-run loop boundary only
    PageCleared,
    Halted(HaltReason),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn halt_reason_names() {
        assert_eq!(HaltReason::PageEnd.name(), "page-end");
        assert_eq!(HaltReason::DeadEnd.name(), "dead-end");
        assert_eq!(HaltReason::Cancelled.name(), "cancelled");
    }

    #[test]
    fn halt_reason_names_unique() {
        let names: HashSet<&str> = [HaltReason::PageEnd, HaltReason::DeadEnd, HaltReason::Cancelled]
            .iter()
            .map(|r| r.name())
            .collect();
        assert_eq!(names.len(), 3);
    }
}

//! Execution state handed to a script run

use crate::script::value::ReturnValue;
use serde::{Deserialize, Serialize};

/// Context a script starts or resumes from
///
/// The empty state starts a script at its entry point. A resumable state
/// carries the instruction offset and saved stack of a suspended run, as
/// stored for delayed and assigned actions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExecutionState {
    pub offset: Option<u32>,
    pub stack: Vec<ReturnValue>,
}

impl ExecutionState {
    /// Initial state: start at the entry point with nothing saved
    pub fn empty() -> Self {
        Self::default()
    }

    /// State that resumes a suspended run at `offset` with `stack` restored
    pub fn resume_at(offset: u32, stack: Vec<ReturnValue>) -> Self {
        Self {
            offset: Some(offset),
            stack,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.offset.is_none() && self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state() {
        let state = ExecutionState::empty();
        assert!(state.is_empty());
        assert_eq!(state, ExecutionState::default());
    }

    #[test]
    fn test_resume_state() {
        let state = ExecutionState::resume_at(0x2a, vec![ReturnValue::Int(3)]);
        assert!(!state.is_empty());
        assert_eq!(state.offset, Some(0x2a));
        assert_eq!(state.stack.len(), 1);
    }
}

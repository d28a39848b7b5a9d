//! Task name storage
//!
//! Short names live inline in the task; longer names are copied to an owned
//! heap allocation once at registration and never re-selected.

use alloc::string::String;

use crate::config::CFG_SHORT_NAME_LEN;

/// Owned task name
///
/// Names of up to [`CFG_SHORT_NAME_LEN`] bytes are stored inline without
/// heap allocation. Longer names take the heap path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskName {
    /// Inline fixed-capacity storage
    Inline(heapless::String<CFG_SHORT_NAME_LEN>),
    /// Owned heap copy for names that do not fit inline
    Heap(String),
}

impl TaskName {
    /// Copy `name` into whichever storage fits it
    pub fn new(name: &str) -> Self {
        let mut short = heapless::String::new();
        if short.push_str(name).is_ok() {
            TaskName::Inline(short)
        } else {
            TaskName::Heap(String::from(name))
        }
    }

    /// Empty name for unnamed tasks
    pub const fn empty() -> Self {
        TaskName::Inline(heapless::String::new())
    }

    /// View the stored name
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            TaskName::Inline(s) => s.as_str(),
            TaskName::Heap(s) => s.as_str(),
        }
    }
}

impl Default for TaskName {
    fn default() -> Self {
        TaskName::empty()
    }
}

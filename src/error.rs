//! Initialization errors
//!
//! Author: Moroya Sakamoto

/// Why a task table was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// Entry at `index` has no action
    MissingAction {
        /// Table position of the first invalid entry
        index: usize,
    },
}

impl core::fmt::Display for InitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InitError::MissingAction { index } => {
                write!(f, "task {index} has no action")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InitError {}

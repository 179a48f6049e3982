pub mod input;
pub mod outcome;
pub mod task;

pub use input::{InputError, ModerationInput};
pub use outcome::{DispatchOutcome, ModerationVerdict};
pub use task::{TaskDescriptor, TaskPayload, TaskType};

//! Lockstep traversal of two graphs.

pub mod engine;
pub mod frame;

pub use engine::{compare, StructuralComparison};
pub use frame::{Frame, FrameStack, Label, ROOT_LABEL};

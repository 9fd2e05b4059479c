pub mod tool;

pub use tool::{Tool, ToolCategory};

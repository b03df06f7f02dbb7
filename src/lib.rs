pub mod compiler;
pub mod interpreter;

pub mod display;
pub mod error;
pub mod interpreter;
pub mod keypad;
pub mod machine;
pub mod memory;
pub mod opcode;
pub mod registers;

pub type Error = anyhow::Error;
pub type Result<T> = anyhow::Result<T>;

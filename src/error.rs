/// Failure classes the instruction engine can surface to the host.
///
/// None of these are recoverable by re-execution: they mean the loaded
/// program is malformed or an instruction was mis-decoded, so the host
/// should stop the fetch/execute loop and report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Chip8Error {
    #[error("unknown opcode {opcode:#06X}")]
    UnknownOpcode { opcode: u16 },

    #[error("return with an empty call stack")]
    StackUnderflow,

    #[error("call stack exceeded {max} nested subroutines")]
    StackOverflow { max: usize },

    #[error("memory access out of bounds at address {address:#05X}")]
    MemoryOutOfBounds { address: usize },

    #[error("rom is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },
}

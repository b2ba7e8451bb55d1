use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum MachineError {
    Io(std::io::Error),
    RomTooLarge { size: usize, max: usize },
    ProgramCounterOutOfBounds(usize),
    StackOverflow,
    StackUnderflow,
    Audio(String),
    InvalidArgument(&'static str),
}

impl Display for MachineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::RomTooLarge { size, max } => {
                write!(f, "ROM too large: {size} bytes (max {max})")
            }
            Self::ProgramCounterOutOfBounds(pc) => {
                write!(f, "program counter exceeded program memory: 0x{pc:03x}")
            }
            Self::StackOverflow => write!(f, "call instruction with a full stack"),
            Self::StackUnderflow => write!(f, "return instruction with empty stack"),
            Self::Audio(reason) => write!(f, "audio error: {reason}"),
            Self::InvalidArgument(argument) => write!(f, "invalid argument: {argument}"),
        }
    }
}

impl std::error::Error for MachineError {}

impl From<std::io::Error> for MachineError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "disassembler")]
pub mod config;

#[cfg(feature = "disassembler")]
pub mod disasm;

#[cfg(feature = "disassembler")]
pub mod format;

#[cfg(feature = "disassembler")]
mod opcodes;

#[cfg(feature = "ctl")]
pub mod ctl;

#[cfg(feature = "ctl")]
pub mod refs;

#[cfg(feature = "ctl")]
pub mod skool;

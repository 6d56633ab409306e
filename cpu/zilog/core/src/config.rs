use bitflags::bitflags;
use indexmap::IndexMap;
use thiserror::Error;

use std::str::FromStr;

/// Patterns of operations whose integer operand refers to another instruction
pub const DEFAULT_REF_PATTERNS: [&str; 4] = [
	r"DJNZ \i",
	r"JR ((NZ|Z|NC|C),)?\i",
	r"JP ((NZ|Z|NC|C|PO|PE|P|M),)?\i",
	r"CALL ((NZ|Z|NC|C|PO|PE|P|M),)?\i",
];

const DEFAULT_TITLES: [(char, &str); 8] = [
	('b', "Data block at {address}"),
	('c', "Routine at {address}"),
	('g', "Game status buffer entry at {address}"),
	('i', "Ignored"),
	('s', "Unused"),
	('t', "Message at {address}"),
	('u', "Unused"),
	('w', "Data block at {address}"),
];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
	#[error("Unknown option: {0}")]
	UnknownOption(String),

	#[error("Invalid value for {0}: {1}")]
	Value(String, String),

	#[error("Unknown opcode group: {0}")]
	Opcode(String),
}

bitflags! {
	/// Output switches for the disassembler
	#[derive(Default)]
	pub struct AsmFlags: u8 {
		/// Render numbers in hexadecimal by default
		const HEX = 1;
		/// Render mnemonics and hex digits in lower case
		const LOWER = 2;
		/// Decode instructions across the 64K boundary
		const WRAP = 4;
	}
}

bitflags! {
	/// Optional opcode groups that are rendered as DEFB unless enabled
	#[derive(Default)]
	pub struct Opcodes: u16 {
		const ED63 = 1;
		const ED6B = 2;
		const ED70 = 4;
		const ED71 = 8;
		const IM = 16;
		const NEG = 32;
		const RETN = 64;
		const XYCB = 128;
		const ALL = Self::ED63.bits | Self::ED6B.bits | Self::ED70.bits | Self::ED71.bits
			| Self::IM.bits | Self::NEG.bits | Self::RETN.bits | Self::XYCB.bits;
	}
}

impl FromStr for Opcodes {
	type Err = ConfigError;

	/// Parses a comma-separated list of group names
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut opcodes = Opcodes::empty();

		for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
			opcodes |= match name.to_ascii_uppercase().as_str() {
				"ED63" => Opcodes::ED63,
				"ED6B" => Opcodes::ED6B,
				"ED70" => Opcodes::ED70,
				"ED71" => Opcodes::ED71,
				"IM" => Opcodes::IM,
				"NEG" => Opcodes::NEG,
				"RETN" => Opcodes::RETN,
				"XYCB" => Opcodes::XYCB,
				"ALL" => Opcodes::ALL,
				_ => return Err(ConfigError::Opcode(name.to_owned())),
			};
		}

		Ok(opcodes)
	}
}

/// Settings consumed when a disassembler or disassembly is constructed
#[derive(Clone, Debug, PartialEq)]
pub struct DisassemblerConfig {
	pub flags: AsmFlags,
	/// Maximum number of bytes in a DEFB statement
	pub defb_size: usize,
	/// Maximum number of characters in a DEFM statement
	pub defm_size: usize,
	/// Maximum number of words in a DEFW statement
	pub defw_size: usize,
	pub opcodes: Opcodes,
	/// Entry title templates by block type; `{address}` is replaced
	pub titles: IndexMap<char, String>,
	pub ref_patterns: Vec<String>,
}

impl Default for DisassemblerConfig {
	fn default() -> Self {
		DisassemblerConfig {
			flags: AsmFlags::default(),
			defb_size: 8,
			defm_size: 65,
			defw_size: 1,
			opcodes: Opcodes::default(),
			titles: DEFAULT_TITLES.iter().map(|(c, t)| (*c, t.to_string())).collect(),
			ref_patterns: DEFAULT_REF_PATTERNS.iter().map(|p| p.to_string()).collect(),
		}
	}
}

impl DisassemblerConfig {
	/// Builds a configuration from `(name, value)` pairs applied over the defaults
	pub fn from_options<'a, I>(options: I) -> Result<DisassemblerConfig, ConfigError>
	where
		I: IntoIterator<Item = (&'a str, &'a str)>
	{
		let mut config = DisassemblerConfig::default();

		for (name, value) in options {
			config.set(name, value)?;
		}

		Ok(config)
	}

	/// Applies a single named option
	pub fn set(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
		let value = value.trim();

		match name {
			"asm_hex" => self.flags.set(AsmFlags::HEX, parse_bool(name, value)?),
			"asm_lower" => self.flags.set(AsmFlags::LOWER, parse_bool(name, value)?),
			"wrap" => self.flags.set(AsmFlags::WRAP, parse_bool(name, value)?),
			"defb_size" => self.defb_size = parse_size(name, value)?,
			"defm_size" => self.defm_size = parse_size(name, value)?,
			"defw_size" => self.defw_size = parse_size(name, value)?,
			"opcodes" => self.opcodes = value.parse()?,
			"ref_patterns" => {
				self.ref_patterns = value.split(';')
					.map(str::trim)
					.filter(|p| !p.is_empty())
					.map(str::to_owned)
					.collect();
			},
			_ => {
				let ctl = name.strip_prefix("Title-")
					.and_then(|c| {
						let mut chars = c.chars();
						chars.next().filter(|_| chars.next().is_none())
					})
					.ok_or_else(|| ConfigError::UnknownOption(name.to_owned()))?;

				self.titles.insert(ctl, value.to_owned());
			},
		}

		Ok(())
	}

	/// Gets the title template for a block type
	pub fn title(&self, ctl: char) -> Option<&str> {
		self.titles.get(&ctl).map(String::as_str)
	}
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
	match value.to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" => Ok(true),
		"0" | "false" | "no" => Ok(false),
		_ => Err(ConfigError::Value(name.to_owned(), value.to_owned())),
	}
}

fn parse_size(name: &str, value: &str) -> Result<usize, ConfigError> {
	match value.parse::<usize>() {
		Ok(size) if size > 0 => Ok(size),
		_ => Err(ConfigError::Value(name.to_owned(), value.to_owned())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = DisassemblerConfig::default();

		assert_eq!(config.flags, AsmFlags::empty());
		assert_eq!((config.defb_size, config.defm_size, config.defw_size), (8, 65, 1));
		assert!(config.opcodes.is_empty());
		assert_eq!(config.title('c'), Some("Routine at {address}"));
		assert_eq!(config.title('i'), Some("Ignored"));
		assert_eq!(config.ref_patterns.len(), 4);
	}

	#[test]
	fn test_opcodes() {
		assert_eq!("ED63".parse::<Opcodes>(), Ok(Opcodes::ED63));
		assert_eq!(" ed6b, neg ,".parse::<Opcodes>(), Ok(Opcodes::ED6B | Opcodes::NEG));
		assert_eq!("ALL".parse::<Opcodes>(), Ok(Opcodes::all()));
		assert_eq!("".parse::<Opcodes>(), Ok(Opcodes::empty()));
		assert_eq!("ED64".parse::<Opcodes>(), Err(ConfigError::Opcode("ED64".to_owned())));
	}

	#[test]
	fn test_options() {
		let config = DisassemblerConfig::from_options([
			("asm_hex", "1"),
			("asm_lower", "yes"),
			("defb_size", "4"),
			("opcodes", "ED70,XYCB"),
			("Title-c", "Code at {address}"),
			("ref_patterns", r"JP \i; CALL \i"),
		]);
		let config = match config {
			Ok(c) => c,
			Err(e) => panic!("{}", e),
		};

		assert_eq!(config.flags, AsmFlags::HEX | AsmFlags::LOWER);
		assert_eq!(config.defb_size, 4);
		assert_eq!(config.opcodes, Opcodes::ED70 | Opcodes::XYCB);
		assert_eq!(config.title('c'), Some("Code at {address}"));
		assert_eq!(config.ref_patterns, vec![r"JP \i".to_owned(), r"CALL \i".to_owned()]);
	}

	#[test]
	fn test_bad_options() {
		let mut config = DisassemblerConfig::default();

		assert_eq!(config.set("wrap", "maybe"), Err(ConfigError::Value("wrap".to_owned(), "maybe".to_owned())));
		assert_eq!(config.set("defm_size", "0"), Err(ConfigError::Value("defm_size".to_owned(), "0".to_owned())));
		assert_eq!(config.set("Title-cc", "x"), Err(ConfigError::UnknownOption("Title-cc".to_owned())));
		assert_eq!(config.set("colour", "1"), Err(ConfigError::UnknownOption("colour".to_owned())));
	}
}

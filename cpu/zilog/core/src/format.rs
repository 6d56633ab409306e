use std::fmt::{
	Display,
	Formatter,
	self
};

use crate::config::AsmFlags;

/// Numeric base of an operand
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Base {
	Binary,
	Char,
	Decimal,
	Hex,
	Negative,
	#[default]
	Default,
}

impl Base {
	/// Gets the base for its control file letter
	pub const fn from_char(c: char) -> Option<Base> {
		match c {
			'b' => Some(Base::Binary),
			'c' => Some(Base::Char),
			'd' => Some(Base::Decimal),
			'h' => Some(Base::Hex),
			'm' => Some(Base::Negative),
			'n' => Some(Base::Default),
			_ => None,
		}
	}

	/// Gets the control file letter of the base
	pub const fn to_char(self) -> char {
		match self {
			Base::Binary => 'b',
			Base::Char => 'c',
			Base::Decimal => 'd',
			Base::Hex => 'h',
			Base::Negative => 'm',
			Base::Default => 'n',
		}
	}

	/// Reduces bases that cannot render an address or displacement to the default
	pub const fn numeric(self) -> Base {
		match self {
			Base::Char | Base::Negative => Base::Default,
			b => b,
		}
	}
}

/// Zero, one or two base letters, as in `b`, `hd` or nothing
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct BaseSpec {
	pub first: Option<Base>,
	pub second: Option<Base>,
}

impl BaseSpec {
	/// A single base
	pub const fn single(base: Base) -> BaseSpec {
		BaseSpec {
			first: Some(base),
			second: None,
		}
	}

	/// Parses up to two base letters; anything else is rejected
	pub fn parse(s: &str) -> Option<BaseSpec> {
		let mut chars = s.chars();
		let first = match chars.next() {
			Some(c) => Some(Base::from_char(c)?),
			None => None,
		};
		let second = match chars.next() {
			Some(c) => Some(Base::from_char(c)?),
			None => None,
		};

		match chars.next() {
			Some(_) => None,
			None => Some(BaseSpec { first, second }),
		}
	}

	/// Whether no base is given at all
	pub const fn is_empty(&self) -> bool {
		self.first.is_none()
	}

	/// The base of the first numeric operand
	pub fn first(&self) -> Base {
		self.first.unwrap_or_default()
	}

	/// The base of the last numeric operand
	pub fn last(&self) -> Base {
		self.second.or(self.first).unwrap_or_default()
	}
}

impl Display for BaseSpec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for base in [self.first, self.second].into_iter().flatten() {
			write!(f, "{}", base.to_char())?;
		}

		Ok(())
	}
}

/// Whether a byte can appear inside a quoted string literal
pub const fn is_printable(value: u8) -> bool {
	matches!(value, 32..=126) && value != b'^' && value != b'`'
}

/// Quotes text as a string literal, escaping `"` and `\`
pub fn quote(text: &str) -> String {
	let mut s = String::with_capacity(text.len() + 2);
	s.push('"');

	for c in text.chars() {
		if c == '"' || c == '\\' {
			s.push('\\');
		}
		s.push(c);
	}
	s.push('"');

	s
}

/// Lower-cases an operation, leaving the contents of string literals alone
pub fn lower_case(operation: &str) -> String {
	let mut s = String::with_capacity(operation.len());
	let mut quoted = false;
	let mut escaped = false;

	for c in operation.chars() {
		if quoted {
			if escaped {
				escaped = false;
			} else if c == '\\' {
				escaped = true;
			} else if c == '"' {
				quoted = false;
			}
			s.push(c);
		} else {
			if c == '"' {
				quoted = true;
			}
			s.push(c.to_ascii_lowercase());
		}
	}

	s
}

/// Renders byte and word operands in a requested base
#[derive(Clone, Copy, Debug, Default)]
pub struct OperandFormatter {
	hex: bool,
	lower: bool,
}

impl OperandFormatter {
	pub fn new(flags: AsmFlags) -> OperandFormatter {
		OperandFormatter {
			hex: flags.contains(AsmFlags::HEX),
			lower: flags.contains(AsmFlags::LOWER),
		}
	}

	/// Formats a byte value; anything above 255 is formatted as a word
	pub fn format_byte(&self, value: u32, base: Base) -> String {
		if value > 255 {
			return self.format_word(value, base)
		}

		match base {
			Base::Binary => format!("%{:08b}", value),
			Base::Char => {
				let c = (value & 127) as u8;

				if !is_printable(c) {
					self.format_byte(value, Base::Default)
				} else if value & 128 == 0 {
					quote(&(c as char).to_string())
				} else {
					format!("{}+{}", quote(&(c as char).to_string()), self.format_byte(128, Base::Default))
				}
			},
			Base::Decimal => value.to_string(),
			Base::Hex => self.hex_digits(format!("${:02X}", value)),
			Base::Negative if value > 0 => format!("-{}", self.format_byte(256 - value, Base::Default)),
			Base::Negative | Base::Default => {
				if self.hex {
					self.format_byte(value, Base::Hex)
				} else {
					value.to_string()
				}
			},
		}
	}

	/// Formats a word value
	pub fn format_word(&self, value: u32, base: Base) -> String {
		let value = value & 0xFFFF;

		match base {
			Base::Binary => format!("%{:016b}", value),
			Base::Decimal => value.to_string(),
			Base::Hex => self.hex_digits(format!("${:04X}", value)),
			Base::Negative if value > 0 => format!("-{}", self.format_word(65536 - value, Base::Default)),
			Base::Char | Base::Negative | Base::Default => {
				if self.hex {
					self.format_word(value, Base::Hex)
				} else {
					value.to_string()
				}
			},
		}
	}

	fn hex_digits(&self, s: String) -> String {
		if self.lower {
			s.to_ascii_lowercase()
		} else {
			s
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_format_byte() {
		let f = OperandFormatter::default();

		assert_eq!(f.format_byte(0x41, Base::Char), "\"A\"");
		assert_eq!(f.format_byte(0xC1, Base::Char), "\"A\"+128");
		assert_eq!(f.format_byte(0x22, Base::Char), "\"\\\"\"");
		assert_eq!(f.format_byte(94, Base::Char), "94");
		assert_eq!(f.format_byte(1, Base::Negative), "-255");
		assert_eq!(f.format_byte(0, Base::Negative), "0");
		assert_eq!(f.format_byte(5, Base::Binary), "%00000101");
		assert_eq!(f.format_byte(171, Base::Hex), "$AB");
		assert_eq!(f.format_byte(171, Base::Default), "171");
		assert_eq!(f.format_byte(300, Base::Default), "300");
	}

	#[test]
	fn test_format_word() {
		let f = OperandFormatter::default();

		assert_eq!(f.format_word(255, Base::Hex), "$00FF");
		assert_eq!(f.format_word(65535, Base::Negative), "-1");
		assert_eq!(f.format_word(1, Base::Binary), "%0000000000000001");
		assert_eq!(f.format_word(40000, Base::Char), "40000");
	}

	#[test]
	fn test_hex_lower() {
		let f = OperandFormatter::new(AsmFlags::HEX | AsmFlags::LOWER);

		assert_eq!(f.format_byte(0xC1, Base::Char), "\"A\"+$80");
		assert_eq!(f.format_byte(0xAB, Base::Default), "$ab");
		assert_eq!(f.format_word(0xBEEF, Base::Decimal), "48879");
		assert_eq!(f.format_byte(1, Base::Negative), "-$ff");
	}

	#[test]
	fn test_base_spec() {
		assert_eq!(BaseSpec::parse(""), Some(BaseSpec::default()));
		assert_eq!(BaseSpec::parse("bh"), Some(BaseSpec { first: Some(Base::Binary), second: Some(Base::Hex) }));
		assert_eq!(BaseSpec::parse("x"), None);
		assert_eq!(BaseSpec::parse("hhh"), None);
		assert_eq!(BaseSpec::single(Base::Char).last(), Base::Char);
		assert_eq!(BaseSpec::default().first(), Base::Default);
		assert_eq!(BaseSpec::parse("dh").map(|b| b.to_string()), Some("dh".to_owned()));
	}

	#[test]
	fn test_lower_case() {
		assert_eq!(lower_case("LD A,\"X\""), "ld a,\"X\"");
		assert_eq!(lower_case("DEFM \"A\\\"B\",$FF"), "defm \"A\\\"B\",$ff");
		assert_eq!(is_printable(b'`'), false);
	}
}

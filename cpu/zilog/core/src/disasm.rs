use zsk_processors_core::{
	Device,
	Memory,
	MEMORY_SIZE
};

use crate::{
	config::{
		AsmFlags,
		DisassemblerConfig,
		Opcodes
	},
	format::{
		Base,
		BaseSpec,
		is_printable,
		lower_case,
		OperandFormatter,
		quote
	},
	opcodes::{
		CB_OPCODES,
		DD_OPCODES,
		DDCB_OPCODES,
		Decode,
		ED_OPCODES,
		FDCB_OPCODES,
		Opcode,
		OPCODES
	}
};

/// A run of bytes or instructions sharing one numeric base
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Sublength {
	/// Number of bytes; zero means "not given"
	pub length: usize,
	pub base: BaseSpec,
}

impl Sublength {
	pub const fn new(length: usize, base: BaseSpec) -> Sublength {
		Sublength {
			length,
			base,
		}
	}
}

/// An instruction comment spanning `rowspan` instructions
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Comment {
	pub rowspan: usize,
	/// Comment segments; each `:` continuation starts a new one
	pub text: Vec<String>,
}

/// A decoded instruction or data statement
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Instruction {
	pub address: usize,
	pub operation: String,
	pub bytes: Vec<u8>,
	/// Set when the bytes are one of several encodings of the same operation
	pub variant: bool,
	/// Entry type on the first instruction of an entry, `*` on other entry points
	pub ctl: Option<char>,
	pub label: Option<String>,
	pub refs: Vec<usize>,
	pub rrefs: Vec<usize>,
	pub asm_directives: Vec<String>,
	/// Addresses of the entries that refer to this instruction
	pub referrers: Vec<usize>,
	pub comment: Option<Comment>,
}

impl Instruction {
	pub fn new(address: usize, operation: String, bytes: Vec<u8>) -> Instruction {
		Instruction {
			address,
			operation,
			bytes,
			..Default::default()
		}
	}

	/// Number of bytes consumed
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Address following the instruction, which may lie past 65535
	pub fn end(&self) -> usize {
		self.address + self.len()
	}
}

fn fill(template: &str, operand: &str) -> String {
	template.replacen("{}", operand, 1)
}

fn ix_to_iy(template: &str) -> String {
	template.replace("IX", "IY").replace("ix", "iy")
}

/// Z80 disassembler over a 64K memory snapshot
pub struct Disassembler<'a> {
	memory: &'a Memory,
	formatter: OperandFormatter,
	flags: AsmFlags,
	opcodes: Opcodes,
	defb_size: usize,
	defm_size: usize,
	defw_size: usize,
}

impl<'a> Disassembler<'a> {
	pub fn new(memory: &'a Memory, config: &DisassemblerConfig) -> Disassembler<'a> {
		Disassembler {
			memory,
			formatter: OperandFormatter::new(config.flags),
			flags: config.flags,
			opcodes: config.opcodes,
			defb_size: config.defb_size.max(1),
			defm_size: config.defm_size.max(1),
			defw_size: config.defw_size.max(1),
		}
	}

	pub fn formatter(&self) -> &OperandFormatter {
		&self.formatter
	}

	/// Decodes the instructions in `[start, end)`; the last one may run past `end`
	pub fn disassemble(&self, start: usize, end: usize, base: BaseSpec) -> Vec<Instruction> {
		let end = end.min(MEMORY_SIZE);
		let mut instructions = vec![];
		let mut address = start;

		while address < end {
			let instruction = self.decode(address, &base);
			address += instruction.len();
			instructions.push(instruction);
		}

		instructions
	}

	/// Renders `[start, end)` as DEFB statements
	pub fn defb_range(&self, start: usize, end: usize, sublengths: &[Sublength]) -> Vec<Instruction> {
		self.statements(start, end, sublengths, self.defb_size)
			.into_iter()
			.map(|(address, parts)| {
				let mut items = vec![];
				let mut bytes = vec![];

				for part in parts {
					let data = self.memory.read(address + bytes.len(), part.length);
					let base = part.base.first();

					items.extend(self.byte_items(&data, base, base == Base::Char));
					bytes.extend(data);
				}

				self.statement("DEFB", address, &items, bytes)
			})
			.collect()
	}

	/// Renders `[start, end)` as DEFM statements; parts without a base are text
	pub fn defm_range(&self, start: usize, end: usize, sublengths: &[Sublength]) -> Vec<Instruction> {
		self.statements(start, end, sublengths, self.defm_size)
			.into_iter()
			.map(|(address, parts)| {
				let mut items = vec![];
				let mut bytes = vec![];

				for part in parts {
					let data = self.memory.read(address + bytes.len(), part.length);
					let text = part.base.is_empty() || part.base.first() == Base::Char;
					let base = if text { Base::Default } else { part.base.first() };

					items.extend(self.byte_items(&data, base, text));
					bytes.extend(data);
				}

				self.statement("DEFM", address, &items, bytes)
			})
			.collect()
	}

	/// Renders `[start, end)` as DEFW statements; an odd trailing byte becomes a DEFB
	pub fn defw_range(&self, start: usize, end: usize, sublengths: &[Sublength]) -> Vec<Instruction> {
		let mut instructions = vec![];

		for (address, parts) in self.statements(start, end, sublengths, self.defw_size * 2) {
			let length: usize = parts.iter().map(|p| p.length).sum();
			let mut data = self.memory.read(address, length);
			let odd = data.len() % 2 == 1;
			let tail = if odd { data.pop() } else { None };

			// Words straddle part boundaries; each takes the base of the part holding its low byte
			let bases: Vec<Base> = parts.iter()
				.flat_map(|p| std::iter::repeat(p.base.first()).take(p.length))
				.collect();

			if !data.is_empty() {
				let items: Vec<String> = data.chunks(2)
					.zip(bases.iter().step_by(2))
					.map(|(word, base)| self.formatter.format_word(u16::from_le_bytes([word[0], word[1]]) as u32, *base))
					.collect();

				instructions.push(self.statement("DEFW", address, &items, data));
			}

			if let Some(byte) = tail {
				instructions.push(self.raw_defb(address + length - 1, vec![byte]));
			}
		}

		instructions
	}

	/// Renders `[start, end)` as DEFS statements; non-uniform bytes fall back to DEFB
	pub fn defs_range(&self, start: usize, end: usize, sublengths: &[Sublength]) -> Vec<Instruction> {
		let end = end.min(MEMORY_SIZE);
		let (step, count_base) = match sublengths.first() {
			Some(s) if s.length > 0 => (s.length, s.base.first()),
			Some(s) => (end.saturating_sub(start), s.base.first()),
			None => (end.saturating_sub(start), Base::Default),
		};
		let fill_base = sublengths.get(1)
			.map(|s| s.base)
			.filter(|b| !b.is_empty());

		let mut instructions = vec![];
		let mut address = start;

		while address < end {
			let length = step.min(end - address);
			let bytes = self.memory.read(address, length);
			let fill = bytes[0];

			if bytes.iter().any(|b| *b != fill) {
				instructions.push(self.raw_defb(address, bytes));
			} else {
				let mut operation = format!("DEFS {}", self.formatter.format_byte(length as u32, count_base.numeric()));

				if fill != 0 || fill_base.is_some() {
					let base = fill_base.map(|b| b.first()).unwrap_or_default();
					operation.push(',');
					operation.push_str(&self.formatter.format_byte(fill as u32, base));
				}

				instructions.push(Instruction::new(address, self.case(operation), bytes));
			}

			address += length;
		}

		instructions
	}

	/// Splits a range into statements, each described by its parts
	fn statements(&self, start: usize, end: usize, sublengths: &[Sublength], size: usize) -> Vec<(usize, Vec<Sublength>)> {
		let end = end.min(MEMORY_SIZE);
		let parts = match sublengths.first() {
			Some(s) if s.length > 0 => sublengths.to_vec(),
			Some(s) => vec![Sublength::new(size, s.base)],
			None => vec![Sublength::new(size, BaseSpec::default())],
		};
		let step: usize = parts.iter().map(|p| p.length).sum();

		let mut statements = vec![];
		let mut address = start;

		while address < end {
			let stop = (address + step).min(end);
			let mut statement = vec![];
			let mut a = address;

			for part in &parts {
				let length = part.length.min(stop - a);

				if length > 0 {
					statement.push(Sublength::new(length, part.base));
					a += length;
				}
			}

			statements.push((address, statement));
			address = stop;
		}

		statements
	}

	/// Formats bytes as items, gathering printable runs into strings when `text` is set
	fn byte_items(&self, data: &[u8], base: Base, text: bool) -> Vec<String> {
		if !text {
			return data.iter()
				.map(|b| self.formatter.format_byte(*b as u32, base))
				.collect()
		}

		let mut items = vec![];
		let mut run = String::new();

		for b in data {
			if is_printable(*b) {
				run.push(*b as char);
				continue;
			}

			if !run.is_empty() {
				items.push(quote(&run));
				run.clear();
			}
			items.push(self.formatter.format_byte(*b as u32, base));
		}

		if !run.is_empty() {
			items.push(quote(&run));
		}

		items
	}

	fn statement(&self, directive: &str, address: usize, items: &[String], bytes: Vec<u8>) -> Instruction {
		Instruction::new(address, self.case(format!("{} {}", directive, items.join(","))), bytes)
	}

	fn raw_defb(&self, address: usize, bytes: Vec<u8>) -> Instruction {
		let items = self.byte_items(&bytes, Base::Default, false);
		self.statement("DEFB", address, &items, bytes)
	}

	fn case(&self, operation: String) -> String {
		if self.flags.contains(AsmFlags::LOWER) {
			lower_case(&operation)
		} else {
			operation
		}
	}

	fn decode(&self, address: usize, base: &BaseSpec) -> Instruction {
		let length = self.length(address);

		if address + length > MEMORY_SIZE && !self.flags.contains(AsmFlags::WRAP) {
			return self.raw_defb(address, self.memory.read(address, MEMORY_SIZE - address))
		}

		let bytes = self.memory.read(address, length);

		match self.operation(address, &bytes, base) {
			Some((operation, variant)) => {
				let mut instruction = Instruction::new(address, self.case(operation), bytes);
				instruction.variant = variant;
				instruction
			},
			None => self.raw_defb(address, bytes),
		}
	}

	/// Length of the instruction at an address, following any prefixes
	fn length(&self, address: usize) -> usize {
		match OPCODES[self.memory.get_u8(address) as usize].decode {
			Decode::Byte | Decode::Jr | Decode::Cb => 2,
			Decode::Word => 3,
			Decode::Ed => match ED_OPCODES[self.memory.get_u8(address + 1) as usize].decode {
				Decode::Word => 4,
				_ => 2,
			},
			Decode::Dd | Decode::Fd => match DD_OPCODES[self.memory.get_u8(address + 1) as usize].decode {
				Decode::Defb => 1,
				Decode::NoArg => 2,
				Decode::Byte | Decode::Index => 3,
				_ => 4,
			},
			_ => 1,
		}
	}

	/// Renders the operation for the bytes of one instruction; `None` means DEFB
	fn operation(&self, address: usize, bytes: &[u8], base: &BaseSpec) -> Option<(String, bool)> {
		let op = &OPCODES[bytes[0] as usize];

		match op.decode {
			Decode::NoArg => Some((op.mnemonic.to_owned(), false)),
			Decode::Byte => Some((fill(op.mnemonic, &self.byte(bytes[1], base.first())), false)),
			Decode::Word => Some((fill(op.mnemonic, &self.word(&bytes[1..], base.first())), false)),
			Decode::Jr => self.jr(address, op.mnemonic, bytes[1], base.first()).map(|o| (o, false)),
			Decode::Rst => Some((self.rst(op.mnemonic, base.first()), false)),
			Decode::Cb => Some((CB_OPCODES[bytes[1] as usize].to_owned(), false)),
			Decode::Ed => self.ed(bytes, base),
			Decode::Dd | Decode::Fd if bytes.len() < 2 => None,
			Decode::Dd => self.index(bytes, base, &DDCB_OPCODES, false),
			Decode::Fd => self.index(bytes, base, &FDCB_OPCODES, true),
			_ => None,
		}
	}

	fn byte(&self, value: u8, base: Base) -> String {
		self.formatter.format_byte(value as u32, base)
	}

	fn word(&self, bytes: &[u8], base: Base) -> String {
		self.formatter.format_word(u16::from_le_bytes([bytes[0], bytes[1]]) as u32, base)
	}

	fn displacement(&self, value: u8, base: Base) -> String {
		let d = value as i8;
		let sign = if d < 0 { '-' } else { '+' };

		format!("{}{}", sign, self.formatter.format_byte(d.unsigned_abs() as u32, base.numeric()))
	}

	fn jr(&self, address: usize, template: &str, offset: u8, base: Base) -> Option<String> {
		let target = address as isize + 2 + (offset as i8) as isize;
		let target = if (0..MEMORY_SIZE as isize).contains(&target) {
			target as usize
		} else if self.flags.contains(AsmFlags::WRAP) {
			target.rem_euclid(MEMORY_SIZE as isize) as usize
		} else {
			return None
		};

		Some(fill(template, &self.formatter.format_word(target as u32, base.numeric())))
	}

	fn rst(&self, template: &str, base: Base) -> String {
		let (prefix, restart) = template.split_at(4);

		format!("{}{}", prefix, self.formatter.format_byte(restart.parse().unwrap_or_default(), base.numeric()))
	}

	fn ed(&self, bytes: &[u8], base: &BaseSpec) -> Option<(String, bool)> {
		let op = &ED_OPCODES[bytes[1] as usize];

		if !self.opcodes.contains(op.group) {
			return None
		}

		let operation = match op.decode {
			Decode::NoArg => op.mnemonic.to_owned(),
			Decode::Word => fill(op.mnemonic, &self.word(&bytes[2..], base.first())),
			_ => return None,
		};

		Some((operation, !op.group.is_empty()))
	}

	fn index(&self, bytes: &[u8], base: &BaseSpec, bit_ops: &[Opcode; 256], iy: bool) -> Option<(String, bool)> {
		let op = &DD_OPCODES[bytes[1] as usize];
		let template = if iy {
			ix_to_iy(op.mnemonic)
		} else {
			op.mnemonic.to_owned()
		};

		let operation = match op.decode {
			Decode::NoArg => template,
			Decode::Byte => fill(&template, &self.byte(bytes[2], base.first())),
			Decode::Word => fill(&template, &self.word(&bytes[2..], base.first())),
			Decode::Index => fill(&template, &self.displacement(bytes[2], base.first())),
			Decode::IndexByte => fill(
				&fill(&template, &self.displacement(bytes[2], base.first())),
				&self.byte(bytes[3], base.last())
			),
			Decode::IndexCb => {
				let op = &bit_ops[bytes[3] as usize];

				if !self.opcodes.contains(op.group) {
					return None
				}

				return Some((fill(op.mnemonic, &self.displacement(bytes[2], base.first())), !op.group.is_empty()))
			},
			_ => return None,
		};

		Some((operation, false))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(options: &[(&str, &str)]) -> DisassemblerConfig {
		match DisassemblerConfig::from_options(options.iter().copied()) {
			Ok(c) => c,
			Err(e) => panic!("{}", e),
		}
	}

	fn operations(instructions: &[Instruction]) -> Vec<(usize, &str)> {
		instructions.iter().map(|i| (i.address, i.operation.as_str())).collect()
	}

	fn spec(s: &str) -> BaseSpec {
		BaseSpec::parse(s).unwrap_or_default()
	}

	#[test]
	fn test_xor_ret() {
		let memory = Memory::from_bytes(0, &[0xAF, 0xC9]);
		let config = DisassemblerConfig::default();
		let instructions = Disassembler::new(&memory, &config).disassemble(0, 2, BaseSpec::default());

		assert_eq!(operations(&instructions), vec![(0, "XOR A"), (1, "RET")]);
		assert_eq!(instructions.iter().map(Instruction::len).sum::<usize>(), 2);
	}

	#[test]
	fn test_ld_ix() {
		let memory = Memory::from_bytes(0, &[0xDD, 0x21, 0x00, 0x40]);
		let config = DisassemblerConfig::default();
		let instructions = Disassembler::new(&memory, &config).disassemble(0, 4, spec("h"));

		assert_eq!(operations(&instructions), vec![(0, "LD IX,$4000")]);
		assert_eq!(instructions[0].len(), 4);
	}

	#[test]
	fn test_ed63() {
		let memory = Memory::from_bytes(0, &[0xED, 0x63, 0x00, 0x40]);

		let config = DisassemblerConfig::default();
		let instructions = Disassembler::new(&memory, &config).disassemble(0, 4, BaseSpec::default());
		assert_eq!(operations(&instructions), vec![(0, "DEFB 237,99,0,64")]);

		let config = self::config(&[("asm_hex", "1")]);
		let instructions = Disassembler::new(&memory, &config).disassemble(0, 4, BaseSpec::default());
		assert_eq!(operations(&instructions), vec![(0, "DEFB $ED,$63,$00,$40")]);

		let config = self::config(&[("opcodes", "ED63")]);
		let instructions = Disassembler::new(&memory, &config).disassemble(0, 4, BaseSpec::default());
		assert_eq!(operations(&instructions), vec![(0, "LD (16384),HL")]);
		assert!(instructions[0].variant);
	}

	#[test]
	fn test_optional_groups() {
		let memory = Memory::from_bytes(0, &[0xED, 0x4C, 0xED, 0x70, 0xED, 0x44]);

		let config = DisassemblerConfig::default();
		let instructions = Disassembler::new(&memory, &config).disassemble(0, 6, BaseSpec::default());
		assert_eq!(operations(&instructions), vec![(0, "DEFB 237,76"), (2, "DEFB 237,112"), (4, "NEG")]);

		let config = self::config(&[("opcodes", "ALL")]);
		let instructions = Disassembler::new(&memory, &config).disassemble(0, 6, BaseSpec::default());
		assert_eq!(operations(&instructions), vec![(0, "NEG"), (2, "IN F,(C)"), (4, "NEG")]);
		assert_eq!(instructions.iter().map(|i| i.variant).collect::<Vec<_>>(), vec![true, true, false]);
	}

	#[test]
	fn test_wrap() {
		let mut memory = Memory::new();
		memory.write(65535, &[0xC3, 0x00, 0x80]);

		let config = DisassemblerConfig::default();
		let instructions = Disassembler::new(&memory, &config).disassemble(65535, 65536, BaseSpec::default());
		assert_eq!(operations(&instructions), vec![(65535, "DEFB 195")]);
		assert_eq!(instructions[0].bytes, vec![0xC3]);

		let config = self::config(&[("wrap", "1")]);
		let instructions = Disassembler::new(&memory, &config).disassemble(65535, 65536, BaseSpec::default());
		assert_eq!(operations(&instructions), vec![(65535, "JP 32768")]);
		assert_eq!(instructions[0].bytes, vec![0xC3, 0x00, 0x80]);
	}

	#[test]
	fn test_relative_jumps() {
		let memory = Memory::from_bytes(0, &[0x18, 0xFE, 0x10, 0x80, 0x20, 0x10]);

		let config = DisassemblerConfig::default();
		let instructions = Disassembler::new(&memory, &config).disassemble(0, 6, BaseSpec::default());
		assert_eq!(operations(&instructions), vec![(0, "JR 0"), (2, "DEFB 16,128"), (4, "JR NZ,22")]);

		let config = self::config(&[("wrap", "1")]);
		let instructions = Disassembler::new(&memory, &config).disassemble(2, 4, spec("h"));
		assert_eq!(operations(&instructions), vec![(2, "DJNZ $FF84")]);
	}

	#[test]
	fn test_index_registers() {
		let memory = Memory::from_bytes(0, &[
			0xDD, 0x36, 0xFE, 0x41,
			0xFD, 0x7E, 0x05,
			0xDD, 0x00,
			0xFD, 0x26, 0x10,
			0xDD, 0xCB, 0x03, 0xC6,
			0xFD, 0xCB, 0x03, 0xC7
		]);

		let config = DisassemblerConfig::default();
		let instructions = Disassembler::new(&memory, &config).disassemble(0, 20, spec("dc"));
		assert_eq!(operations(&instructions), vec![
			(0, "LD (IX-2),\"A\""),
			(4, "LD A,(IY+5)"),
			(7, "DEFB 221"),
			(8, "NOP"),
			(9, "LD IYh,16"),
			(12, "SET 0,(IX+3)"),
			(16, "DEFB 253,203,3,199"),
		]);

		let config = self::config(&[("opcodes", "XYCB")]);
		let instructions = Disassembler::new(&memory, &config).disassemble(16, 20, BaseSpec::default());
		assert_eq!(operations(&instructions), vec![(16, "SET 0,(IY+3),A")]);
		assert!(instructions[0].variant);
	}

	#[test]
	fn test_rst_and_case() {
		let memory = Memory::from_bytes(0, &[0xFF, 0x3E, 0x41, 0x21, 0xAB, 0xCD]);

		let config = DisassemblerConfig::default();
		let instructions = Disassembler::new(&memory, &config).disassemble(0, 1, spec("h"));
		assert_eq!(operations(&instructions), vec![(0, "RST $38")]);

		let config = self::config(&[("asm_hex", "1"), ("asm_lower", "1")]);
		let disassembler = Disassembler::new(&memory, &config);
		assert_eq!(operations(&disassembler.disassemble(1, 3, spec("c"))), vec![(1, "ld a,\"A\"")]);
		assert_eq!(operations(&disassembler.disassemble(3, 6, BaseSpec::default())), vec![(3, "ld hl,$cdab")]);
	}

	#[test]
	fn test_stray_prefixes() {
		let memory = Memory::from_bytes(0, &[0xFD, 0xFD, 0x21, 0x00, 0x40, 0xDD]);
		let config = DisassemblerConfig::default();
		let instructions = Disassembler::new(&memory, &config).disassemble(0, 6, BaseSpec::default());

		assert_eq!(operations(&instructions), vec![(0, "DEFB 253"), (1, "LD IY,16384"), (5, "DEFB 221")]);
	}

	#[test]
	fn test_bytes_reproduce_memory() {
		let data: Vec<u8> = (0..=255).collect();
		let memory = Memory::from_bytes(0x8000, &data);
		let config = DisassemblerConfig::default();
		let instructions = Disassembler::new(&memory, &config).disassemble(0x8000, 0x8100, BaseSpec::default());

		let bytes: Vec<u8> = instructions.iter().flat_map(|i| i.bytes.iter().copied()).collect();
		assert_eq!(bytes, memory.read(0x8000, bytes.len()));

		for pair in instructions.windows(2) {
			assert_eq!(pair[0].end(), pair[1].address);
		}
	}

	#[test]
	fn test_defb_range() {
		let memory = Memory::from_bytes(0, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, b'H', b'i', 0, 0xC1]);
		let config = DisassemblerConfig::default();
		let disassembler = Disassembler::new(&memory, &config);

		assert_eq!(operations(&disassembler.defb_range(0, 10, &[])), vec![
			(0, "DEFB 1,2,3,4,5,6,7,8"),
			(8, "DEFB 9,10"),
		]);
		assert_eq!(operations(&disassembler.defb_range(10, 14, &[Sublength::new(0, spec("c"))])), vec![
			(10, "DEFB \"Hi\",0,\"A\"+128"),
		]);
		assert_eq!(operations(&disassembler.defb_range(0, 6, &[Sublength::new(1, spec("h")), Sublength::new(2, spec("b"))])), vec![
			(0, "DEFB $01,%00000010,%00000011"),
			(3, "DEFB $04,%00000101,%00000110"),
		]);
	}

	#[test]
	fn test_defm_range() {
		let memory = Memory::from_bytes(0, b"Hello\r\"q\"");
		let config = DisassemblerConfig::default();
		let disassembler = Disassembler::new(&memory, &config);

		assert_eq!(operations(&disassembler.defm_range(0, 9, &[])), vec![(0, "DEFM \"Hello\",13,\"\\\"q\\\"\"")]);
		assert_eq!(operations(&disassembler.defm_range(0, 2, &[Sublength::new(0, spec("h"))])), vec![(0, "DEFM $48,$65")]);
	}

	#[test]
	fn test_defw_range() {
		let memory = Memory::from_bytes(0, &[0x34, 0x12, 0x78, 0x56, 0x01]);
		let config = DisassemblerConfig::default();
		let disassembler = Disassembler::new(&memory, &config);

		assert_eq!(operations(&disassembler.defw_range(0, 5, &[])), vec![
			(0, "DEFW 4660"),
			(2, "DEFW 22136"),
			(4, "DEFB 1"),
		]);
		assert_eq!(operations(&disassembler.defw_range(0, 4, &[Sublength::new(4, spec("h"))])), vec![
			(0, "DEFW $1234,$5678"),
		]);

		let instructions = disassembler.defw_range(0, 4, &[Sublength::new(1, spec("h")), Sublength::new(3, spec("d"))]);
		assert_eq!(operations(&instructions), vec![(0, "DEFW $1234,22136")]);
		assert_eq!(instructions[0].len(), 4);
		assert_eq!(operations(&disassembler.defw_range(0, 3, &[Sublength::new(1, spec("")), Sublength::new(2, spec(""))])), vec![
			(0, "DEFW 4660"),
			(2, "DEFB 120"),
		]);
	}

	#[test]
	fn test_defs_range() {
		let mut memory = Memory::new();
		memory.write(10, &[255; 4]);
		memory.write(14, &[1, 2, 3]);

		let config = DisassemblerConfig::default();
		let disassembler = Disassembler::new(&memory, &config);

		assert_eq!(operations(&disassembler.defs_range(0, 10, &[])), vec![(0, "DEFS 10")]);
		assert_eq!(operations(&disassembler.defs_range(10, 14, &[])), vec![(10, "DEFS 4,255")]);
		assert_eq!(operations(&disassembler.defs_range(14, 17, &[])), vec![(14, "DEFB 1,2,3")]);
		assert_eq!(operations(&disassembler.defs_range(0, 4, &[Sublength::new(2, spec("h")), Sublength::new(0, spec("b"))])), vec![
			(0, "DEFS $02,%00000000"),
			(2, "DEFS $02,%00000000"),
		]);
	}
}

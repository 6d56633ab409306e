use indexmap::IndexMap;
use log::{
	debug,
	warn
};

use std::collections::HashMap;

use zsk_processors_core::{
	Memory,
	MEMORY_SIZE
};

use crate::{
	config::{
		ConfigError,
		DisassemblerConfig
	},
	ctl::{
		Block,
		CtlParser,
		parse_addresses,
		parse_refs,
		SubBlock
	},
	disasm::{
		Comment,
		Disassembler,
		Instruction
	},
	format::Base,
	refs::RefPattern
};

/// The decoded instructions of one sub-block, or of several merged under a multiline comment
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryBlock {
	pub ctl: char,
	pub start: usize,
	pub end: usize,
	/// Mid-block comment paragraphs
	pub header: Vec<String>,
	pub comment: Vec<String>,
	pub multiline: bool,
	pub instructions: Vec<Instruction>,
}

/// A disassembled top-level block
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entry {
	pub ctl: char,
	pub address: usize,
	pub end: usize,
	pub title: String,
	pub description: Vec<String>,
	pub registers: Vec<String>,
	pub end_comment: Vec<String>,
	pub header: Vec<String>,
	pub footer: Vec<String>,
	pub asm_directives: Vec<String>,
	pub ignoreua: IndexMap<char, Option<String>>,
	/// Addresses of the entries that refer to the first instruction
	pub referrers: Vec<usize>,
	pub blocks: Vec<EntryBlock>,
	has_title: bool,
}

impl Entry {
	/// Iterates over the instructions of every block
	pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
		self.blocks.iter().flat_map(|b| b.instructions.iter())
	}

	/// Whether the entry has a title, description, registers or header worth rendering
	pub fn has_title(&self) -> bool {
		self.has_title
	}
}

fn apply_directive(instruction: &mut Instruction, directive: &str) {
	match directive.split_once('=') {
		Some(("label", label)) => instruction.label = Some(label.to_owned()),
		Some(("refs", value)) => {
			if let Some((refs, rrefs)) = parse_refs(value) {
				instruction.refs.extend(refs);
				instruction.rrefs.extend(rrefs);
			}
		},
		Some(("rrefs", value)) => instruction.rrefs.extend(parse_addresses(value).unwrap_or_default()),
		_ => (),
	}

	instruction.asm_directives.push(directive.to_owned());
}

/// Entries built from a control model and a memory snapshot
pub struct Disassembly<'a> {
	disassembler: Disassembler<'a>,
	config: &'a DisassemblerConfig,
	patterns: Vec<RefPattern>,
	blocks: Vec<Block>,
	entries: Vec<Entry>,
	warnings: Vec<String>,
}

impl<'a> Disassembly<'a> {
	/// Applies the control model's data directives to `memory`, then builds every entry
	pub fn new(memory: &'a mut Memory, ctl: &CtlParser, config: &'a DisassemblerConfig) -> Result<Disassembly<'a>, ConfigError> {
		let patterns = config.ref_patterns.iter()
			.map(|p| RefPattern::new(p))
			.collect::<Result<Vec<_>, _>>()?;

		ctl.apply_asm_data_directives(memory);
		let memory: &'a Memory = memory;

		let mut disassembly = Disassembly {
			disassembler: Disassembler::new(memory, config),
			config,
			patterns,
			blocks: ctl.get_blocks(),
			entries: vec![],
			warnings: vec![],
		};
		disassembly.build(true, false);

		Ok(disassembly)
	}

	/// Rebuilds the entries; references are only calculated on a final pass
	pub fn build(&mut self, final_pass: bool, self_refs: bool) {
		let mut warnings = vec![];
		let entries: Vec<Entry> = self.blocks.iter()
			.map(|block| self.build_entry(block, &mut warnings))
			.collect();

		self.entries = entries;
		self.warnings = warnings;

		if final_pass {
			self.calculate_references(self_refs);
		}

		debug!("Built {} entries", self.entries.len());
	}

	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Gets the entry starting at an address
	pub fn entry_at(&self, address: usize) -> Option<&Entry> {
		self.entries.binary_search_by_key(&address, |e| e.address)
			.ok()
			.map(|i| &self.entries[i])
	}

	/// Gets the entry following another one
	pub fn next_entry(&self, entry: &Entry) -> Option<&Entry> {
		let i = self.entries.partition_point(|e| e.address <= entry.address);
		self.entries.get(i)
	}

	/// Gets the instruction at an address
	pub fn instruction_at(&self, address: usize) -> Option<&Instruction> {
		let entry = &self.entries[self.entry_index(address)?];
		entry.instructions().find(|i| i.address == address)
	}

	/// Overlapping instruction warnings from the last build
	pub fn warnings(&self) -> &[String] {
		&self.warnings
	}

	/// Index of the entry containing an address
	fn entry_index(&self, address: usize) -> Option<usize> {
		self.entries.partition_point(|e| e.address <= address)
			.checked_sub(1)
			.filter(|i| address < self.entries[*i].end)
	}

	fn build_entry(&self, block: &Block, warnings: &mut Vec<String>) -> Entry {
		let mut blocks = vec![];
		let subs = &block.blocks;
		let mut i = 0;

		while i < subs.len() {
			let sub = &subs[i];
			let mut instructions = self.decode(sub, warnings);
			let mut end = sub.end;
			let mut comment = sub.comment.clone();

			if let Some((multiline_end, text)) = &sub.multiline_comment {
				comment = text.clone();

				while i + 1 < subs.len() && subs[i + 1].start < *multiline_end {
					i += 1;
					instructions.extend(self.decode(&subs[i], warnings));
					end = subs[i].end;
				}
			}

			let rowspan = instructions.len();
			if let Some(first) = instructions.first_mut().filter(|_| !comment.is_empty()) {
				first.comment = Some(Comment {
					rowspan,
					text: comment.clone(),
				});
			}

			blocks.push(EntryBlock {
				ctl: sub.ctl,
				start: sub.start,
				end,
				header: sub.header.clone(),
				comment,
				multiline: sub.multiline_comment.is_some(),
				instructions,
			});
			i += 1;
		}

		if let Some(first) = blocks.iter_mut().find_map(|b| b.instructions.first_mut()) {
			first.ctl = Some(block.ctl);
		}

		let has_title = block.ctl != 'i'
			|| block.title.is_some()
			|| !block.description.is_empty()
			|| !block.registers.is_empty()
			|| !block.header.is_empty();

		Entry {
			ctl: block.ctl,
			address: block.start,
			end: block.end,
			title: block.title.clone().unwrap_or_else(|| self.title(block)),
			description: block.description.clone(),
			registers: block.registers.clone(),
			end_comment: block.end_comment.clone(),
			header: block.header.clone(),
			footer: block.footer.clone(),
			asm_directives: block.asm_directives.clone(),
			ignoreua: block.ignoreua.clone(),
			referrers: vec![],
			blocks,
			has_title,
		}
	}

	/// Fills in the configured title template for a block without a title
	fn title(&self, block: &Block) -> String {
		let address = self.disassembler.formatter().format_word(block.start as u32, Base::Default);

		self.config.title(block.ctl)
			.map(|t| t.replace("{address}", &address))
			.unwrap_or_default()
	}

	fn decode(&self, sub: &SubBlock, warnings: &mut Vec<String>) -> Vec<Instruction> {
		let mut instructions = match sub.ctl {
			'c' => {
				let base = sub.sublengths.first().map(|s| s.base).unwrap_or_default();
				self.disassembler.disassemble(sub.start, sub.end, base)
			},
			's' => self.disassembler.defs_range(sub.start, sub.end, &sub.sublengths),
			't' => self.disassembler.defm_range(sub.start, sub.end, &sub.sublengths),
			'w' => self.disassembler.defw_range(sub.start, sub.end, &sub.sublengths),
			_ => self.disassembler.defb_range(sub.start, sub.end, &sub.sublengths),
		};

		if let Some(last) = instructions.last() {
			if sub.end < MEMORY_SIZE && last.end() > sub.end {
				let message = format!("Instruction at {} overlaps the following instruction at {}", last.address, sub.end);
				warn!("{}", message);
				warnings.push(message);
			}
		}

		for (address, directives) in &sub.asm_directives {
			if let Some(instruction) = instructions.iter_mut().find(|i| i.address == *address) {
				for directive in directives {
					apply_directive(instruction, directive);
				}
			}
		}

		instructions
	}

	/// Records referrers and marks secondary entry points
	fn calculate_references(&mut self, self_refs: bool) {
		let mut index = HashMap::new();

		for (e, entry) in self.entries.iter().enumerate() {
			for (b, block) in entry.blocks.iter().enumerate() {
				for (i, instruction) in block.instructions.iter().enumerate() {
					index.insert(instruction.address, (e, b, i));
				}
			}
		}

		let mut references = vec![];

		for (e, entry) in self.entries.iter().enumerate() {
			for (b, block) in entry.blocks.iter().enumerate() {
				for (i, instruction) in block.instructions.iter().enumerate() {
					for address in &instruction.refs {
						if let Some(r) = self.entry_index(*address) {
							references.push((r, (e, b, i)));
						}
					}

					let operation = instruction.operation.to_uppercase();
					let target = match self.patterns.iter().find_map(|p| p.matches(&operation)) {
						Some(t) => t,
						None => continue,
					};
					let (te, tb, ti) = match index.get(&target) {
						Some(l) => *l,
						None => continue,
					};

					if self.entries[te].blocks[tb].instructions[ti].label.as_deref() == Some("") {
						continue;
					}

					if entry.ctl == 'u' && te == e {
						continue;
					}

					references.push((e, (te, tb, ti)));
				}
			}
		}

		let count = references.len();

		for (r, (te, tb, ti)) in references {
			let referrer = self.entries[r].address;
			let entry_address = self.entries[te].address;
			let instruction = &mut self.entries[te].blocks[tb].instructions[ti];

			if instruction.address != entry_address {
				instruction.ctl = Some('*');
			}

			if (r != te || self_refs) && !instruction.referrers.contains(&referrer) {
				instruction.referrers.push(referrer);
			}
		}

		let removals: Vec<((usize, usize, usize), Vec<usize>)> = index.values()
			.map(|(e, b, i)| ((*e, *b, *i), &self.entries[*e].blocks[*b].instructions[*i]))
			.filter(|(_, instruction)| !instruction.rrefs.is_empty())
			.map(|(loc, instruction)| {
				let entries = instruction.rrefs.iter()
					.filter_map(|a| self.entry_index(*a))
					.map(|r| self.entries[r].address)
					.collect();
				(loc, entries)
			})
			.collect();

		for ((e, b, i), addresses) in removals {
			self.entries[e].blocks[b].instructions[i].referrers.retain(|r| !addresses.contains(r));
		}

		for entry in &mut self.entries {
			for block in &mut entry.blocks {
				for instruction in &mut block.instructions {
					instruction.referrers.sort_unstable();
				}
			}

			let referrers = entry.instructions()
				.next()
				.map(|i| i.referrers.clone())
				.unwrap_or_default();
			entry.referrers = referrers;
		}

		debug!("Resolved {} references", count);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use zsk_processors_core::Device;

	fn config(options: &[(&str, &str)]) -> DisassemblerConfig {
		match DisassemblerConfig::from_options(options.iter().copied()) {
			Ok(c) => c,
			Err(e) => panic!("{}", e),
		}
	}

	fn disassembly<'a>(memory: &'a mut Memory, ctl: &str, max_address: usize, config: &'a DisassemblerConfig) -> Disassembly<'a> {
		let parser = CtlParser::from_text(ctl, 0, max_address);

		match Disassembly::new(memory, &parser, config) {
			Ok(d) => d,
			Err(e) => panic!("{}", e),
		}
	}

	fn operations(entry: &Entry) -> Vec<(usize, &str)> {
		entry.instructions().map(|i| (i.address, i.operation.as_str())).collect()
	}

	fn routines() -> Memory {
		let mut memory = Memory::new();
		memory.write(32768, &[0xCD, 0x04, 0x80, 0xC9, 0x3E, 0x01, 0x18, 0xFC, 0x01, 0x02]);
		memory
	}

	const ROUTINES: &str = "c 32768 Main\nc 32772\nb 32776";

	#[test]
	fn test_entries() {
		let mut memory = routines();
		let config = DisassemblerConfig::default();
		let d = disassembly(&mut memory, ROUTINES, 32778, &config);
		let entries = d.entries();

		assert_eq!(entries.len(), 3);
		assert_eq!(operations(&entries[0]), vec![(32768, "CALL 32772"), (32771, "RET")]);
		assert_eq!(operations(&entries[1]), vec![(32772, "LD A,1"), (32774, "JR 32772")]);
		assert_eq!(operations(&entries[2]), vec![(32776, "DEFB 1,2")]);

		assert_eq!(entries[0].title, "Main");
		assert_eq!(entries[1].title, "Routine at 32772");
		assert_eq!(entries[2].title, "Data block at 32776");
		assert_eq!(entries[1].instructions().next().and_then(|i| i.ctl), Some('c'));

		assert_eq!(entries[0].referrers, Vec::<usize>::new());
		assert_eq!(entries[1].referrers, vec![32768]);
		assert!(d.warnings().is_empty());
	}

	#[test]
	fn test_lookups() {
		let mut memory = routines();
		let config = DisassemblerConfig::default();
		let d = disassembly(&mut memory, ROUTINES, 32778, &config);

		let entry = d.entry_at(32772);
		assert_eq!(entry.map(|e| e.address), Some(32772));
		assert_eq!(entry.and_then(|e| d.next_entry(e)).map(|e| e.address), Some(32776));
		assert_eq!(d.entry_at(32773), None);
		assert_eq!(d.instruction_at(32774).map(|i| i.operation.as_str()), Some("JR 32772"));
		assert_eq!(d.instruction_at(32775), None);
	}

	#[test]
	fn test_self_refs() {
		let mut memory = routines();
		let config = DisassemblerConfig::default();
		let mut d = disassembly(&mut memory, ROUTINES, 32778, &config);

		d.build(true, true);
		assert_eq!(d.entries()[1].referrers, vec![32768, 32772]);

		d.build(false, false);
		assert!(d.entries()[1].referrers.is_empty());
	}

	#[test]
	fn test_entry_points() {
		let mut memory = Memory::from_bytes(30000, &[0xC3, 0x36, 0x75, 0x00, 0x00, 0x00, 0xC9]);
		let config = DisassemblerConfig::default();
		let d = disassembly(&mut memory, "c 30000\nc 30003", 30007, &config);
		let entry = &d.entries()[1];
		let ret = entry.instructions().last();

		assert_eq!(ret.map(|i| (i.address, i.ctl, i.referrers.clone())), Some((30006, Some('*'), vec![30000])));
		assert!(entry.referrers.is_empty());
	}

	#[test]
	fn test_ref_directives() {
		let mut memory = routines();
		let config = DisassemblerConfig::default();
		let ctl = format!("{}\n@ 32772 label=\n@ 32776 refs=32774:32768", ROUTINES);
		let d = disassembly(&mut memory, &ctl, 32778, &config);

		assert!(d.entries()[1].referrers.is_empty());
		assert_eq!(d.entries()[2].referrers, vec![32772]);
		assert_eq!(d.instruction_at(32772).and_then(|i| i.label.clone()), Some(String::new()));

		let ctl = format!("{}\n@ 32772 rrefs=32771", ROUTINES);
		let mut memory = routines();
		let d = disassembly(&mut memory, &ctl, 32778, &config);
		assert!(d.entries()[1].referrers.is_empty());
	}

	#[test]
	fn test_sublength_statements() {
		let mut memory = Memory::new();
		let config = DisassemblerConfig::default();
		let d = disassembly(&mut memory, "b 100\nB 100,10,3,2", 110, &config);

		assert_eq!(d.entries()[0].instructions().map(Instruction::len).collect::<Vec<_>>(), vec![3, 2, 5]);
	}

	#[test]
	fn test_multiline_merge() {
		let mut memory = Memory::new();
		let config = DisassemblerConfig::default();
		let d = disassembly(&mut memory, "c 100\nC 100,4,2 Four NOPs", 104, &config);
		let blocks = &d.entries()[0].blocks;

		assert_eq!(blocks.len(), 1);
		assert!(blocks[0].multiline);
		assert_eq!(blocks[0].instructions.len(), 4);
		assert_eq!(blocks[0].instructions[0].comment, Some(Comment { rowspan: 4, text: vec!["Four NOPs".to_owned()] }));
	}

	#[test]
	fn test_overlap() {
		let mut memory = Memory::from_bytes(100, &[0x21, 0x00, 0x00]);
		let config = DisassemblerConfig::default();
		let d = disassembly(&mut memory, "c 100\nc 102", 103, &config);

		assert_eq!(d.warnings(), &["Instruction at 100 overlaps the following instruction at 102".to_owned()]);
		assert_eq!(operations(&d.entries()[1]), vec![(102, "NOP")]);
	}

	#[test]
	fn test_titles() {
		let mut memory = Memory::new();
		let config = config(&[("asm_hex", "1"), ("asm_lower", "1")]);
		let d = disassembly(&mut memory, "c 40960\ni 40961\ni 40962 Stuff\nt 40963", 40964, &config);
		let entries = d.entries();

		assert_eq!(entries[0].title, "Routine at $a000");
		assert_eq!((entries[1].title.as_str(), entries[1].has_title()), ("Ignored", false));
		assert_eq!((entries[2].title.as_str(), entries[2].has_title()), ("Stuff", true));
		assert_eq!(operations(&entries[3]), vec![(40963, "defm $00")]);
	}

	#[test]
	fn test_data_directives() {
		let mut memory = Memory::new();
		let config = DisassemblerConfig::default();
		let d = disassembly(&mut memory, "c 100\n@ 100 defb=100:62,1", 102, &config);

		assert_eq!(operations(&d.entries()[0]), vec![(100, "LD A,1")]);
		assert_eq!(d.instruction_at(100).map(|i| i.asm_directives.clone()), Some(vec!["defb=100:62,1".to_owned()]));
	}

	#[test]
	fn test_bad_pattern() {
		let mut memory = Memory::new();
		let config = config(&[("ref_patterns", "JP (\\i")]);
		let parser = CtlParser::from_text("c 0", 0, 1);

		assert!(matches!(Disassembly::new(&mut memory, &parser, &config), Err(ConfigError::Value(_, _))));
	}
}

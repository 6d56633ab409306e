use indexmap::IndexMap;
use log::{
	debug,
	warn
};
use nom::{
	branch::alt,
	bytes::complete::take_while_m_n,
	character::complete::char,
	combinator::{
		all_consuming,
		map,
		map_opt,
		opt,
		verify
	},
	IResult,
	multi::separated_list1,
	sequence::{
		pair,
		preceded,
		terminated
	}
};
use thiserror::Error;

use std::{
	collections::{
		BTreeMap,
		BTreeSet
	},
	fs,
	io,
	mem,
	path::Path
};

use zsk_core::nom_ext::{
	double_quoted,
	int,
	parse_int,
	ws
};
use zsk_processors_core::{
	Device,
	Memory,
	MEMORY_SIZE
};

use crate::{
	disasm::Sublength,
	format::BaseSpec
};

/// ASM directives that belong to an entry rather than an instruction
const ENTRY_DIRECTIVES: [&str; 10] = [
	"assemble",
	"end",
	"equ",
	"expand",
	"if",
	"org",
	"remote",
	"replace",
	"start",
	"writer",
];

#[derive(Debug, Error)]
pub enum CtlParserError {
	#[error("I/O error")]
	IO {
		#[from]
		source: io::Error,
	},

	#[error("invalid address: {0}")]
	Address(String),

	#[error("invalid integer: {0}")]
	Integer(String),

	#[error("extra parameters after address")]
	ExtraParameters,

	#[error("missing parameters")]
	MissingParameters,

	#[error("invalid directive: '{0}'")]
	Directive(char),

	#[error("invalid @ignoreua directive suffix: '{0}'")]
	Ignoreua(String),

	#[error("loop length not specified")]
	LoopLength,

	#[error("loop count not specified")]
	LoopCount,

	#[error("blank directive with no containing block at {0}")]
	NoContainingBlock(usize),

	#[error("invalid ASM directive: {0}")]
	AsmDirective(String),

	#[error("{file}, line {line}: {source}")]
	Line {
		file: String,
		line: usize,
		#[source]
		source: Box<CtlParserError>,
	},
}

impl CtlParserError {
	/// Whether the error is reported through `errors()` rather than as a warning
	pub fn is_fatal(&self) -> bool {
		match self {
			CtlParserError::AsmDirective(_) | CtlParserError::NoContainingBlock(_) => true,
			CtlParserError::Line { source, .. } => source.is_fatal(),
			_ => false,
		}
	}
}

/// A sub-block of a control block
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubBlock {
	/// Decode type: one of `b`, `c`, `s`, `t` or `w`
	pub ctl: char,
	pub start: usize,
	pub end: usize,
	pub sublengths: Vec<Sublength>,
	/// Mid-block comment paragraphs (`N`)
	pub header: Vec<String>,
	/// Comment spanning the instructions of the sub-block
	pub comment: Vec<String>,
	/// Comment spanning every sub-block that starts before its end address
	pub multiline_comment: Option<(usize, Vec<String>)>,
	/// Instruction-level ASM directives by address
	pub asm_directives: IndexMap<usize, Vec<String>>,
	/// `@ignoreua` directives by address and comment type (`i`, `m` or `n`)
	pub ignoreua: IndexMap<(usize, char), Option<String>>,
}

/// A top-level control block
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
	pub ctl: char,
	pub start: usize,
	pub end: usize,
	pub title: Option<String>,
	pub description: Vec<String>,
	pub registers: Vec<String>,
	pub end_comment: Vec<String>,
	pub header: Vec<String>,
	pub footer: Vec<String>,
	/// Entry-level ASM directives
	pub asm_directives: Vec<String>,
	/// `@ignoreua` directives by comment type (`t`, `d`, `r` or `e`)
	pub ignoreua: IndexMap<char, Option<String>>,
	pub blocks: Vec<SubBlock>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SubCtl {
	/// Explicit sub-block type
	Type(char),
	/// Reverts to the type of the containing block
	Parent,
	/// Keeps the type of the preceding sub-block
	Inherit,
}

#[derive(Clone, Debug)]
struct Loop {
	start: usize,
	length: usize,
	count: usize,
	repeat_entries: bool,
	line: String,
}

/// The directive that `.` and `:` lines continue
#[derive(Clone, Copy, Debug)]
enum Last {
	None,
	Title(usize),
	Description(usize),
	Registers(usize),
	MidBlock(usize),
	EndComment(usize),
	Header(usize),
	Footer(usize),
	Instruction(usize),
	Multiline(usize),
}

/// Whether an ASM directive belongs to the entry it is declared on
pub fn is_entry_directive(directive: &str) -> bool {
	let name = directive.split(|c: char| !c.is_ascii_alphanumeric() && c != '-')
		.next()
		.unwrap_or_default();

	name.starts_with("set-") || ENTRY_DIRECTIVES.contains(&name)
}

/// Parses a comma-separated list of addresses
pub fn parse_addresses(s: &str) -> Option<Vec<usize>> {
	s.split(',')
		.map(str::trim)
		.filter(|a| !a.is_empty())
		.map(|a| parse_int(a).map(|v| v as usize).filter(|v| *v < MEMORY_SIZE))
		.collect()
}

/// Parses the value of a `refs` directive into added and removed referrer addresses
pub fn parse_refs(value: &str) -> Option<(Vec<usize>, Vec<usize>)> {
	let (refs, rrefs) = value.split_once(':').unwrap_or((value, ""));

	Some((parse_addresses(refs)?, parse_addresses(rrefs)?))
}

/// A base spec and/or length, as in `c5`, `h` or `10`
fn part(input: &str) -> IResult<&str, Sublength> {
	map_opt(
		verify(
			pair(take_while_m_n(0, 2, |c: char| "bcdhmn".contains(c)), opt(int)),
			|(bases, length): &(&str, Option<u32>)| !bases.is_empty() || length.is_some()
		),
		|(bases, length)| BaseSpec::parse(bases).map(|base| Sublength::new(length.unwrap_or_default() as usize, base))
	)(input)
}

/// `:`-joined parts with an optional `*N` multiplier
fn item(input: &str) -> IResult<&str, (Vec<Sublength>, u32)> {
	map(
		pair(separated_list1(char(':'), part), opt(preceded(char('*'), int))),
		|(parts, multiplier)| (parts, multiplier.unwrap_or(1))
	)(input)
}

fn parse_item(s: &str) -> Result<(Vec<Sublength>, usize), CtlParserError> {
	all_consuming(item)(s)
		.map(|(_, (parts, multiplier))| (parts, multiplier as usize))
		.map_err(|_| CtlParserError::Integer(s.to_owned()))
}

#[derive(Clone, Debug)]
enum DataValue {
	Int(u32),
	Text(String),
}

/// `ADDR:value[,value...]` as used by `@defb`, `@defs` and `@defw`
fn data_values(input: &str) -> IResult<&str, (u32, Vec<DataValue>)> {
	pair(
		terminated(ws(int), char(':')),
		separated_list1(
			char(','),
			ws(alt((
				map(double_quoted, DataValue::Text),
				map(int, DataValue::Int)
			)))
		)
	)(input)
}

/// Resolves a data directive into the address and bytes it pokes
fn parse_data_directive(name: &str, value: &str) -> Option<(usize, Vec<u8>)> {
	let (_, (address, values)) = all_consuming(data_values)(value).ok()?;
	let mut bytes = vec![];

	match name {
		"defb" => for v in values {
			match v {
				DataValue::Int(b) => bytes.push(u8::try_from(b).ok()?),
				DataValue::Text(s) => {
					for c in s.chars() {
						bytes.push(u8::try_from(c as u32).ok()?);
					}
				},
			}
		},
		"defw" => for v in values {
			match v {
				DataValue::Int(w) => bytes.extend(u16::try_from(w).ok()?.to_le_bytes()),
				DataValue::Text(_) => return None,
			}
		},
		_ => match values.as_slice() {
			[DataValue::Int(length)] if *length as usize <= MEMORY_SIZE => bytes = vec![0; *length as usize],
			[DataValue::Int(length), DataValue::Int(fill)] if *length as usize <= MEMORY_SIZE => {
				bytes = vec![u8::try_from(*fill).ok()?; *length as usize]
			},
			_ => return None,
		},
	}

	match address as usize {
		a if a < MEMORY_SIZE => Some((a, bytes)),
		_ => None,
	}
}

fn parse_address(s: &str) -> Result<usize, CtlParserError> {
	match parse_int(s) {
		Some(a) if a as usize <= MEMORY_SIZE => Ok(a as usize),
		_ => Err(CtlParserError::Address(s.to_owned())),
	}
}

fn parse_length(s: &str) -> Result<usize, CtlParserError> {
	parse_int(s)
		.map(|v| v as usize)
		.ok_or_else(|| CtlParserError::Integer(s.to_owned()))
}

/// Appends continuation text, either to the last line or as a new segment
fn extend(lines: &mut Vec<String>, text: &str, segment: bool) {
	match lines.last_mut() {
		Some(line) if !segment => {
			if !line.is_empty() && !text.is_empty() {
				line.push(' ');
			}
			line.push_str(text);
		},
		_ => lines.push(text.to_owned()),
	}
}

/// Gets the comment text at an address, treating all-blank text as absent
fn text(map: &BTreeMap<usize, Vec<String>>, address: usize) -> Vec<String> {
	map.get(&address)
		.filter(|t| t.iter().any(|l| !l.is_empty()))
		.cloned()
		.unwrap_or_default()
}

/// Copies the directives in a loop body to each repetition below `limit`
fn repeat<T, F>(map: &mut BTreeMap<usize, T>, lp: &Loop, limit: usize, shift: F)
where
	F: Fn(&T, usize) -> T
{
	let body: Vec<(usize, T)> = map.range(lp.start..lp.start + lp.length)
		.map(|(a, v)| (*a, shift(v, 0)))
		.collect();

	for i in 1..lp.count {
		let offset = i * lp.length;

		for (address, value) in &body {
			if address + offset < limit {
				map.insert(address + offset, shift(value, offset));
			}
		}
	}
}

/// Type of the sub-blocks that revert to a block's own type
const fn parent_type(ctl: char) -> char {
	match ctl {
		'c' | 's' | 't' | 'w' => ctl,
		_ => 'b',
	}
}

/// Control file model: parses directives and materializes blocks
#[derive(Debug)]
pub struct CtlParser {
	ctls: BTreeMap<usize, char>,
	/// Every top-level block, including those outside the address range
	containers: BTreeMap<usize, char>,
	subctls: BTreeMap<usize, SubCtl>,
	titles: BTreeMap<usize, Vec<String>>,
	descriptions: BTreeMap<usize, Vec<String>>,
	registers: BTreeMap<usize, Vec<String>>,
	mid_block_comments: BTreeMap<usize, Vec<String>>,
	end_comments: BTreeMap<usize, Vec<String>>,
	headers: BTreeMap<usize, Vec<String>>,
	footers: BTreeMap<usize, Vec<String>>,
	instruction_comments: BTreeMap<usize, Vec<String>>,
	multiline_comments: BTreeMap<usize, (Option<usize>, Vec<String>)>,
	lengths: BTreeMap<usize, Vec<Sublength>>,
	asm_directives: BTreeMap<usize, Vec<String>>,
	data_directives: BTreeMap<usize, Vec<(usize, Vec<u8>)>>,
	ignoreua: BTreeMap<usize, Vec<(Option<char>, Option<String>)>>,
	loops: Vec<Loop>,
	min_address: usize,
	max_address: usize,
	warnings: Vec<String>,
	errors: Vec<CtlParserError>,
}

impl Default for CtlParser {
	fn default() -> Self {
		CtlParser {
			ctls: BTreeMap::new(),
			containers: BTreeMap::new(),
			subctls: BTreeMap::new(),
			titles: BTreeMap::new(),
			descriptions: BTreeMap::new(),
			registers: BTreeMap::new(),
			mid_block_comments: BTreeMap::new(),
			end_comments: BTreeMap::new(),
			headers: BTreeMap::new(),
			footers: BTreeMap::new(),
			instruction_comments: BTreeMap::new(),
			multiline_comments: BTreeMap::new(),
			lengths: BTreeMap::new(),
			asm_directives: BTreeMap::new(),
			data_directives: BTreeMap::new(),
			ignoreua: BTreeMap::new(),
			loops: vec![],
			min_address: 0,
			max_address: MEMORY_SIZE,
			warnings: vec![],
			errors: vec![],
		}
	}
}

impl CtlParser {
	pub fn new() -> CtlParser {
		CtlParser::default()
	}

	/// Builds a model from a single control file's text
	pub fn from_text(text: &str, min_address: usize, max_address: usize) -> CtlParser {
		let mut parser = CtlParser::new();
		parser.parse_sources([("ctl", text)], min_address, max_address);
		parser
	}

	/// Reads and merges control files in order, keeping directives in `[min_address, max_address)`
	pub fn parse_ctls<P: AsRef<Path>>(&mut self, files: &[P], min_address: usize, max_address: usize) -> Result<(), CtlParserError> {
		let mut sources = vec![];

		for file in files {
			sources.push((file.as_ref().display().to_string(), fs::read_to_string(file)?));
		}

		self.parse_sources(sources.iter().map(|(n, t)| (n.as_str(), t.as_str())), min_address, max_address);

		Ok(())
	}

	/// Merges named control file texts in order
	pub fn parse_sources<'s, I>(&mut self, sources: I, min_address: usize, max_address: usize)
	where
		I: IntoIterator<Item = (&'s str, &'s str)>
	{
		self.min_address = min_address;
		self.max_address = max_address.min(MEMORY_SIZE);

		for (name, text) in sources {
			self.parse_source(name, text);
		}

		self.finish();
	}

	/// Warnings collected while parsing
	pub fn warnings(&self) -> &[String] {
		&self.warnings
	}

	/// Hard errors, each of which skipped its line
	pub fn errors(&self) -> &[CtlParserError] {
		&self.errors
	}

	fn warn(&mut self, message: String) {
		warn!("{}", message);
		self.warnings.push(message);
	}

	fn parse_source(&mut self, name: &str, text: &str) {
		let mut last = Last::None;
		let mut count = 0;

		for (i, line) in text.lines().enumerate() {
			let line = line.trim_end();

			match self.parse_line(line, &mut last) {
				Ok(()) => count += 1,
				Err(e) if e.is_fatal() => {
					let e = CtlParserError::Line {
						file: name.to_owned(),
						line: i + 1,
						source: Box::new(e),
					};

					warn!("{}", e);
					self.errors.push(e);
					last = Last::None;
				},
				Err(e) => {
					self.warn(format!("Ignoring line {} in {} ({}):\n{}", i + 1, name, e, line));
					last = Last::None;
				},
			}
		}

		debug!("Parsed {} lines from {}", count, name);
	}

	fn parse_line(&mut self, line: &str, last: &mut Last) -> Result<(), CtlParserError> {
		let mut chars = line.chars();
		let ctl = match chars.next() {
			Some(c) => c,
			None => return Ok(()),
		};
		let rest = chars.as_str();

		match ctl {
			'#' | '%' | ';' => return Ok(()),
			'.' | ':' => {
				self.continuation(*last, rest.trim(), ctl == ':');
				return Ok(())
			},
			'b' | 'c' | 'g' | 'i' | 's' | 't' | 'u' | 'w' | 'B' | 'C' | 'S' | 'T' | 'W'
			| 'D' | 'E' | 'L' | 'M' | 'N' | 'R' | '@' | '>' | ' ' => (),
			_ => return Err(CtlParserError::Directive(ctl)),
		}

		let rest = rest.trim_start();
		let (params, text) = match rest.split_once(char::is_whitespace) {
			Some((p, t)) => (p, t.trim_start()),
			None => (rest, ""),
		};
		let params: Vec<&str> = params.split(',').collect();
		let address = parse_address(params[0])?;

		if "bcgistuw".contains(ctl) {
			self.containers.insert(address, ctl);
		}

		if address < self.min_address || address >= self.max_address {
			*last = Last::None;
			return Ok(())
		}

		*last = match ctl {
			'b' | 'c' | 'g' | 'i' | 's' | 't' | 'u' | 'w' => {
				if params.len() > 1 {
					return Err(CtlParserError::ExtraParameters)
				}

				self.ctls.insert(address, ctl);
				if !text.is_empty() {
					self.titles.insert(address, vec![text.to_owned()]);
				}

				Last::Title(address)
			},
			'D' | 'E' | 'N' | 'R' => {
				if params.len() > 1 {
					return Err(CtlParserError::ExtraParameters)
				}

				let (map, next) = match ctl {
					'D' => (&mut self.descriptions, Last::Description(address)),
					'E' => (&mut self.end_comments, Last::EndComment(address)),
					'R' => (&mut self.registers, Last::Registers(address)),
					_ => (&mut self.mid_block_comments, Last::MidBlock(address)),
				};
				map.entry(address).or_default().push(text.to_owned());

				if ctl == 'N' {
					self.subctls.entry(address).or_insert(SubCtl::Inherit);
				}

				next
			},
			'>' => {
				let footer = match params.get(1) {
					Some(p) => parse_length(p)? != 0,
					None => false,
				};

				if params.len() > 2 {
					return Err(CtlParserError::ExtraParameters)
				}

				if footer {
					self.footers.entry(address).or_default().push(text.to_owned());
					Last::Footer(address)
				} else {
					self.headers.entry(address).or_default().push(text.to_owned());
					Last::Header(address)
				}
			},
			'@' => {
				if params.len() > 1 {
					return Err(CtlParserError::ExtraParameters)
				}

				self.add_asm_directive(address, text)?;
				Last::None
			},
			'L' => {
				self.add_loop(address, &params, line)?;
				Last::None
			},
			'M' => {
				let end = match params.get(1) {
					Some(p) => Some(address + parse_length(p)?),
					None => None,
				};

				if params.len() > 2 {
					return Err(CtlParserError::ExtraParameters)
				}

				self.subctls.entry(address).or_insert(SubCtl::Inherit);
				self.multiline_comments.insert(address, (end, vec![text.to_owned()]));

				Last::Multiline(address)
			},
			' ' => {
				let ctl = match self.containers.range(..=address).next_back() {
					Some((_, c)) => parent_type(*c).to_ascii_uppercase(),
					None => return Err(CtlParserError::NoContainingBlock(address)),
				};

				self.add_sub_block(ctl, address, &params, text)?
			},
			_ => self.add_sub_block(ctl, address, &params, text)?,
		};

		Ok(())
	}

	fn continuation(&mut self, last: Last, text: &str, segment: bool) {
		let lines = match last {
			Last::None => return,
			Last::Title(a) => self.titles.entry(a).or_default(),
			Last::Description(a) => self.descriptions.entry(a).or_default(),
			Last::Registers(a) => self.registers.entry(a).or_default(),
			Last::MidBlock(a) => self.mid_block_comments.entry(a).or_default(),
			Last::EndComment(a) => self.end_comments.entry(a).or_default(),
			Last::Header(a) => self.headers.entry(a).or_default(),
			Last::Footer(a) => self.footers.entry(a).or_default(),
			Last::Instruction(a) => self.instruction_comments.entry(a).or_default(),
			Last::Multiline(a) => &mut self.multiline_comments.entry(a).or_default().1,
		};

		extend(lines, text, segment);
	}

	fn add_sub_block(&mut self, ctl: char, address: usize, params: &[&str], text: &str) -> Result<Last, CtlParserError> {
		let (length, mut items) = match params.get(1) {
			Some(p) if !p.is_empty() => {
				let (parts, multiplier) = parse_item(p)?;
				let length: usize = parts.iter().map(|s| s.length).sum();

				if parts.len() == 1 && parts[0].base.is_empty() && multiplier == 1 {
					(Some(length), vec![])
				} else if length == 0 {
					(None, vec![parts])
				} else {
					(Some(length * multiplier), vec![parts; multiplier])
				}
			},
			_ => (None, vec![]),
		};

		for p in params.iter().skip(2) {
			let (parts, multiplier) = parse_item(p)?;
			items.extend(std::iter::repeat(parts).take(multiplier));
		}

		let size = |parts: &[Sublength]| match ctl {
			'S' => parts[0].length,
			_ => parts.iter().map(|s| s.length).sum(),
		};

		// Without an overall length, several sublengths cover their own total
		let length = match length {
			None if items.len() > 1 => match items.iter().map(|p| size(p)).sum::<usize>() {
				0 => return Err(CtlParserError::MissingParameters),
				total => Some(total),
			},
			l => l,
		};

		self.subctls.insert(address, SubCtl::Type(ctl));

		let end = match length {
			Some(length) => address + length,
			None => {
				match items.into_iter().next() {
					Some(parts) => self.lengths.insert(address, parts),
					None => self.lengths.remove(&address),
				};
				self.instruction_comments.insert(address, vec![text.to_owned()]);

				return Ok(Last::Instruction(address))
			},
		};

		let mut a = address;
		let mut blocks = 0;
		self.lengths.remove(&address);

		for parts in items {
			if a >= end {
				break;
			}

			let size = size(&parts);

			self.subctls.insert(a, SubCtl::Type(ctl));
			self.lengths.insert(a, parts);
			blocks += 1;

			if size == 0 {
				a = end;
			} else {
				a += size;
			}
		}

		if a < end {
			if blocks > 0 {
				self.subctls.insert(a, SubCtl::Type(ctl));
				self.lengths.remove(&a);
			}
			blocks += 1;
		}

		self.subctls.entry(end).or_insert(SubCtl::Parent);

		if blocks > 1 {
			self.instruction_comments.remove(&address);
			self.multiline_comments.insert(address, (Some(end), vec![text.to_owned()]));
			Ok(Last::Multiline(address))
		} else {
			self.multiline_comments.remove(&address);
			self.instruction_comments.insert(address, vec![text.to_owned()]);
			Ok(Last::Instruction(address))
		}
	}

	fn add_loop(&mut self, start: usize, params: &[&str], line: &str) -> Result<(), CtlParserError> {
		let length = params.get(1)
			.and_then(|p| parse_int(p))
			.filter(|l| *l > 0)
			.ok_or(CtlParserError::LoopLength)?;
		let count = params.get(2)
			.and_then(|p| parse_int(p))
			.ok_or(CtlParserError::LoopCount)?;
		let repeat_entries = match params.get(3) {
			Some(p) => parse_length(p)? != 0,
			None => false,
		};

		if params.len() > 4 {
			return Err(CtlParserError::ExtraParameters)
		}

		self.loops.push(Loop {
			start,
			length: length as usize,
			count: count as usize,
			repeat_entries,
			line: line.to_owned(),
		});

		Ok(())
	}

	fn add_asm_directive(&mut self, address: usize, directive: &str) -> Result<(), CtlParserError> {
		if directive.is_empty() {
			return Err(CtlParserError::MissingParameters)
		}

		let (name, value) = match directive.split_once('=') {
			Some((n, v)) => (n, Some(v)),
			None => (directive, None),
		};

		if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
			return Err(CtlParserError::AsmDirective(directive.to_owned()))
		}

		if let Some(suffix) = name.strip_prefix("ignoreua") {
			let key = match suffix {
				"" => None,
				_ => {
					let mut chars = suffix.strip_prefix(':').unwrap_or_default().chars();

					match (chars.next(), chars.next()) {
						(Some(c), None) if "deimnrt".contains(c) => Some(c),
						_ => return Err(CtlParserError::Ignoreua(suffix.to_owned())),
					}
				},
			};

			self.ignoreua.entry(address).or_default().push((key, value.map(str::to_owned)));
			return Ok(())
		}

		match (name, value) {
			("defb" | "defs" | "defw", Some(v)) => {
				let data = parse_data_directive(name, v)
					.ok_or_else(|| CtlParserError::AsmDirective(directive.to_owned()))?;
				self.data_directives.entry(address).or_default().push(data);
			},
			("refs" | "rrefs", Some(v)) if parse_refs(v).is_some() => (),
			("defb" | "defs" | "defw" | "refs" | "rrefs" | "label", None) | ("refs" | "rrefs", Some(_)) => {
				return Err(CtlParserError::AsmDirective(directive.to_owned()))
			},
			_ => (),
		}

		self.asm_directives.entry(address).or_default().push(directive.to_owned());

		Ok(())
	}

	/// Unrolls loops, places terminators and bounds multiline comments
	fn finish(&mut self) {
		let limit = self.max_address;

		for lp in mem::take(&mut self.loops) {
			self.unroll(&lp, limit);
		}

		self.ctls.entry(MEMORY_SIZE).or_insert('i');
		self.ctls.entry(self.max_address).or_insert('i');

		let boundaries: BTreeSet<usize> = self.ctls.keys()
			.chain(self.subctls.keys())
			.copied()
			.collect();

		for (address, (end, _)) in self.multiline_comments.iter_mut() {
			let next_block = self.ctls.range(address + 1..)
				.next()
				.map(|(a, _)| *a)
				.unwrap_or(MEMORY_SIZE);
			let next = boundaries.range(address + 1..)
				.next()
				.copied()
				.unwrap_or(MEMORY_SIZE);

			*end = Some(match end {
				Some(e) => (*e).min(next_block),
				None => next,
			});
		}
	}

	fn unroll(&mut self, lp: &Loop, limit: usize) {
		if lp.start + lp.length * lp.count > MEMORY_SIZE {
			self.warn(format!("Loop crosses 64K boundary:\n{}", lp.line));
		}

		repeat(&mut self.subctls, lp, limit, |v, _| *v);
		repeat(&mut self.lengths, lp, limit, |v, _| v.clone());
		repeat(&mut self.instruction_comments, lp, limit, |v, _| v.clone());
		repeat(&mut self.mid_block_comments, lp, limit, |v, _| v.clone());
		repeat(&mut self.multiline_comments, lp, limit, |(end, text), offset| (end.map(|e| e + offset), text.clone()));

		if lp.repeat_entries {
			repeat(&mut self.ctls, lp, limit, |v, _| *v);

			for map in [
				&mut self.titles,
				&mut self.descriptions,
				&mut self.registers,
				&mut self.end_comments,
				&mut self.headers,
				&mut self.footers,
			] {
				repeat(map, lp, limit, |v, _| v.clone());
			}
		}

		debug!("Unrolled loop at {}: {} x {} bytes", lp.start, lp.count, lp.length);
	}

	/// Materializes the blocks in `[min_address, max_address)` in address order
	pub fn get_blocks(&self) -> Vec<Block> {
		let ctls: Vec<(usize, char)> = self.ctls.iter().map(|(a, c)| (*a, *c)).collect();
		let mut blocks = vec![];

		for pair in ctls.windows(2) {
			let ((start, ctl), (end, _)) = (pair[0], pair[1]);

			if start < self.min_address || start >= self.max_address {
				continue;
			}

			let mut block = Block {
				ctl,
				start,
				end,
				title: self.titles.get(&start)
					.map(|t| t.join(" "))
					.filter(|t| !t.is_empty()),
				description: text(&self.descriptions, start),
				registers: text(&self.registers, start),
				end_comment: text(&self.end_comments, start),
				header: text(&self.headers, start),
				footer: text(&self.footers, start),
				asm_directives: self.asm_directives.get(&start)
					.map(|d| d.iter().filter(|d| is_entry_directive(d)).cloned().collect())
					.unwrap_or_default(),
				ignoreua: IndexMap::new(),
				blocks: self.sub_blocks(ctl, start, end),
			};

			for (key, value) in self.ignoreua.get(&start).into_iter().flatten() {
				let key = key.unwrap_or('t');

				if "tdre".contains(key) {
					block.ignoreua.insert(key, value.clone());
				}
			}

			blocks.push(block);
		}

		blocks
	}

	fn sub_blocks(&self, ctl: char, start: usize, end: usize) -> Vec<SubBlock> {
		let parent = parent_type(ctl);
		let mut starts = vec![start];
		starts.extend(self.subctls.range(start + 1..end).map(|(a, _)| *a));

		let mut blocks: Vec<SubBlock> = vec![];
		let mut previous = parent;

		for (i, s) in starts.iter().copied().enumerate() {
			let e = starts.get(i + 1).copied().unwrap_or(end);
			let sub_ctl = match self.subctls.get(&s) {
				Some(SubCtl::Type(c)) => c.to_ascii_lowercase(),
				Some(SubCtl::Inherit) => previous,
				Some(SubCtl::Parent) | None => parent,
			};
			previous = sub_ctl;

			let mut block = SubBlock {
				ctl: sub_ctl,
				start: s,
				end: e,
				sublengths: self.lengths.get(&s).cloned().unwrap_or_default(),
				header: text(&self.mid_block_comments, s),
				comment: text(&self.instruction_comments, s),
				multiline_comment: self.multiline_comments.get(&s)
					.filter(|(_, t)| t.iter().any(|l| !l.is_empty()))
					.map(|(m, t)| (m.unwrap_or(end), t.clone())),
				..Default::default()
			};

			for (address, directives) in self.asm_directives.range(s..e) {
				let directives: Vec<String> = directives.iter()
					.filter(|d| *address != start || !is_entry_directive(d))
					.cloned()
					.collect();

				if !directives.is_empty() {
					block.asm_directives.insert(*address, directives);
				}
			}

			for (address, list) in self.ignoreua.range(s..e) {
				for (key, value) in list {
					let key = match key {
						Some(k) => *k,
						None if *address == start => continue,
						None => 'i',
					};

					if "imn".contains(key) {
						block.ignoreua.insert((*address, key), value.clone());
					}
				}
			}

			blocks.push(block);
		}

		blocks
	}

	/// Pokes the bytes declared by `@defb`, `@defs` and `@defw` directives in address order
	pub fn apply_asm_data_directives(&self, memory: &mut Memory) {
		for (address, data) in self.data_directives.values().flatten() {
			memory.write(*address, data);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use crate::format::Base;

	fn parse(lines: &[&str]) -> CtlParser {
		CtlParser::from_text(&lines.join("\n"), 0, MEMORY_SIZE)
	}

	fn starts(block: &Block) -> Vec<(usize, char)> {
		block.blocks.iter().map(|b| (b.start, b.ctl)).collect()
	}

	#[test]
	fn test_blocks() {
		let parser = parse(&[
			"; Game code",
			"c 32768 Start the game",
			"D 32768 Description.",
			". More text.",
			"R 32768 A Lives",
			"R 32768 B Level",
			"N 32770 Mid-block.",
			" 32772,2 Comment",
			": Second segment",
			"E 32768 The end.",
			"b 32780",
			"i 32790",
		]);
		let blocks = parser.get_blocks();

		assert!(parser.warnings().is_empty());
		assert_eq!(blocks.iter().map(|b| (b.ctl, b.start, b.end)).collect::<Vec<_>>(), vec![
			('c', 32768, 32780),
			('b', 32780, 32790),
			('i', 32790, 65536),
		]);

		let block = &blocks[0];
		assert_eq!(block.title.as_deref(), Some("Start the game"));
		assert_eq!(block.description, vec!["Description. More text.".to_owned()]);
		assert_eq!(block.registers, vec!["A Lives".to_owned(), "B Level".to_owned()]);
		assert_eq!(block.end_comment, vec!["The end.".to_owned()]);
		assert_eq!(starts(block), vec![(32768, 'c'), (32770, 'c'), (32772, 'c'), (32774, 'c')]);
		assert_eq!(block.blocks[1].header, vec!["Mid-block.".to_owned()]);
		assert_eq!(block.blocks[2].comment, vec!["Comment".to_owned(), "Second segment".to_owned()]);
		assert_eq!(block.blocks[2].end, 32774);
		assert_eq!(blocks[1].title, None);
	}

	#[test]
	fn test_sublengths() {
		let parser = parse(&["b 100", "B 100,10,3,2", "i 110"]);
		let blocks = parser.get_blocks();
		let lengths: Vec<(usize, usize, Vec<Sublength>)> = blocks[0].blocks.iter()
			.map(|b| (b.start, b.end, b.sublengths.clone()))
			.collect();

		assert_eq!(lengths, vec![
			(100, 103, vec![Sublength::new(3, BaseSpec::default())]),
			(103, 105, vec![Sublength::new(2, BaseSpec::default())]),
			(105, 110, vec![]),
		]);
	}

	#[test]
	fn test_sublength_syntax() {
		let parser = parse(&["c 100", "T 100,8,2:c3*2 Text", "W 108,h", "S 120,4,4:c", "i 130"]);
		let blocks = parser.get_blocks();
		let char_base = BaseSpec::single(Base::Char);
		let subs = &blocks[0].blocks;

		assert_eq!(starts(&blocks[0]), vec![(100, 't'), (105, 't'), (108, 'w'), (120, 's'), (124, 'c')]);
		assert_eq!(subs[0].sublengths, vec![Sublength::new(2, BaseSpec::default()), Sublength::new(3, char_base)]);
		assert_eq!(subs[0].multiline_comment, Some((108, vec!["Text".to_owned()])));
		assert_eq!(subs[2].sublengths, vec![Sublength::new(0, BaseSpec::single(Base::Hex))]);
		assert_eq!(subs[3].sublengths, vec![Sublength::new(4, BaseSpec::default()), Sublength::new(0, char_base)]);
	}

	#[test]
	fn test_loop() {
		let parser = parse(&["c 100", "B 100,5 Bytes", "L 100,10,3"]);
		let blocks = parser.get_blocks();
		let bytes: Vec<&SubBlock> = blocks[0].blocks.iter().filter(|b| b.ctl == 'b').collect();

		assert_eq!(bytes.iter().map(|b| b.start).collect::<Vec<_>>(), vec![100, 110, 120]);
		assert!(bytes.iter().all(|b| b.comment == vec!["Bytes".to_owned()] && b.end == b.start + 5));
		assert!(parser.warnings().is_empty());
	}

	#[test]
	fn test_loop_entries_and_boundary() {
		let parser = parse(&["b 100 Data", "L 100,10,2,1", "b 65530", "L 65530,4,2,1"]);
		let blocks = parser.get_blocks();

		assert_eq!(blocks.iter().map(|b| (b.start, b.title.clone())).collect::<Vec<_>>(), vec![
			(100, Some("Data".to_owned())),
			(110, Some("Data".to_owned())),
			(65530, None),
			(65534, None),
		]);
		assert_eq!(parser.warnings(), &["Loop crosses 64K boundary:\nL 65530,4,2,1".to_owned()]);
	}

	#[test]
	fn test_warnings() {
		let parser = parse(&[
			"c 32768",
			"X 32768",
			"c 32768,1",
			"b $zz",
			"@ 32768 ignoreua:x",
			"L 32768",
			"L 32768,2",
			"B 32768,q",
		]);

		assert_eq!(parser.warnings().len(), 7);
		assert_eq!(parser.warnings()[0], "Ignoring line 2 in ctl (invalid directive: 'X'):\nX 32768");
		assert_eq!(parser.warnings()[2], "Ignoring line 4 in ctl (invalid address: $zz):\nb $zz");
		assert_eq!(parser.warnings()[5], "Ignoring line 7 in ctl (loop count not specified):\nL 32768,2");
		assert!(parser.errors().is_empty());
		assert_eq!(parser.get_blocks().len(), 1);
	}

	#[test]
	fn test_fatal_errors() {
		let mut parser = CtlParser::new();
		parser.parse_sources([
			("first.ctl", " 32768,2 Orphan\nc 32770"),
			("second.ctl", "c 40000\n@ 40000 defb=oops\nb 40010"),
			("third.ctl", "b 50000"),
		], 0, MEMORY_SIZE);

		assert_eq!(parser.errors().len(), 2);
		assert!(parser.errors().iter().all(CtlParserError::is_fatal));
		assert_eq!(parser.errors()[0].to_string(), "first.ctl, line 1: blank directive with no containing block at 32768");
		assert_eq!(parser.errors()[1].to_string(), "second.ctl, line 2: invalid ASM directive: defb=oops");
		assert_eq!(parser.get_blocks().iter().map(|b| b.start).collect::<Vec<_>>(), vec![32770, 40000, 40010, 50000]);
		assert!(parser.warnings().is_empty());
	}

	#[test]
	fn test_errors_keep_later_lines() {
		let parser = parse(&["c 40000", "@ 40000 defb=oops", "@ 40001 defs=0:70000", "b 40010", "t 40020"]);

		assert_eq!(parser.errors().len(), 2);
		assert_eq!(parser.get_blocks().iter().map(|b| b.start).collect::<Vec<_>>(), vec![40000, 40010, 40020]);
	}

	#[test]
	fn test_blank_directive_below_range() {
		let parser = CtlParser::from_text("c 100\n 160,2 X\nc 200 Kept", 150, 250);
		let blocks = parser.get_blocks();

		assert!(parser.errors().is_empty());
		assert_eq!(blocks.iter().map(|b| (b.start, b.end)).collect::<Vec<_>>(), vec![(200, 250)]);
	}

	#[test]
	fn test_sublengths_without_length() {
		let parser = parse(&["b 100", "B 100,,3,2", "i 110"]);
		let lengths: Vec<(usize, usize, Vec<Sublength>)> = parser.get_blocks()[0].blocks.iter()
			.map(|b| (b.start, b.end, b.sublengths.clone()))
			.collect();

		assert_eq!(lengths, vec![
			(100, 103, vec![Sublength::new(3, BaseSpec::default())]),
			(103, 105, vec![Sublength::new(2, BaseSpec::default())]),
			(105, 110, vec![]),
		]);
	}

	#[test]
	fn test_asm_directives() {
		let parser = parse(&[
			"c 32768",
			"@ 32768 org",
			"@ 32768 label=START",
			"@ 32768 ignoreua",
			"@ 32769 defb=40000:1,\"AB\"",
			"@ 32770 defw=40010:258",
			"@ 32771 defs=40020:3,7",
			"@ 32772 ignoreua:m",
			"@ 32773 ignoreua=40000",
			"i 32780",
		]);
		let blocks = parser.get_blocks();
		let block = &blocks[0];

		assert_eq!(block.asm_directives, vec!["org".to_owned()]);
		assert_eq!(block.ignoreua.get(&'t'), Some(&None));
		assert_eq!(block.blocks[0].asm_directives.get(&32768), Some(&vec!["label=START".to_owned()]));
		assert_eq!(block.blocks[0].asm_directives.len(), 4);
		assert_eq!(block.blocks[0].ignoreua.get(&(32772, 'm')), Some(&None));
		assert_eq!(block.blocks[0].ignoreua.get(&(32773, 'i')), Some(&Some("40000".to_owned())));

		let mut memory = Memory::new();
		parser.apply_asm_data_directives(&mut memory);
		assert_eq!(memory.read(40000, 3), vec![1, b'A', b'B']);
		assert_eq!(memory.read(40010, 2), vec![2, 1]);
		assert_eq!(memory.read(40019, 5), vec![0, 7, 7, 7, 0]);
	}

	#[test]
	fn test_multiline_comments() {
		let parser = parse(&["c 100", "M 100 Spans", "C 102,2", "C 104,4,2 Split", "M 109,50 Bounded", "i 110"]);
		let blocks = parser.get_blocks();
		let multiline: Vec<(usize, Option<(usize, Vec<String>)>)> = blocks[0].blocks.iter()
			.map(|b| (b.start, b.multiline_comment.clone()))
			.collect();

		assert_eq!(multiline, vec![
			(100, Some((102, vec!["Spans".to_owned()]))),
			(102, None),
			(104, Some((108, vec!["Split".to_owned()]))),
			(106, None),
			(108, None),
			(109, Some((110, vec!["Bounded".to_owned()]))),
		]);
	}

	#[test]
	fn test_address_range() {
		let parser = CtlParser::from_text("c 100\nc 200 Kept\nc 300", 150, 250);
		let blocks = parser.get_blocks();

		assert_eq!(blocks.iter().map(|b| (b.start, b.end)).collect::<Vec<_>>(), vec![(200, 250)]);
		assert_eq!(blocks[0].title.as_deref(), Some("Kept"));
	}

	#[test]
	fn test_merge() {
		let mut parser = CtlParser::new();
		parser.parse_sources([("a.ctl", "c 100 First\nD 100 One"), ("b.ctl", "c 100 Second\nD 100 Two\nb 200")], 0, MEMORY_SIZE);
		let blocks = parser.get_blocks();

		assert_eq!(blocks[0].title.as_deref(), Some("Second"));
		assert_eq!(blocks[0].description, vec!["One".to_owned(), "Two".to_owned()]);
		assert_eq!(blocks[1].start, 200);
	}

	#[test]
	fn test_helpers() {
		assert!(is_entry_directive("org=32768"));
		assert!(is_entry_directive("set-bullet=+"));
		assert!(is_entry_directive("if({case}==1)(label=x)"));
		assert!(!is_entry_directive("label=START"));
		assert!(!is_entry_directive("ignoreua:i"));
		assert_eq!(parse_refs("1,$10:3"), Some((vec![1, 16], vec![3])));
		assert_eq!(parse_refs(":3"), Some((vec![], vec![3])));
		assert_eq!(parse_refs("x"), None);
		assert_eq!(parse_data_directive("defw", "0:65536"), None);
	}
}

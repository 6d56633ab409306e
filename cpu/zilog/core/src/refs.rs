use nom::{
	branch::alt,
	bytes::complete::{
		is_not,
		tag
	},
	character::complete::{
		anychar,
		char
	},
	combinator::{
		all_consuming,
		map,
		opt,
		value
	},
	IResult,
	multi::{
		many0,
		separated_list1
	},
	sequence::{
		delimited,
		pair,
		preceded
	}
};

use zsk_core::nom_ext::int;

use crate::config::ConfigError;

#[derive(Clone, Debug, PartialEq)]
enum Segment {
	Literal(String),
	/// `\i`
	Integer,
	/// `(a|b)`, optionally followed by `?`
	Group {
		alternatives: Vec<Vec<Segment>>,
		optional: bool,
	},
}

fn segments(input: &str) -> IResult<&str, Vec<Segment>> {
	many0(segment)(input)
}

fn segment(input: &str) -> IResult<&str, Segment> {
	alt((
		value(Segment::Integer, tag(r"\i")),
		map(
			pair(
				delimited(char('('), separated_list1(char('|'), segments), char(')')),
				opt(char('?'))
			),
			|(alternatives, optional)| Segment::Group { alternatives, optional: optional.is_some() }
		),
		map(is_not(r"\()|?"), |s: &str| Segment::Literal(s.to_owned())),
		map(preceded(char('\\'), anychar), |c| Segment::Literal(c.to_string())),
	))(input)
}

/// Matches `segments` followed by `rest` against the whole of `input`, yielding the first integer
fn walk(segments: &[Segment], rest: &[&[Segment]], input: &str, found: Option<u32>) -> Option<Option<u32>> {
	let (segment, tail) = match segments.split_first() {
		Some(s) => s,
		None => {
			return match rest.split_first() {
				Some((next, rest)) => walk(next, rest, input, found),
				None if input.is_empty() => Some(found),
				None => None,
			}
		},
	};

	match segment {
		Segment::Literal(s) => walk(tail, rest, input.strip_prefix(s.as_str())?, found),
		Segment::Integer => {
			let (input, v) = int::<nom::error::Error<&str>>(input).ok()?;
			walk(tail, rest, input, found.or(Some(v)))
		},
		Segment::Group { alternatives, optional } => {
			let mut pending = vec![tail];
			pending.extend_from_slice(rest);

			alternatives.iter()
				.find_map(|a| walk(a, &pending, input, found))
				.or_else(|| if *optional { walk(tail, rest, input, found) } else { None })
		},
	}
}

/// An operation pattern whose `\i` operand is the address of a referenced instruction
#[derive(Clone, Debug, PartialEq)]
pub struct RefPattern {
	source: String,
	segments: Vec<Segment>,
}

impl RefPattern {
	pub fn new(source: &str) -> Result<RefPattern, ConfigError> {
		match all_consuming(segments)(source) {
			Ok((_, segments)) => Ok(RefPattern {
				source: source.to_owned(),
				segments,
			}),
			Err(_) => Err(ConfigError::Value("ref_patterns".to_owned(), source.to_owned())),
		}
	}

	pub fn source(&self) -> &str {
		&self.source
	}

	/// Gets the referenced address if the upper-cased operation matches
	pub fn matches(&self, operation: &str) -> Option<usize> {
		walk(&self.segments, &[], operation, None)
			.flatten()
			.map(|v| v as usize)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pattern(source: &str) -> RefPattern {
		match RefPattern::new(source) {
			Ok(p) => p,
			Err(e) => panic!("{}", e),
		}
	}

	#[test]
	fn test_plain() {
		let p = pattern(r"DJNZ \i");

		assert_eq!(p.matches("DJNZ 32768"), Some(32768));
		assert_eq!(p.matches("DJNZ $8000"), Some(32768));
		assert_eq!(p.matches("DJNZ 32768,1"), None);
		assert_eq!(p.matches("JR 32768"), None);
	}

	#[test]
	fn test_groups() {
		let p = pattern(r"JP ((NZ|Z|NC|C|PO|PE|P|M),)?\i");

		assert_eq!(p.matches("JP 40000"), Some(40000));
		assert_eq!(p.matches("JP PO,%1000"), Some(8));
		assert_eq!(p.matches("JP P,0x10"), Some(16));
		assert_eq!(p.matches("JP (HL)"), None);
		assert_eq!(p.matches("JP X,1"), None);
	}

	#[test]
	fn test_escapes() {
		let p = pattern(r"LD HL,\(\i\)");

		assert_eq!(p.matches("LD HL,(23606)"), Some(23606));
		assert_eq!(p.source(), r"LD HL,\(\i\)");
		assert!(RefPattern::new("JP (NZ").is_err());
	}
}

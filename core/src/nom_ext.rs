use nom::{
	branch::alt,
	bytes::complete::{
		escaped_transform,
		is_not,
		tag,
		tag_no_case,
		take_while1
	},
	character::complete::{
		char,
		digit1,
		hex_digit1,
		multispace0,
		not_line_ending
	},
	combinator::{
		all_consuming,
		map,
		map_res,
		opt,
		value
	},
	error::{
		FromExternalError,
		ParseError
	},
	IResult,
	Parser,
	sequence::{
		delimited,
		pair,
		preceded
	},
};

use std::num::ParseIntError;

/// Parses a binary literal prefixed with '%'
pub fn bin_int<'a, E>(input: &'a str) -> IResult<&'a str, u32, E>
where
	E: ParseError<&'a str> + FromExternalError<&'a str, ParseIntError>
{
	preceded(
		char('%'),
		map_res(take_while1(|c: char| c == '0' || c == '1'), |s: &str| u32::from_str_radix(s, 2))
	)(input)
}

/// Parses a plain decimal literal
pub fn dec_int<'a, E>(input: &'a str) -> IResult<&'a str, u32, E>
where
	E: ParseError<&'a str> + FromExternalError<&'a str, ParseIntError>
{
	map_res(digit1, |s: &str| s.parse::<u32>())(input)
}

/// Parses the contents of a pair of double quotes, resolving `\"` and `\\` escapes
pub fn double_quoted<'a, E>(input: &'a str) -> IResult<&'a str, String, E>
where
	E: ParseError<&'a str>
{
	delimited(
		char('"'),
		map(
			opt(escaped_transform(
				is_not("\\\""),
				'\\',
				alt((
					value("\\", tag("\\")),
					value("\"", tag("\""))
				))
			)),
			|s| s.unwrap_or_default()
		),
		char('"')
	)(input)
}

/// Parses a hash-prefixed ('#') line comment
pub fn hash_comment<'a, E>(input: &'a str) -> IResult<&'a str, (), E>
where
	E: ParseError<&'a str>
{
	value((), pair(char('#'), not_line_ending))(input)
}

/// Parses a hex literal prefixed with '$' or '0x'
pub fn hex_int<'a, E>(input: &'a str) -> IResult<&'a str, u32, E>
where
	E: ParseError<&'a str> + FromExternalError<&'a str, ParseIntError>
{
	preceded(
		alt((tag("$"), tag_no_case("0x"))),
		map_res(hex_digit1, |s: &str| u32::from_str_radix(s, 16))
	)(input)
}

/// Parses an integer literal in any of the supported notations
pub fn int<'a, E>(input: &'a str) -> IResult<&'a str, u32, E>
where
	E: ParseError<&'a str> + FromExternalError<&'a str, ParseIntError>
{
	alt((hex_int, bin_int, dec_int))(input)
}

/// Parses a whole string as an integer literal, ignoring surrounding whitespace
pub fn parse_int(input: &str) -> Option<u32> {
	all_consuming(ws(int::<nom::error::Error<&str>>))(input)
		.ok()
		.map(|(_, v)| v)
}

/// A combinator that takes a parser `inner` and produces a parser that also consumes both leading and
/// trailing whitespace, returning the output of `inner`.
///
/// From https://github.com/Geal/nom/blob/master/doc/nom_recipes.md with minor edits
pub fn ws<'a, F, O, E>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
	E: ParseError<&'a str>,
	F: Parser<&'a str, O, E>,
{
	delimited(multispace0, inner, multispace0)
}

#[cfg(test)]
mod tests {
	use nom::error::Error;

	#[test]
	fn test_double_quoted() {
		assert_eq!(super::double_quoted::<'_, Error<&str>>("\"Hi there\""), Ok(("", "Hi there".to_owned())));
		assert_eq!(super::double_quoted::<'_, Error<&str>>(r#""a\"b\\c","#), Ok((",", "a\"b\\c".to_owned())));
		assert_eq!(super::double_quoted::<'_, Error<&str>>("\"\""), Ok(("", String::new())));
		assert!(super::double_quoted::<'_, Error<&str>>("Hi there").is_err());
	}

	#[test]
	fn test_int() {
		assert_eq!(super::int::<'_, Error<&str>>("32768,10"), Ok((",10", 32768)));
		assert_eq!(super::int::<'_, Error<&str>>("$80FF"), Ok(("", 0x80FF)));
		assert_eq!(super::int::<'_, Error<&str>>("0x1f rest"), Ok((" rest", 31)));
		assert_eq!(super::int::<'_, Error<&str>>("%101"), Ok(("", 5)));
		assert!(super::int::<'_, Error<&str>>("x10").is_err());
	}

	#[test]
	fn test_parse_int() {
		assert_eq!(super::parse_int(" 40000 "), Some(40000));
		assert_eq!(super::parse_int("$A000"), Some(40960));
		assert_eq!(super::parse_int("0XFF"), Some(255));
		assert_eq!(super::parse_int("10a"), None);
		assert_eq!(super::parse_int(""), None);
	}

	#[test]
	fn test_hash_comment() {
		assert_eq!(super::hash_comment::<'_, Error<&str>>("# note\nb 0"), Ok(("\nb 0", ())));
	}
}

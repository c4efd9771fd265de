use std::num::IntErrorKind;

use crate::form::kind::{FloatWidth, IntWidth, Kind};
use crate::form::value::{Scalar, Slot};
use crate::form::{BindError, Result};

/// Convert one raw form value into a scalar of the given kind.
///
/// The empty string converts to the kind's zero: `0` for integers,
/// `false` for booleans, `0.0` for floats, and the empty string itself
/// for string fields. Composite kinds have no single-value conversion
/// rule and report an unsupported-kind error.
pub fn convert_scalar(kind: &Kind, raw: &str, record: &str, field: &str) -> Result<Scalar> {
	let outcome = match kind {
		Kind::Int(width) => parse_int(*width, raw).map(Scalar::I64),
		Kind::Uint(width) => parse_uint(*width, raw).map(Scalar::U64),
		Kind::Bool => parse_bool(raw).map(Scalar::Bool),
		Kind::Float(FloatWidth::W32) => parse_f32(raw).map(Scalar::F32),
		Kind::Float(FloatWidth::W64) => parse_f64(raw).map(Scalar::F64),
		Kind::Str => Ok(Scalar::Str(raw.into())),
		Kind::Seq(_) | Kind::Opt(_) | Kind::Record(_) => {
			return Err(BindError::UnsupportedKind {
				record: record.to_owned(),
				field: field.to_owned(),
				kind: kind.label(),
			});
		}
	};
	outcome.map_err(|reason| BindError::Conversion {
		record: record.to_owned(),
		field: field.to_owned(),
		kind: kind.label(),
		value: raw.to_owned(),
		reason,
	})
}

/// Convert one raw form value into a present optional slot.
pub fn convert_optional(inner: &Kind, raw: &str, record: &str, field: &str) -> Result<Slot> {
	let scalar = convert_scalar(inner, raw, record, field)?;
	Ok(Slot::Opt(Some(scalar)))
}

fn parse_int(width: IntWidth, raw: &str) -> std::result::Result<i64, String> {
	let text = if raw.is_empty() { "0" } else { raw };
	let value: i64 = text.parse().map_err(|err: std::num::ParseIntError| match err.kind() {
		IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "value out of range".to_owned(),
		_ => "expected a base-10 integer".to_owned(),
	})?;
	if !width.fits_signed(value) {
		return Err("value out of range".to_owned());
	}
	Ok(value)
}

fn parse_uint(width: IntWidth, raw: &str) -> std::result::Result<u64, String> {
	let text = if raw.is_empty() { "0" } else { raw };
	let value: u64 = text.parse().map_err(|err: std::num::ParseIntError| match err.kind() {
		IntErrorKind::PosOverflow => "value out of range".to_owned(),
		_ => "expected a base-10 unsigned integer".to_owned(),
	})?;
	if !width.fits_unsigned(value) {
		return Err("value out of range".to_owned());
	}
	Ok(value)
}

fn parse_bool(raw: &str) -> std::result::Result<bool, String> {
	let text = if raw.is_empty() { "false" } else { raw };
	match text {
		"1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
		"0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
		_ => Err("expected a boolean literal".to_owned()),
	}
}

fn parse_f32(raw: &str) -> std::result::Result<f32, String> {
	let text = if raw.is_empty() { "0.0" } else { raw };
	let value: f32 = text.parse().map_err(|_| "expected a decimal number".to_owned())?;
	if value.is_infinite() && !is_infinite_literal(text) {
		return Err("value out of range".to_owned());
	}
	Ok(value)
}

fn parse_f64(raw: &str) -> std::result::Result<f64, String> {
	let text = if raw.is_empty() { "0.0" } else { raw };
	let value: f64 = text.parse().map_err(|_| "expected a decimal number".to_owned())?;
	if value.is_infinite() && !is_infinite_literal(text) {
		return Err("value out of range".to_owned());
	}
	Ok(value)
}

/// Parsed infinities are legal only when the input spelled one out.
/// Finite decimal text that overflows the float range parses to an
/// infinity in Rust instead of failing, so the literal check is what
/// turns overflow into a range error.
fn is_infinite_literal(raw: &str) -> bool {
	let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
	digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}

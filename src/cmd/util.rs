use std::collections::HashMap;
use std::path::Path;

use formbind::form::{BindError, FieldShape, FloatWidth, IntWidth, Kind, Record, RecordShape, Result, Scalar, Schema, Slot};

#[derive(serde::Deserialize)]
struct SchemaFile {
	records: Vec<RecordFile>,
}

#[derive(serde::Deserialize)]
struct RecordFile {
	name: String,
	fields: Vec<FieldFile>,
}

#[derive(serde::Deserialize)]
struct FieldFile {
	ident: String,
	#[serde(default)]
	tag: Option<String>,
	#[serde(default = "default_settable")]
	settable: bool,
	kind: String,
}

fn default_settable() -> bool {
	true
}

/// Load and validate a schema description file.
///
/// Record references in kind tokens resolve by name against the file's
/// own record list, first occurrence winning; duplicate names are then
/// rejected by schema validation with both indices.
pub(crate) fn load_schema(path: &Path) -> Result<Schema> {
	let text = std::fs::read_to_string(path)?;
	let file: SchemaFile = serde_json::from_str(&text).map_err(|err| BindError::SchemaFileInvalid { reason: err.to_string() })?;

	let mut names: HashMap<String, u32> = HashMap::new();
	for (idx, record) in file.records.iter().enumerate() {
		names.entry(record.name.clone()).or_insert(idx as u32);
	}

	let mut records = Vec::with_capacity(file.records.len());
	for record in file.records {
		let mut fields = Vec::with_capacity(record.fields.len());
		for field in record.fields {
			let kind = parse_kind(&field.kind, &names)?;
			fields.push(FieldShape {
				ident: field.ident.into(),
				tag: field.tag.map(String::into_boxed_str),
				settable: field.settable,
				kind,
			});
		}
		records.push(RecordShape {
			name: record.name.into(),
			fields,
		});
	}

	Schema::new(records)
}

/// Parse a kind token such as `u16`, `seq(string)`, or `record(Address)`.
pub(crate) fn parse_kind(token: &str, names: &HashMap<String, u32>) -> Result<Kind> {
	let text = token.trim();
	if let Some(inner) = composite_body(text, "seq") {
		return Ok(Kind::Seq(Box::new(parse_kind(inner, names)?)));
	}
	if let Some(inner) = composite_body(text, "opt") {
		return Ok(Kind::Opt(Box::new(parse_kind(inner, names)?)));
	}
	if let Some(name) = composite_body(text, "record") {
		let name = name.trim();
		let Some(idx) = names.get(name) else {
			return Err(BindError::RecordNotFound { name: name.to_owned() });
		};
		return Ok(Kind::Record(*idx));
	}

	match text {
		"int" => Ok(Kind::Int(IntWidth::Native)),
		"i8" => Ok(Kind::Int(IntWidth::W8)),
		"i16" => Ok(Kind::Int(IntWidth::W16)),
		"i32" => Ok(Kind::Int(IntWidth::W32)),
		"i64" => Ok(Kind::Int(IntWidth::W64)),
		"uint" => Ok(Kind::Uint(IntWidth::Native)),
		"u8" => Ok(Kind::Uint(IntWidth::W8)),
		"u16" => Ok(Kind::Uint(IntWidth::W16)),
		"u32" => Ok(Kind::Uint(IntWidth::W32)),
		"u64" => Ok(Kind::Uint(IntWidth::W64)),
		"bool" => Ok(Kind::Bool),
		"f32" => Ok(Kind::Float(FloatWidth::W32)),
		"f64" => Ok(Kind::Float(FloatWidth::W64)),
		"string" => Ok(Kind::Str),
		_ => Err(BindError::InvalidKindToken { token: token.to_owned() }),
	}
}

fn composite_body<'a>(token: &'a str, head: &str) -> Option<&'a str> {
	token.strip_prefix(head)?.strip_prefix('(')?.strip_suffix(')')
}

/// Render a bound record instance as a JSON value.
pub(crate) fn record_json(schema: &Schema, record: &Record) -> serde_json::Value {
	use serde_json::{Map, Value as JsonValue};

	let Some(shape) = schema.record(record.record_idx) else {
		return JsonValue::Null;
	};

	let fields: Map<String, JsonValue> = shape
		.fields
		.iter()
		.zip(record.slots.iter())
		.map(|(field, slot)| (field.ident.to_string(), slot_json(schema, slot)))
		.collect();

	let mut out = Map::new();
	out.insert("record".to_owned(), serde_json::json!(shape.name.as_ref()));
	out.insert("fields".to_owned(), JsonValue::Object(fields));
	JsonValue::Object(out)
}

fn slot_json(schema: &Schema, slot: &Slot) -> serde_json::Value {
	match slot {
		Slot::Scalar(scalar) => scalar_json(scalar),
		Slot::Seq(items) => {
			let values: Vec<serde_json::Value> = items.iter().map(scalar_json).collect();
			serde_json::Value::Array(values)
		}
		Slot::Opt(None) => serde_json::Value::Null,
		Slot::Opt(Some(scalar)) => scalar_json(scalar),
		Slot::Record(inner) => record_json(schema, inner),
	}
}

fn scalar_json(scalar: &Scalar) -> serde_json::Value {
	match scalar {
		Scalar::I64(value) => serde_json::json!(value),
		Scalar::U64(value) => serde_json::json!(value),
		Scalar::Bool(value) => serde_json::json!(value),
		Scalar::F32(value) => serde_json::json!(value),
		Scalar::F64(value) => serde_json::json!(value),
		Scalar::Str(value) => serde_json::json!(value.as_ref()),
	}
}

/// Serialize a payload as one JSON document on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json serialization failed: {err}"),
	}
}

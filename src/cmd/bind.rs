use std::path::PathBuf;

use formbind::form::{FormMap, Record, Result, Scalar, Schema, Slot, bind_new_record};

use crate::cmd::util::{emit_json, load_schema, record_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub record: String,
	#[arg(long)]
	pub data: String,
	#[arg(long)]
	pub json: bool,
}

/// Bind form-encoded data onto a record declared in a schema file.
///
/// The data argument takes a raw query string; a leading `?` is
/// tolerated so pasted URLs work unchanged.
pub fn run(args: Args) -> Result<()> {
	let Args { file, record, data, json } = args;

	let schema = load_schema(&file)?;
	let raw = data.strip_prefix('?').unwrap_or(&data);
	let form = FormMap::parse_urlencoded(raw);
	let bound = bind_new_record(&schema, &record, &form)?;

	if json {
		let payload = BindJson {
			path: file.display().to_string(),
			record,
			keys: form.len(),
			value: record_json(&schema, &bound),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", file.display());
	println!("record: {record}");
	println!("keys: {}", form.len());
	println!("value:");
	print_record(&schema, &bound, 2);

	Ok(())
}

fn print_record(schema: &Schema, record: &Record, indent: usize) {
	let pad = " ".repeat(indent);
	let Some(shape) = schema.record(record.record_idx) else {
		return;
	};

	for (field, slot) in shape.fields.iter().zip(record.slots.iter()) {
		match slot {
			Slot::Record(inner) => {
				println!("{pad}{}:", field.ident);
				print_record(schema, inner, indent + 2);
			}
			Slot::Seq(items) => {
				let rendered: Vec<String> = items.iter().map(scalar_label).collect();
				println!("{pad}{}: [{}]", field.ident, rendered.join(", "));
			}
			Slot::Opt(None) => println!("{pad}{}: -", field.ident),
			Slot::Opt(Some(scalar)) => println!("{pad}{}: {}", field.ident, scalar_label(scalar)),
			Slot::Scalar(scalar) => println!("{pad}{}: {}", field.ident, scalar_label(scalar)),
		}
	}
}

fn scalar_label(scalar: &Scalar) -> String {
	match scalar {
		Scalar::I64(value) => value.to_string(),
		Scalar::U64(value) => value.to_string(),
		Scalar::Bool(value) => value.to_string(),
		Scalar::F32(value) => value.to_string(),
		Scalar::F64(value) => value.to_string(),
		Scalar::Str(value) => format!("{value:?}"),
	}
}

#[derive(serde::Serialize)]
struct BindJson {
	path: String,
	record: String,
	keys: usize,
	value: serde_json::Value,
}

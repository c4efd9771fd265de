use std::path::PathBuf;

use formbind::form::{BindError, Result};

use crate::cmd::util::{emit_json, load_schema};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub record: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Validate a schema file and list its record shapes.
pub fn run(args: Args) -> Result<()> {
	let Args { file, record, json } = args;

	let schema = load_schema(&file)?;
	let selected = match &record {
		Some(name) => {
			let Some(found) = schema.record_by_name(name) else {
				return Err(BindError::RecordNotFound { name: name.clone() });
			};
			vec![found]
		}
		None => schema.records.iter().enumerate().map(|(idx, item)| (idx as u32, item)).collect(),
	};

	if json {
		let payload = SchemaJson {
			path: file.display().to_string(),
			record_count: schema.records.len(),
			records: selected
				.iter()
				.map(|(idx, shape)| RecordJson {
					index: *idx,
					name: shape.name.to_string(),
					fields: shape
						.fields
						.iter()
						.map(|field| FieldJson {
							ident: field.ident.to_string(),
							name: field.external_name().to_owned(),
							kind: field.kind.label(),
							settable: field.settable,
						})
						.collect(),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", file.display());
	println!("records: {}", schema.records.len());

	for (idx, shape) in selected {
		println!("record: {}", shape.name);
		println!("record_index: {idx}");
		println!("field_count: {}", shape.fields.len());
		for field in &shape.fields {
			let mut line = format!("  {} {}", field.kind.label(), field.ident);
			if let Some(tag) = &field.tag {
				line.push_str(&format!(" tag={tag}"));
			}
			if !field.settable {
				line.push_str(" settable=false");
			}
			println!("{line}");
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct FieldJson {
	ident: String,
	name: String,
	kind: String,
	settable: bool,
}

#[derive(serde::Serialize)]
struct RecordJson {
	index: u32,
	name: String,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct SchemaJson {
	path: String,
	record_count: usize,
	records: Vec<RecordJson>,
}

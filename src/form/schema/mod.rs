use std::collections::HashMap;

use crate::form::kind::Kind;
use crate::form::{BindError, Result};

/// One field declaration inside a record shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldShape {
	/// Field identifier, used as the lookup fallback.
	pub ident: Box<str>,
	/// Explicit external name, if any.
	pub tag: Option<Box<str>>,
	/// Whether the binder may write this field.
	pub settable: bool,
	/// Declared kind driving conversion dispatch.
	pub kind: Kind,
}

impl FieldShape {
	/// Settable field without an explicit external name.
	pub fn new(ident: &str, kind: Kind) -> Self {
		Self {
			ident: ident.into(),
			tag: None,
			settable: true,
			kind,
		}
	}

	/// Settable field with an explicit external name.
	pub fn tagged(ident: &str, tag: &str, kind: Kind) -> Self {
		Self {
			ident: ident.into(),
			tag: Some(tag.into()),
			settable: true,
			kind,
		}
	}

	/// External lookup name: the tag when present, the identifier otherwise.
	pub fn external_name(&self) -> &str {
		self.tag.as_deref().unwrap_or(&self.ident)
	}
}

/// One named record declaration with fields in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordShape {
	/// Record type name.
	pub name: Box<str>,
	/// Field declarations in source order.
	pub fields: Vec<FieldShape>,
}

impl RecordShape {
	/// Record shape from a name and field list.
	pub fn new(name: &str, fields: Vec<FieldShape>) -> Self {
		Self { name: name.into(), fields }
	}
}

/// Validated table of record shapes addressed by index.
#[derive(Debug, Clone)]
pub struct Schema {
	/// Record declarations in table order.
	pub records: Vec<RecordShape>,
}

impl Schema {
	/// Validate and seal a record shape table.
	///
	/// Tags explicitly set to the empty string are normalized away so that
	/// lookups fall back to the field identifier, never to an empty key.
	pub fn new(mut records: Vec<RecordShape>) -> Result<Self> {
		for record in &mut records {
			for field in &mut record.fields {
				if field.tag.as_deref() == Some("") {
					field.tag = None;
				}
			}
		}

		let mut by_name: HashMap<&str, u32> = HashMap::new();
		for (idx, record) in records.iter().enumerate() {
			if let Some(first) = by_name.insert(&record.name, idx as u32) {
				return Err(BindError::SchemaDuplicateRecord {
					name: record.name.to_string(),
					first,
					second: idx as u32,
				});
			}

			for field in &record.fields {
				check_record_refs(&record.name, &field.ident, &field.kind, records.len())?;
			}
		}

		check_embed_cycles(&records)?;

		Ok(Self { records })
	}

	/// Look up a record shape by table index.
	pub fn record(&self, record_idx: u32) -> Option<&RecordShape> {
		self.records.get(record_idx as usize)
	}

	/// Look up a record shape and its index by name.
	pub fn record_by_name(&self, name: &str) -> Option<(u32, &RecordShape)> {
		self.records
			.iter()
			.enumerate()
			.find(|(_, item)| item.name.as_ref() == name)
			.map(|(idx, item)| (idx as u32, item))
	}
}

fn check_record_refs(record: &str, field: &str, kind: &Kind, table_len: usize) -> Result<()> {
	match kind {
		Kind::Record(idx) => {
			if *idx as usize >= table_len {
				return Err(BindError::SchemaIndexOutOfRange {
					record: record.to_owned(),
					field: field.to_owned(),
					idx: *idx,
					max: table_len.saturating_sub(1) as u32,
				});
			}
			Ok(())
		}
		Kind::Seq(inner) | Kind::Opt(inner) => check_record_refs(record, field, inner, table_len),
		_ => Ok(()),
	}
}

/// Reject record shapes that embed themselves by value, directly or
/// transitively. Zero-value allocation and flat-key recursion both walk
/// embedded record fields and must terminate.
fn check_embed_cycles(records: &[RecordShape]) -> Result<()> {
	#[derive(Clone, Copy, PartialEq)]
	enum Visit {
		Unvisited,
		InProgress,
		Done,
	}

	fn visit(records: &[RecordShape], idx: usize, state: &mut [Visit]) -> Result<()> {
		state[idx] = Visit::InProgress;
		for field in &records[idx].fields {
			let Kind::Record(target) = field.kind else {
				continue;
			};
			match state[target as usize] {
				Visit::InProgress => {
					return Err(BindError::SchemaRecordCycle {
						record: records[idx].name.to_string(),
						field: field.ident.to_string(),
					});
				}
				Visit::Unvisited => visit(records, target as usize, state)?,
				Visit::Done => {}
			}
		}
		state[idx] = Visit::Done;
		Ok(())
	}

	let mut state = vec![Visit::Unvisited; records.len()];
	for idx in 0..records.len() {
		if state[idx] == Visit::Unvisited {
			visit(records, idx, &mut state)?;
		}
	}
	Ok(())
}

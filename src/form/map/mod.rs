use crate::form::convert::{convert_optional, convert_scalar};
use crate::form::input::FormMap;
use crate::form::kind::Kind;
use crate::form::schema::Schema;
use crate::form::value::{Record, Slot};
use crate::form::{BindError, Result};

/// Populate a record instance in place from decoded form data.
///
/// Fields are processed in declaration order. A field whose external
/// name matches no key keeps its current value. An untagged embedded
/// record field is populated recursively from the same flat key space.
/// The first failure aborts the call; fields bound before it keep
/// their new values, and nothing written is rolled back.
pub fn bind_record(schema: &Schema, record: &mut Record, form: &FormMap) -> Result<()> {
	let Some(shape) = schema.record(record.record_idx) else {
		return Err(BindError::MissingRecord { record_idx: record.record_idx });
	};
	if record.slots.len() != shape.fields.len() {
		return Err(BindError::SlotCountMismatch {
			record: shape.name.to_string(),
			expected: shape.fields.len(),
			got: record.slots.len(),
		});
	}

	for (field, slot) in shape.fields.iter().zip(record.slots.iter_mut()) {
		if !field.settable {
			continue;
		}

		match field.kind {
			Kind::Record(target) if field.tag.is_none() => {
				let Slot::Record(inner) = slot else {
					return Err(shape_mismatch(&shape.name, &field.ident));
				};
				if inner.record_idx != target {
					return Err(shape_mismatch(&shape.name, &field.ident));
				}
				bind_record(schema, inner, form)?;
				continue;
			}
			_ => {}
		}

		let Some(values) = form.values(field.external_name()) else {
			continue;
		};

		match &field.kind {
			Kind::Seq(elem) if !values.is_empty() => {
				let mut items = Vec::with_capacity(values.len());
				for raw in values {
					items.push(convert_scalar(elem, raw, &shape.name, &field.ident)?);
				}
				let Slot::Seq(stored) = slot else {
					return Err(shape_mismatch(&shape.name, &field.ident));
				};
				*stored = items;
			}
			Kind::Seq(_) => {}
			Kind::Opt(inner) => {
				let Some(raw) = values.first() else {
					continue;
				};
				let converted = convert_optional(inner, raw, &shape.name, &field.ident)?;
				if !matches!(slot, Slot::Opt(_)) {
					return Err(shape_mismatch(&shape.name, &field.ident));
				}
				*slot = converted;
			}
			kind => {
				let Some(raw) = values.first() else {
					continue;
				};
				let converted = convert_scalar(kind, raw, &shape.name, &field.ident)?;
				if !matches!(slot, Slot::Scalar(_)) {
					return Err(shape_mismatch(&shape.name, &field.ident));
				}
				*slot = Slot::Scalar(converted);
			}
		}
	}

	Ok(())
}

/// Resolve a shape by name, allocate a zeroed instance, and bind it.
pub fn bind_new_record(schema: &Schema, name: &str, form: &FormMap) -> Result<Record> {
	let Some((record_idx, _)) = schema.record_by_name(name) else {
		return Err(BindError::RecordNotFound { name: name.to_owned() });
	};
	let mut record = Record::zeroed(schema, record_idx)?;
	bind_record(schema, &mut record, form)?;
	Ok(record)
}

fn shape_mismatch(record: &str, field: &str) -> BindError {
	BindError::SlotShapeMismatch {
		record: record.to_owned(),
		field: field.to_owned(),
	}
}

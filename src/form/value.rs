use crate::form::kind::{FloatWidth, Kind};
use crate::form::schema::Schema;
use crate::form::{BindError, Result};

/// Typed scalar payload produced by form value conversion.
#[derive(Debug, Clone)]
pub enum Scalar {
	/// Signed integer, stored wide regardless of declared width.
	I64(i64),
	/// Unsigned integer, stored wide regardless of declared width.
	U64(u64),
	/// Boolean scalar.
	Bool(bool),
	/// 32-bit float scalar.
	F32(f32),
	/// 64-bit float scalar.
	F64(f64),
	/// Owned string payload.
	Str(Box<str>),
}

/// One field storage cell inside a record instance.
#[derive(Debug, Clone)]
pub enum Slot {
	/// Plain scalar cell.
	Scalar(Scalar),
	/// Repeated scalar cell, one element per bound value.
	Seq(Vec<Scalar>),
	/// Present-or-absent scalar cell.
	Opt(Option<Scalar>),
	/// Embedded record cell.
	Record(Record),
}

/// Record instance with one slot per declared field.
#[derive(Debug, Clone)]
pub struct Record {
	/// Index of the shape this instance was allocated from.
	pub record_idx: u32,
	/// Field storage in shape declaration order.
	pub slots: Vec<Slot>,
}

impl Record {
	/// Allocate an instance of the given shape with every slot zeroed.
	///
	/// Zero means `0` for integers, `false` for booleans, `0.0` for floats,
	/// the empty string for strings, an empty sequence, an absent optional,
	/// and a recursively zeroed instance for embedded records.
	pub fn zeroed(schema: &Schema, record_idx: u32) -> Result<Self> {
		let Some(shape) = schema.record(record_idx) else {
			return Err(BindError::MissingRecord { record_idx });
		};
		let mut slots = Vec::with_capacity(shape.fields.len());
		for field in &shape.fields {
			slots.push(zero_slot(schema, &field.kind)?);
		}
		Ok(Self { record_idx, slots })
	}

	/// Look up a slot by field identifier through the owning shape.
	pub fn field<'a>(&'a self, schema: &Schema, ident: &str) -> Option<&'a Slot> {
		let shape = schema.record(self.record_idx)?;
		let pos = shape.fields.iter().position(|field| field.ident.as_ref() == ident)?;
		self.slots.get(pos)
	}
}

fn zero_slot(schema: &Schema, kind: &Kind) -> Result<Slot> {
	Ok(match kind {
		Kind::Int(_) => Slot::Scalar(Scalar::I64(0)),
		Kind::Uint(_) => Slot::Scalar(Scalar::U64(0)),
		Kind::Bool => Slot::Scalar(Scalar::Bool(false)),
		Kind::Float(FloatWidth::W32) => Slot::Scalar(Scalar::F32(0.0)),
		Kind::Float(FloatWidth::W64) => Slot::Scalar(Scalar::F64(0.0)),
		Kind::Str => Slot::Scalar(Scalar::Str("".into())),
		Kind::Seq(_) => Slot::Seq(Vec::new()),
		Kind::Opt(_) => Slot::Opt(None),
		Kind::Record(idx) => Slot::Record(Record::zeroed(schema, *idx)?),
	})
}

#[cfg(test)]
mod tests {
	use super::{Record, Scalar, Slot};
	use crate::form::kind::{FloatWidth, IntWidth, Kind};
	use crate::form::{BindError, FieldShape, RecordShape, Schema};

	fn sample_schema() -> Schema {
		Schema::new(vec![
			RecordShape::new(
				"Profile",
				vec![
					FieldShape::new("name", Kind::Str),
					FieldShape::new("age", Kind::Int(IntWidth::Native)),
					FieldShape::new("flags", Kind::Uint(IntWidth::W8)),
					FieldShape::new("active", Kind::Bool),
					FieldShape::new("ratio", Kind::Float(FloatWidth::W32)),
					FieldShape::new("score", Kind::Float(FloatWidth::W64)),
					FieldShape::new("tags", Kind::Seq(Box::new(Kind::Str))),
					FieldShape::new("nick", Kind::Opt(Box::new(Kind::Str))),
					FieldShape::new("home", Kind::Record(1)),
				],
			),
			RecordShape::new("Address", vec![FieldShape::new("city", Kind::Str)]),
		])
		.expect("schema builds")
	}

	#[test]
	fn zeroed_allocates_every_slot_form() {
		let schema = sample_schema();
		let record = Record::zeroed(&schema, 0).expect("zeroed allocates");
		assert_eq!(record.record_idx, 0);
		assert_eq!(record.slots.len(), 9);

		assert!(matches!(record.slots[0], Slot::Scalar(Scalar::Str(ref text)) if text.is_empty()));
		assert!(matches!(record.slots[1], Slot::Scalar(Scalar::I64(0))));
		assert!(matches!(record.slots[2], Slot::Scalar(Scalar::U64(0))));
		assert!(matches!(record.slots[3], Slot::Scalar(Scalar::Bool(false))));
		assert!(matches!(record.slots[4], Slot::Scalar(Scalar::F32(value)) if value == 0.0));
		assert!(matches!(record.slots[5], Slot::Scalar(Scalar::F64(value)) if value == 0.0));
		assert!(matches!(record.slots[6], Slot::Seq(ref items) if items.is_empty()));
		assert!(matches!(record.slots[7], Slot::Opt(None)));

		let Slot::Record(ref home) = record.slots[8] else {
			panic!("expected embedded record slot");
		};
		assert_eq!(home.record_idx, 1);
		assert!(matches!(home.slots[0], Slot::Scalar(Scalar::Str(ref text)) if text.is_empty()));
	}

	#[test]
	fn zeroed_rejects_unknown_record_index() {
		let schema = sample_schema();
		let err = Record::zeroed(&schema, 7).expect_err("unknown index should fail");
		assert!(matches!(err, BindError::MissingRecord { record_idx: 7 }));
	}

	#[test]
	fn field_resolves_by_identifier() {
		let schema = sample_schema();
		let record = Record::zeroed(&schema, 0).expect("zeroed allocates");

		let slot = record.field(&schema, "active").expect("active resolves");
		assert!(matches!(slot, Slot::Scalar(Scalar::Bool(false))));
		assert!(record.field(&schema, "missing").is_none());
	}
}

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BindError>;

/// Errors produced while building schemas and binding form data.
#[derive(Debug, Error)]
pub enum BindError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Two schema records share one name.
	#[error("schema duplicate record {name}: first={first}, second={second}")]
	SchemaDuplicateRecord {
		/// Duplicated record name.
		name: String,
		/// First record index observed.
		first: u32,
		/// Second record index observed.
		second: u32,
	},
	/// Field kind referenced a record index outside the schema table.
	#[error("schema record index out of range at {record}.{field}: idx={idx}, max={max}")]
	SchemaIndexOutOfRange {
		/// Record declaring the offending field.
		record: String,
		/// Field whose kind holds the index.
		field: String,
		/// Offending record index.
		idx: u32,
		/// Maximum valid index.
		max: u32,
	},
	/// Record shapes embed one another by value.
	#[error("schema record cycle through {record}.{field}")]
	SchemaRecordCycle {
		/// Record on the cycle.
		record: String,
		/// Embedded-record field closing the cycle.
		field: String,
	},
	/// Schema file text could not be parsed.
	#[error("invalid schema file: {reason}")]
	SchemaFileInvalid {
		/// Parser failure detail.
		reason: String,
	},
	/// Kind token text was not recognized.
	#[error("invalid kind token: {token}")]
	InvalidKindToken {
		/// User-provided kind text.
		token: String,
	},
	/// Requested record name was not found in the schema.
	#[error("record not found: {name}")]
	RecordNotFound {
		/// Requested record name.
		name: String,
	},
	/// Record shape index is missing from the schema.
	#[error("missing record shape index {record_idx}")]
	MissingRecord {
		/// Missing shape index.
		record_idx: u32,
	},
	/// Record instance slot count does not match its shape.
	#[error("slot count mismatch for {record}: expected={expected}, got={got}")]
	SlotCountMismatch {
		/// Record shape name.
		record: String,
		/// Field count declared by the shape.
		expected: usize,
		/// Slot count held by the instance.
		got: usize,
	},
	/// Instance slot variant does not match the field's declared kind.
	#[error("slot shape mismatch at {record}.{field}")]
	SlotShapeMismatch {
		/// Record shape name.
		record: String,
		/// Field whose slot has the wrong shape.
		field: String,
	},
	/// Declared kind has no conversion rule.
	#[error("unsupported kind {kind} at {record}.{field}")]
	UnsupportedKind {
		/// Record shape name.
		record: String,
		/// Field declaring the kind.
		field: String,
		/// Diagnostic label of the unsupported kind.
		kind: String,
	},
	/// String value failed to parse as the declared kind.
	#[error("cannot convert {value:?} to {kind} at {record}.{field}: {reason}")]
	Conversion {
		/// Record shape name.
		record: String,
		/// Field being converted.
		field: String,
		/// Diagnostic label of the target kind.
		kind: String,
		/// Raw input value.
		value: String,
		/// Underlying parse failure.
		reason: String,
	},
}

/// Bit width selector for the integer kind families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
	/// Platform-natural width (pointer-sized).
	Native,
	/// 8-bit width.
	W8,
	/// 16-bit width.
	W16,
	/// 32-bit width.
	W32,
	/// 64-bit width.
	W64,
}

impl IntWidth {
	/// Effective bit count, resolving `Native` to the platform width.
	pub fn bits(self) -> u32 {
		match self {
			IntWidth::Native => usize::BITS,
			IntWidth::W8 => 8,
			IntWidth::W16 => 16,
			IntWidth::W32 => 32,
			IntWidth::W64 => 64,
		}
	}

	/// Whether a signed value fits in this width.
	pub fn fits_signed(self, value: i64) -> bool {
		let bits = self.bits();
		if bits >= 64 {
			return true;
		}
		let max = (1_i64 << (bits - 1)) - 1;
		value >= -max - 1 && value <= max
	}

	/// Whether an unsigned value fits in this width.
	pub fn fits_unsigned(self, value: u64) -> bool {
		let bits = self.bits();
		bits >= 64 || value <= (1_u64 << bits) - 1
	}
}

/// Bit width selector for the float kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
	/// 32-bit width.
	W32,
	/// 64-bit width.
	W64,
}

impl FloatWidth {
	/// Bit count of the float representation.
	pub fn bits(self) -> u32 {
		match self {
			FloatWidth::W32 => 32,
			FloatWidth::W64 => 64,
		}
	}
}

/// Closed set of field shapes the binder knows how to populate.
///
/// `Seq` and `Opt` may syntactically wrap any kind, but only scalar
/// element kinds carry a conversion rule; anything else surfaces as an
/// unsupported-kind error when a matching input value reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
	/// Signed integer at the given bit width.
	Int(IntWidth),
	/// Unsigned integer at the given bit width.
	Uint(IntWidth),
	/// Boolean literal field.
	Bool,
	/// Floating point at the given bit width.
	Float(FloatWidth),
	/// Verbatim string field.
	Str,
	/// Homogeneous sequence of an element kind.
	Seq(Box<Kind>),
	/// Optional wrapper with observable presence.
	Opt(Box<Kind>),
	/// Embedded record by schema table index.
	Record(u32),
}

impl Kind {
	/// Short diagnostic label, for example `u16`, `seq(string)`, `record#2`.
	pub fn label(&self) -> String {
		match self {
			Kind::Int(IntWidth::Native) => "int".to_owned(),
			Kind::Int(width) => format!("i{}", width.bits()),
			Kind::Uint(IntWidth::Native) => "uint".to_owned(),
			Kind::Uint(width) => format!("u{}", width.bits()),
			Kind::Bool => "bool".to_owned(),
			Kind::Float(width) => format!("f{}", width.bits()),
			Kind::Str => "string".to_owned(),
			Kind::Seq(elem) => format!("seq({})", elem.label()),
			Kind::Opt(inner) => format!("opt({})", inner.label()),
			Kind::Record(idx) => format!("record#{idx}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{FloatWidth, IntWidth, Kind};

	#[test]
	fn signed_width_bounds_are_enforced() {
		assert!(IntWidth::W8.fits_signed(127));
		assert!(IntWidth::W8.fits_signed(-128));
		assert!(!IntWidth::W8.fits_signed(128));
		assert!(!IntWidth::W8.fits_signed(-129));
		assert!(IntWidth::W64.fits_signed(i64::MAX));
		assert!(IntWidth::Native.fits_signed(i64::MIN) || usize::BITS < 64);
	}

	#[test]
	fn unsigned_width_bounds_are_enforced() {
		assert!(IntWidth::W16.fits_unsigned(65535));
		assert!(!IntWidth::W16.fits_unsigned(65536));
		assert!(IntWidth::W64.fits_unsigned(u64::MAX));
	}

	#[test]
	fn labels_render_nested_kinds() {
		assert_eq!(Kind::Int(IntWidth::Native).label(), "int");
		assert_eq!(Kind::Uint(IntWidth::W8).label(), "u8");
		assert_eq!(Kind::Float(FloatWidth::W32).label(), "f32");
		assert_eq!(Kind::Seq(Box::new(Kind::Str)).label(), "seq(string)");
		assert_eq!(Kind::Opt(Box::new(Kind::Int(IntWidth::W64))).label(), "opt(i64)");
		assert_eq!(Kind::Record(2).label(), "record#2");
	}
}

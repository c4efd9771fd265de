mod convert;
mod error;
mod input;
mod kind;
mod map;
mod schema;
mod value;

/// Scalar conversion entry points.
pub use convert::{convert_optional, convert_scalar};
/// Error and result aliases.
pub use error::{BindError, Result};
/// Decoded form payload container.
pub use input::FormMap;
/// Field kind model and width selectors.
pub use kind::{FloatWidth, IntWidth, Kind};
/// Record binding entry points.
pub use map::{bind_new_record, bind_record};
/// Record shape table types.
pub use schema::{FieldShape, RecordShape, Schema};
/// Record instance storage types.
pub use value::{Record, Scalar, Slot};

//! Public library API for binding decoded form data onto typed records.

/// Record schemas, form maps, scalar conversion, and the field binder.
pub mod form;

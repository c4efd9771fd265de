/// Form data binding command.
pub mod bind;
/// Schema inspection command.
pub mod schema;
/// Shared schema loading and output helpers.
pub mod util;

/// Closed sets of categories that index the parameter tables
pub mod categories;
/// Enum-keyed lookup tables with a value for every member
pub mod category_map;
/// Access to settings documents and assets under a data root
pub mod data;
/// The parameter table and the operation that loads it
pub mod db;
/// Reporting of load-time warnings and failures
pub mod diagnostics;
/// Error definitions
pub mod error;

pub use vfs;

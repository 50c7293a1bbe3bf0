pub mod file_source;
pub mod table;

pub use file_source::{parse_alias_file, FileAliasSource};
pub use table::AliasTable;

#![allow(dead_code)]

pub mod mock_aliases;

pub use mock_aliases::{MockAliasRepository, MockAliasSource};

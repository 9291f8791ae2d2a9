//! Command modules for the EDB Inspect CLI

pub mod config;
pub mod disasm;
pub mod snapshot;
pub mod value;

pub use config::show_config;
pub use disasm::disasm;
pub use snapshot::snapshot;
pub use value::value;

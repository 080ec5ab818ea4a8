//! Named CCL records and the structures that describe their layout.
//!
//! A [`Structure`] is an ordered list of typed [`Field`]s. A [`Record`] gives a
//! structure a name. The record runtime reads the structure to allocate and
//! marshal the matching in-memory layout. Records are created through
//! [`record_factory::create`].

pub mod data_type;
pub mod field;
pub mod record;
pub mod record_factory;
pub mod structure;

pub use data_type::DataType;
pub use field::Field;
pub use record::Record;
pub use structure::{Structure, StructureBuilder};

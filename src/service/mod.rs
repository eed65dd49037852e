//! CrudService: owner-scoped CRUD over the SQL builder.

mod crud;
pub use crud::{CrudService, Record};

//! User-scoped CRUD REST API over PostgreSQL.
//!
//! Five resources (customer, invoice, order, product, shipment) share one
//! schema and one endpoint shape; handlers resolve the resource from the
//! request path and every statement filters by the owning user.

pub mod error;
pub mod extract;
pub mod form;
pub mod handlers;
pub mod resource;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod settings;
pub mod sql;
pub mod state;

pub use error::{AppError, SettingsError};
pub use extract::AuthUser;
pub use form::ResourceForm;
pub use resource::{Resource, RESOURCES};
pub use routes::{api_routes, common_routes_with_ready};
pub use schema::{ensure_database_exists, ensure_tables};
pub use service::{CrudService, Record};
pub use settings::Settings;
pub use state::AppState;

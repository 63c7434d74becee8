//! Role module - job roles and the catalog that holds them.

mod catalog;
mod role;

pub use catalog::RoleCatalog;
pub use role::Role;

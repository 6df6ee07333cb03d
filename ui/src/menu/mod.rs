//! Navigation menu model.
//!
//! A static tree of [`MenuItem`] nodes, pruned per user role by
//! [`filter_by_role`] before rendering. The admin layout filters
//! [`defaults::admin_menu`] with the current profile's role and re-filters
//! whenever the profile changes.

pub mod defaults;
pub mod filter;
pub mod types;

pub use defaults::{admin_menu, front_menu};
pub use filter::{filter_by_role, find_by_index};
pub use types::MenuItem;

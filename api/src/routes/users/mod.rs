//! Account listing, counting and profile route handlers

pub mod count;
pub mod list;
pub mod profile;

pub use count::count;
pub use list::list;
pub use profile::{delete_profile, get_profile, update_profile};

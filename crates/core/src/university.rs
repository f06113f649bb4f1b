//! University record shapes.
//!
//! `University` is what storage returns. `NewUniversity` and
//! `UniversityPatch` are what callers supply; neither carries a `slug`, so
//! the derived field can only be set by [`crate::prepare_for_create`] and
//! [`crate::prepare_for_update`].

mod filter;
mod input;
mod record;
mod update;

pub use filter::UniversityFilter;
pub use input::{NewUniversity, UniversityPatch};
pub use record::{Contact, University};
pub use update::{PreparedUniversity, UniversityUpdate};

mod destination;
mod error;
mod graph;
mod issuer;
mod name;

pub use crate::destination::Destination;
pub use crate::error::{Error, Result};
pub use crate::graph::{build, Intent, ResourceGraph};
pub use crate::issuer::{select, Chooser, First, Issuer, Named, Scope};
pub use crate::name::{sanitize, ObjectName, Subject, LINK_LABEL, ROOT_PREFIX};

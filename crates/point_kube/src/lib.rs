mod apply;
mod client;
mod error;
mod issuers;

pub use crate::apply::{apply, Applier};
pub use crate::client::{Client, FIELD_MANAGER};
pub use crate::error::{Error, Kind, Result, Source};
pub use crate::issuers::{candidates, IssuerSource};

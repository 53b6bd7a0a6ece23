//! Addressfill lookup — AddressComplete search and retrieve clients plus the
//! autocomplete controller that binds them to one form input.

pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod source;

pub use config::{AutocompleteOptions, LookupConfig};
pub use controller::{
    AutocompleteController, AutocompleteEvent, NavigationKey, PendingSearch, WidgetState,
};
pub use error::{LookupError, Result};
pub use source::{AddressCompleteSource, AddressSource};

//! Addressfill core — field name mapping, the form seam, and submission
//! result rendering. No I/O lives here.

pub mod fields;
pub mod form;
pub mod registry;
pub mod render;
pub mod types;

pub use fields::{ADDRESS_COMPONENTS, DEFAULT_LINE1_SUFFIX, FieldMapping, FieldNameResolver};
pub use form::{FormDocument, Fragment, MemoryForm};
pub use registry::{HandlerRegistry, SubmissionHandler};
pub use types::{AddressQuery, ResolvedAddress, SubmissionResult, Suggestion};

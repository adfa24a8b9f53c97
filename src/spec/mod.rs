//! The specification model: store, text formats, shape validation, and the
//! read/edit helpers the editor surfaces use.

pub mod edit;
pub mod format;
pub mod outline;
pub mod sample;
pub mod store;
pub mod validate;

pub use format::SpecFormat;
pub use sample::sample_document;
pub use store::{SpecStore, StoreSnapshot};
pub use validate::{check_minimal_shape, is_minimal_shape, VERSION_TAG};

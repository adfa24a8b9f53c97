pub mod textarea;

pub use textarea::{TextAreaInput, TextAreaInputWidget};

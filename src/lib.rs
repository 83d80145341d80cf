pub mod contact;
pub mod date;
pub mod document;
pub mod error;
pub mod events;
pub mod footer;
pub mod markup;
pub mod nav;
pub mod pages;
pub mod sink;
pub mod source;

pub use document::Document;
pub use error::{Error, Result};
pub use events::{RawEvent, Schedule};
pub use pages::{Page, Site, UserEvent};

//! apiref — render-ready API reference entries for a versioned library.
//!
//! Given every version of a library and the symbol table of each, an entry
//! is resolved at a requested version and turned into a [`view::ViewModel`]:
//! a header with version-selector state and an ordered list of sections.
//! Switching versions yields the route the reader moves to.

pub mod classify;
pub mod content;
pub mod error;
pub mod model;
pub mod page;
pub mod render;
pub mod section;
pub mod site;
pub mod slug;
pub mod version;
pub mod view;

pub use content::{Library, SymbolTable};
pub use error::ContentError;
pub use page::{EntryPage, EntryState};
pub use site::SiteConfig;
pub use slug::Route;
pub use view::{RenderOptions, ViewModel};

//! Turns RDF terms into presentational fragments.
//!
//! A [`Fragment`] is a small, self-contained tree of labels, links and badges. It can be written
//! as plain text (via [`Display`](std::fmt::Display)) or as HTML (via [`Fragment::to_html`]).

mod config;
mod error;
mod fragment;
mod prefix;
mod renderer;
mod view;

pub use config::{RenderConfig, DEFAULT_EXPLORE_PATH};
pub use error::RenderError;
pub use fragment::{Fragment, FragmentClass, NavigationTarget};
pub use prefix::PrefixTable;
pub use renderer::TermRenderer;
pub use view::{EntityRow, EntityView};

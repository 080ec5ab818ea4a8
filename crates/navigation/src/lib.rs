//! Documentation navigation links.
//!
//! A [`Navigation`] pairs the text shown for a link with the place it points
//! to. The documentation renderer reads these pairs to emit hyperlinks.

pub mod link;

pub use link::Navigation;

//! File transfer request descriptors.
//!
//! A [`FileRequest`] names where a file comes from and where it goes. The
//! transfer engine that acts on it lives elsewhere; this crate only builds and
//! validates the descriptor. Requests are created through
//! [`file_request_factory::create`].

pub mod file_request_factory;
pub mod request;
pub mod uri;

pub use request::FileRequest;
pub use uri::Uri;

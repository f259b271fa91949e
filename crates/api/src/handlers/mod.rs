//! Request handlers, one module per resource.

pub mod articles;
pub mod comments;
pub mod meta;
pub mod topics;
pub mod users;

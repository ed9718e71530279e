pub mod access;
pub mod post;
pub mod session;
pub mod user;

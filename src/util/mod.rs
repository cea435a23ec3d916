//! Browser utilities that need `web-sys`.

pub mod dom;

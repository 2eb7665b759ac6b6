#![forbid(unsafe_code)]

pub mod list;

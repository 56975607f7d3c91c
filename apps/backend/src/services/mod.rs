//! Backend services

pub mod sessions;

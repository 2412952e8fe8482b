//! plateplot - Plot nesting plates and placed pieces from a flat-text layout file

pub mod config;
pub mod domain;
pub mod geometry;
pub mod parser;
pub mod render;

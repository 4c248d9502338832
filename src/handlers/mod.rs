//! HTTP handlers: HTML pages (loaders and actions) and the JSON API.

pub mod api;
pub mod pages;

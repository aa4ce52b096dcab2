//! yearwall: full-year calendar wallpaper image service.
//!
//! A stateless HTTP GET endpoint renders the current year as a grid of
//! twelve months sized for a target phone screen, with past/today/future
//! cells colored by a named theme. Each request is an independent pure
//! computation from (query parameters, current time) to a PNG buffer.

pub mod calendar;
pub mod catalog;
pub mod layout;
pub mod params;
pub mod raster;
pub mod render;
pub mod server;

//! Running and cycling workout log keyed to map locations.
//!
//! [`app::App`] is the controller: it owns the workout list, reacts to map
//! clicks and form submissions, and writes the whole list back through a
//! [`store::Store`] after each addition. Drawing goes through
//! [`render::Renderer`].

pub mod app;
pub mod cli;
pub mod error;
pub mod form;
pub mod geo;
pub mod render;
pub mod store;
pub mod types;
pub mod utils;
pub mod workout;

//! Media gallery - the display side of the list API.
//!
//! Loads the anime, manga and novel lists concurrently and renders them as a
//! text gallery. The view is all-or-nothing: if any list fails to load, the
//! whole gallery is replaced by a single error state.

pub mod client;
pub mod render;

pub use client::{Gallery, GalleryClient, GalleryError};
pub use render::{render_error, render_gallery, ERROR_TEXT};

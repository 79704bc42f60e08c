//! Texture sidecar generation
//!
//! This module handles:
//! - Finding PNG images in a folder, optionally recursing (scan.rs)
//! - Deriving and checking the XML sidecar of each image (sidecar.rs)
//! - The fixed sidecar content (template.rs)
//! - Running a full pass over a folder (generator.rs)

pub mod generator;
pub mod scan;
pub mod sidecar;
pub mod template;

pub use generator::generate;

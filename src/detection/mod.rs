//! Project type detection.

pub mod project;

pub use project::{ProjectDetection, ProjectDetector, ProjectType, MARKERS};

// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Infrastructure layer implements application layer ports
//! - Presentation layer and the capture session only see the port traits
//!
//! # Example
//!
//! ```ignore
//! use plant_identifier::application::port::CameraBackend;
//! use plant_identifier::infrastructure::SyntheticCamera;
//!
//! let backend: std::sync::Arc<dyn CameraBackend> =
//!     std::sync::Arc::new(SyntheticCamera::default());
//! ```

pub mod port;

// SPDX-License-Identifier: MPL-2.0
//! `plant_identifier` is a plant identification prototype built with the Iced
//! GUI framework.
//!
//! It walks through a splash and onboarding sequence, a tabbed home shell, a
//! camera screen with library import, a simulated scanning sequence and a
//! sample plant care sheet. Identification is a stub that always returns the
//! bundled sample record.

#![doc(html_root_url = "https://docs.rs/plant_identifier/0.1.0")]

pub mod app;
pub mod application;
pub mod camera;
pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod picker;
pub mod scan;
pub mod ui;

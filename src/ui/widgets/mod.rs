// SPDX-License-Identifier: MPL-2.0
pub mod brackets;
pub mod step_indicator;

pub use brackets::FramingOverlay;
pub use step_indicator::StepIndicator;

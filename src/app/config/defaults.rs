// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Splash**: How long the splash screen stays up
//! - **Scan**: Timing of the simulated scanning milestones
//! - **Camera**: Initial camera facing and flash state

// ==========================================================================
// Splash Defaults
// ==========================================================================

/// Default time the splash screen stays visible (in milliseconds).
pub const DEFAULT_SPLASH_TIMEOUT_MS: u64 = 3_500;

/// Minimum splash timeout (in milliseconds).
pub const MIN_SPLASH_TIMEOUT_MS: u64 = 500;

/// Maximum splash timeout (in milliseconds).
pub const MAX_SPLASH_TIMEOUT_MS: u64 = 10_000;

// ==========================================================================
// Scan Defaults
// ==========================================================================

/// Delay between two scanning steps (in milliseconds).
pub const DEFAULT_SCAN_STEP_DELAY_MS: u64 = 1_000;

/// Delay between the last step completing and the scan finishing
/// (in milliseconds).
pub const DEFAULT_SCAN_SETTLE_DELAY_MS: u64 = 500;

/// Upper bound for any single scan delay (in milliseconds).
pub const MAX_SCAN_DELAY_MS: u64 = 10_000;

/// Duration of one scan-line sweep across the frame (in milliseconds).
pub const SCAN_LINE_SWEEP_MS: u64 = 1_500;

// ==========================================================================
// Camera Defaults
// ==========================================================================

/// Whether the flash starts enabled.
pub const DEFAULT_FLASH_ENABLED: bool = false;

/// Interval between two preview frames (in milliseconds).
pub const PREVIEW_FRAME_INTERVAL_MS: u64 = 100;

/// Interval between two animation frames on the splash and scanning screens
/// (in milliseconds).
pub const ANIMATION_FRAME_INTERVAL_MS: u64 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splash_default_is_within_bounds() {
        assert!(DEFAULT_SPLASH_TIMEOUT_MS >= MIN_SPLASH_TIMEOUT_MS);
        assert!(DEFAULT_SPLASH_TIMEOUT_MS <= MAX_SPLASH_TIMEOUT_MS);
    }

    #[test]
    fn scan_delays_fit_under_the_cap() {
        assert!(DEFAULT_SCAN_STEP_DELAY_MS <= MAX_SCAN_DELAY_MS);
        assert!(DEFAULT_SCAN_SETTLE_DELAY_MS <= MAX_SCAN_DELAY_MS);
        assert_eq!(
            DEFAULT_SCAN_STEP_DELAY_MS * 3 + DEFAULT_SCAN_SETTLE_DELAY_MS,
            3_500
        );
    }
}

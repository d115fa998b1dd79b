// ============================================================================
// Normalizer Configuration
// Precision policy applied when rendering raw results as answer strings
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of decimal places kept for magnitudes >= 1
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Largest scale `rust_decimal` can hold
pub const MAX_DECIMAL_PLACES: u32 = 28;

// ============================================================================
// Magnitude Test
// ============================================================================

/// How the rounding engine decides that a value is a "small magnitude" whose
/// precision should be widened past its leading-zero run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MagnitudeTest {
    /// Compare the rendered integer part with `"0"` literally.
    /// Values in (-1, 0) render as `"-0"` and keep the default precision,
    /// which is what the reference answers were generated with.
    #[default]
    Textual,

    /// Run the test on the absolute value, so small negatives are widened
    /// the same way as small positives.
    Absolute,
}

// ============================================================================
// Complete Normalizer Configuration
// ============================================================================

/// Configuration for turning raw numeric results into canonical strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizerConfig {
    /// Decimal places kept when no widening applies
    pub decimal_places: u32,

    /// Small-magnitude detection rule
    pub magnitude_test: MagnitudeTest,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            magnitude_test: MagnitudeTest::Textual,
        }
    }
}

impl NormalizerConfig {
    /// Create a new configuration
    pub fn new(decimal_places: u32, magnitude_test: MagnitudeTest) -> Self {
        Self {
            decimal_places,
            magnitude_test,
        }
    }

    /// Builder method: Set default decimal places
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Builder method: Set the small-magnitude rule
    pub fn with_magnitude_test(mut self, magnitude_test: MagnitudeTest) -> Self {
        self.magnitude_test = magnitude_test;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(format!(
                "Decimal places must be at most {}, got {}",
                MAX_DECIMAL_PLACES, self.decimal_places
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl NormalizerConfig {
    /// Reference grading configuration
    /// - 2 decimal places
    /// - Textual magnitude test (small negatives are not widened)
    pub fn reference() -> Self {
        Self::default()
    }

    /// Sign-aware configuration
    /// - 2 decimal places
    /// - Small negatives widened like small positives
    pub fn sign_aware() -> Self {
        Self::default().with_magnitude_test(MagnitudeTest::Absolute)
    }
}

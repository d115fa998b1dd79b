// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::config::{MagnitudeTest, NormalizerConfig};
use crate::engine::Calculator;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Precision policy for rendered answers
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or validation error
///
/// # Example
/// ```
/// use funcqa_math::prelude::*;
/// use funcqa_math::engine::factory::create_from_config;
///
/// let calculator = create_from_config(NormalizerConfig::reference()).unwrap();
/// let args = [Number::from(2), Number::from(3), Number::from(2)];
/// assert_eq!(calculator.evaluate(Operation::Power, &args).unwrap(), "64");
/// ```
pub fn create_from_config(config: NormalizerConfig) -> Result<Calculator, String> {
    config.validate()?;
    Ok(Calculator::new(config))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use funcqa_math::engine::factory::CalculatorBuilder;
///
/// let calculator = CalculatorBuilder::new()
///     .decimal_places(3)
///     .sign_aware()
///     .build()
///     .unwrap();
/// assert_eq!(calculator.config().decimal_places, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: NormalizerConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with the reference configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Default decimal places for magnitudes >= 1
    pub fn decimal_places(mut self, decimal_places: u32) -> Self {
        self.config.decimal_places = decimal_places;
        self
    }

    /// Compare the rendered integer part literally (reference behavior)
    pub fn textual_magnitude(mut self) -> Self {
        self.config.magnitude_test = MagnitudeTest::Textual;
        self
    }

    /// Widen precision for small negatives as well as small positives
    pub fn sign_aware(mut self) -> Self {
        self.config.magnitude_test = MagnitudeTest::Absolute;
        self
    }

    /// Build the calculator
    pub fn build(self) -> Result<Calculator, String> {
        create_from_config(self.config)
    }
}

// ============================================================================
// Calculator
// Evaluates operator requests and renders canonical answers
// ============================================================================

use crate::domain::{NormalizerConfig, Operation, OperationRequest};
use crate::format::Normalizer;
use crate::numeric::{Number, NumericResult};

/// Stateless evaluator bound to one precision policy.
///
/// Every call is independent, so a single `Calculator` can be shared across
/// threads when a harness grades questions in parallel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    normalizer: Normalizer,
}

impl Calculator {
    /// Create a calculator with the given precision policy
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
        }
    }

    /// The active precision policy
    pub fn config(&self) -> &NormalizerConfig {
        self.normalizer.config()
    }

    /// Evaluate an operator and normalize its result.
    pub fn evaluate(&self, operation: Operation, args: &[Number]) -> NumericResult<String> {
        let raw = operation.compute(args)?;
        let answer = self.normalizer.normalize(raw)?;

        tracing::debug!(
            operation = operation.name(),
            args = args.len(),
            raw = %raw,
            answer = %answer,
            "evaluated operation"
        );
        Ok(answer)
    }

    /// Resolve an operator by name, then evaluate it.
    ///
    /// # Errors
    /// `UnknownOperation` if the name is not in the catalogue.
    pub fn evaluate_named(&self, name: &str, args: &[Number]) -> NumericResult<String> {
        let operation: Operation = name.parse()?;
        self.evaluate(operation, args)
    }

    /// Evaluate a single request.
    pub fn evaluate_request(&self, request: &OperationRequest) -> NumericResult<String> {
        self.evaluate(request.operation, &request.args)
    }

    /// Evaluate many requests. A failing request yields its error in place and
    /// does not stop the rest of the batch.
    pub fn evaluate_batch(&self, requests: &[OperationRequest]) -> Vec<NumericResult<String>> {
        requests
            .iter()
            .enumerate()
            .map(|(index, request)| {
                let result = self.evaluate_request(request);
                if let Err(error) = &result {
                    tracing::warn!(
                        index,
                        operation = request.operation.name(),
                        %error,
                        "request failed"
                    );
                }
                result
            })
            .collect()
    }
}

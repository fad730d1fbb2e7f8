//! AI order annotation collaborator.
//!
//! Given a user's free-text order, the collaborator returns a structured
//! `{summary, estimatedPrice, nutritionTip}` estimate. It is strictly
//! advisory: the order path never waits on it to succeed, and any failure
//! at this boundary is replaced by [`OrderAnalysis::degraded`] before an
//! order is created.
//!
//! The production implementation is [`GeminiAnnotator`], a client for the
//! Gemini `generateContent` API with a fixed JSON response schema.

mod client;
mod error;
mod types;

pub use client::GeminiAnnotator;
pub use error::AnnotatorError;

use bamboo_box_core::OrderAnalysis;

/// Something that can annotate free-text order content.
pub trait Annotate {
    /// Produce a structured estimate for `text`.
    ///
    /// # Errors
    ///
    /// Fails if the collaborator is unreachable or returns something that
    /// does not parse. Callers creating orders must not propagate this;
    /// see [`annotate_or_degraded`].
    fn analyze(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<OrderAnalysis, AnnotatorError>> + Send;
}

/// Annotate `text`, substituting the degraded fallback on any failure.
///
/// This is the only entry point the order-creation path should use.
pub async fn annotate_or_degraded<A: Annotate + Sync>(annotator: &A, text: &str) -> OrderAnalysis {
    match annotator.analyze(text).await {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!(error = %e, "annotation failed, using degraded fallback");
            OrderAnalysis::degraded()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    struct FixedAnnotator(Result<OrderAnalysis, AnnotatorError>);

    impl Annotate for FixedAnnotator {
        async fn analyze(&self, _text: &str) -> Result<OrderAnalysis, AnnotatorError> {
            match &self.0 {
                Ok(a) => Ok(a.clone()),
                Err(_) => Err(AnnotatorError::EmptyResponse),
            }
        }
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let analysis = OrderAnalysis {
            summary: "two beef noodle bowls".to_owned(),
            estimated_price: Decimal::from(56),
            nutrition_tip: "Plenty of protein".to_owned(),
        };
        let annotator = FixedAnnotator(Ok(analysis.clone()));
        assert_eq!(annotate_or_degraded(&annotator, "x").await, analysis);
    }

    #[tokio::test]
    async fn test_failure_becomes_degraded_fallback() {
        let annotator = FixedAnnotator(Err(AnnotatorError::EmptyResponse));
        let result = annotate_or_degraded(&annotator, "x").await;
        assert_eq!(result, OrderAnalysis::degraded());
    }
}

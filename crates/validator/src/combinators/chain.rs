//! Chain combinator — an ordered sequence of validators.

use std::sync::Arc;

use serde_json::Value;

use crate::core::{Validate, ValidationError};

/// One member of a [`Chain`]: the validator plus its stop flag.
#[derive(Clone)]
pub struct ChainLink {
    validator: Arc<dyn Validate>,
    break_on_failure: bool,
}

impl ChainLink {
    /// The member validator.
    #[must_use]
    pub fn validator(&self) -> &dyn Validate {
        self.validator.as_ref()
    }

    /// Whether a failure of this member stops the chain.
    #[must_use]
    pub fn is_break_on_failure(&self) -> bool {
        self.break_on_failure
    }
}

impl std::fmt::Debug for ChainLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainLink")
            .field("validator", &self.validator.name())
            .field("break_on_failure", &self.break_on_failure)
            .finish()
    }
}

/// Runs validators in order, collecting every failure.
///
/// All members are evaluated unless a failing member was added with
/// [`Chain::with_breaking`], in which case the scan stops there. A single
/// failure is returned verbatim; multiple failures are wrapped in a
/// `chain_failed` error carrying them as nested errors, in chain order.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    links: Vec<ChainLink>,
}

impl Chain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validator that does not stop the chain on failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, validator: impl Validate + 'static) -> Self {
        self.links.push(ChainLink {
            validator: Arc::new(validator),
            break_on_failure: false,
        });
        self
    }

    /// Appends a validator whose failure stops the chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_breaking(mut self, validator: impl Validate + 'static) -> Self {
        self.links.push(ChainLink {
            validator: Arc::new(validator),
            break_on_failure: true,
        });
        self
    }

    /// The chain members, in declaration order.
    #[must_use]
    pub fn validators(&self) -> &[ChainLink] {
        &self.links
    }

    /// The number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the chain has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Validate for Chain {
    fn validate(&self, input: &Value, context: Option<&Value>) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        for link in &self.links {
            if let Err(e) = link.validator.validate(input, context) {
                errors.push(e);
                if link.break_on_failure {
                    break;
                }
            }
        }

        let mut errors = errors.into_iter();
        match (errors.next(), errors.next()) {
            (None, _) => Ok(()),
            (Some(only), None) => Err(only),
            (Some(first), Some(second)) => {
                let nested: Vec<ValidationError> =
                    [first, second].into_iter().chain(errors).collect();
                let n = nested.len();
                Err(ValidationError::new(
                    "chain_failed",
                    format!("{n} constraints failed"),
                )
                .with_param("failed_count", n.to_string())
                .with_nested(nested))
            }
        }
    }

    fn name(&self) -> &str {
        "chain"
    }

    fn as_chain(&self) -> Option<&Chain> {
        Some(self)
    }
}

//! Stage trait and acyclic pipeline builder

use std::fmt;

use tracing::debug;

use crate::io::error::{ErrorContext, Result, WithContext, computation_error};
use crate::spatial::RgbaBuffer;

/// Pure image-to-image transform
///
/// Stages own no mutable state, so one pipeline can serve many renders from
/// any thread.
pub trait Stage: Send + Sync {
    /// Short identifier used in logs and errors
    fn name(&self) -> &'static str;

    /// Transform a buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the stage can't produce a valid buffer
    fn apply(&self, input: RgbaBuffer) -> Result<RgbaBuffer>;
}

/// Ordered chain of stages, assembled once and run many times
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}

impl Pipeline {
    /// Create an empty pipeline that returns its input unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage
    #[must_use]
    pub fn then(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Append a stage only when `enabled` is set
    #[must_use]
    pub fn then_if<S, F>(self, enabled: bool, stage: F) -> Self
    where
        S: Stage + 'static,
        F: FnOnce() -> S,
    {
        if enabled { self.then(stage()) } else { self }
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage in order
    ///
    /// # Errors
    ///
    /// Returns an error if a stage fails or leaves a non-finite channel
    /// behind; the error names the offending stage
    pub fn run(&self, input: RgbaBuffer) -> Result<RgbaBuffer> {
        self.stages.iter().try_fold(input, |buffer, stage| {
            debug!(stage = stage.name(), region = ?buffer.region(), "applying stage");
            let output = stage.apply(buffer).with_context(ErrorContext {
                operation: Some(stage.name()),
                ..Default::default()
            })?;

            if output.is_finite() {
                Ok(output)
            } else {
                Err(computation_error(
                    stage.name(),
                    &"stage produced a non-finite channel",
                ))
            }
        })
    }
}

//! Stepper configuration loading
//!
//! Step titles and descriptions are presentation data; deployments can ship
//! their own YAML instead of the built-in English defaults.
//!
//! ```yaml
//! steps:
//!   - id: schedule
//!     title: Schedule
//!     description: Pick your rental dates and delivery option
//!   - id: personal
//!     title: Personal Details
//!     description: Tell us who is renting
//!   - id: payment
//!     title: Payment
//!     description: Add your GCash number
//!   - id: summary
//!     title: Summary
//!     description: Review and accept the rental policies
//! ```

use crate::booking::{BookingStep, BookingStepConfig};
use crate::core::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Title and description for one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub id: BookingStep,
    pub title: String,
    pub description: String,
}

/// Configuration for every step of the booking form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepsConfig {
    pub steps: Vec<StepDefinition>,
}

impl StepsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading steps config from {}", path))?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path, "loaded booking steps config");
        Ok(config)
    }

    /// Load configuration from a YAML string
    ///
    /// Every step must appear exactly once; definitions are reordered into
    /// stepper order.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        config.steps.sort_by_key(|s| s.id);
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        for (i, def) in self.steps.iter().enumerate() {
            if self.steps[..i].iter().any(|d| d.id == def.id) {
                return Err(ConfigError::DuplicateStep {
                    step: def.id.to_string(),
                });
            }
        }
        for step in BookingStep::ALL {
            if !self.steps.iter().any(|d| d.id == step) {
                return Err(ConfigError::MissingStep {
                    step: step.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn definition(&self, step: BookingStep) -> Option<&StepDefinition> {
        self.steps.iter().find(|d| d.id == step)
    }

    /// Build display configs with `active` marked current and earlier steps completed
    pub fn to_step_configs(&self, active: BookingStep) -> Vec<BookingStepConfig> {
        self.steps
            .iter()
            .map(|def| {
                let mut config =
                    BookingStepConfig::new(def.id, def.title.clone(), def.description.clone());
                config.is_active = def.id == active;
                config.is_completed = def.id < active;
                config
            })
            .collect()
    }

    /// Built-in English step texts
    pub fn default_config() -> Self {
        let step = |id, title: &str, description: &str| StepDefinition {
            id,
            title: title.to_string(),
            description: description.to_string(),
        };
        Self {
            steps: vec![
                step(
                    BookingStep::Schedule,
                    "Schedule",
                    "Pick your rental dates and delivery option",
                ),
                step(
                    BookingStep::Personal,
                    "Personal Details",
                    "Tell us who is renting",
                ),
                step(BookingStep::Payment, "Payment", "Add your GCash number"),
                step(
                    BookingStep::Summary,
                    "Summary",
                    "Review and accept the rental policies",
                ),
            ],
        }
    }
}

impl Default for StepsConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

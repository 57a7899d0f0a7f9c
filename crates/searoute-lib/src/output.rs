//! Structured voyage summaries for presentation by higher-level consumers.

use std::fmt::Write;

use serde::Serialize;

use crate::dataset::PortDirectory;
use crate::error::{Error, Result};
use crate::graph::PortId;
use crate::routing::VoyagePlan;

/// Presentation style for turning a [`VoyageSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoyageRenderMode {
    PlainText,
    Basic,
}

/// Endpoint of a planned voyage.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VoyageEndpoint {
    pub id: PortId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl VoyageEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Port of call reached during a voyage.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VoyageStep {
    pub index: usize,
    pub id: PortId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl VoyageStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned voyage for serialization or text
/// rendering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VoyageSummary {
    pub legs: usize,
    pub total_distance_km: f64,
    pub waypoints: usize,
    pub start: VoyageEndpoint,
    pub goal: VoyageEndpoint,
    pub steps: Vec<VoyageStep>,
}

impl VoyageSummary {
    /// Convert a [`VoyagePlan`] into a summary with resolved port names.
    pub fn from_plan(directory: &PortDirectory, plan: &VoyagePlan) -> Result<Self> {
        if plan.ports.is_empty() {
            return Err(Error::EmptyVoyagePlan);
        }

        let steps = plan
            .ports
            .iter()
            .enumerate()
            .map(|(index, port_id)| VoyageStep {
                index,
                id: *port_id,
                name: directory.port_name(*port_id).map(|name| name.to_string()),
            })
            .collect::<Vec<_>>();

        let first = steps.first().map(|step| (step.id, step.name.clone()));
        let last = steps.last().map(|step| (step.id, step.name.clone()));
        let (start_id, start_name) = first.ok_or(Error::EmptyVoyagePlan)?;
        let (goal_id, goal_name) = last.ok_or(Error::EmptyVoyagePlan)?;

        Ok(Self {
            legs: plan.leg_count(),
            total_distance_km: plan.total_distance_km,
            waypoints: plan.geometry.len(),
            start: VoyageEndpoint {
                id: start_id,
                name: start_name,
            },
            goal: VoyageEndpoint {
                id: goal_id,
                name: goal_name,
            },
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: VoyageRenderMode) -> String {
        match mode {
            VoyageRenderMode::PlainText => self.render_plain(),
            VoyageRenderMode::Basic => self.render_basic(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Voyage: {} -> {} ({} legs, {:.1} km)",
            self.start.display_name(),
            self.goal.display_name(),
            self.legs,
            self.total_distance_km
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "{:>3}: {} ({})", step.index, step.display_name(), step.id);
        }
        let _ = writeln!(buffer, "Waypoints charted: {}", self.waypoints);
        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} -> {} ({} legs, {:.1} km)",
            self.start.display_name(),
            self.goal.display_name(),
            self.legs,
            self.total_distance_km
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "{}", step.display_name());
        }
        buffer
    }
}

//! Activation engine
//!
//! Owns the registry, the activation state and the set of attached overlays, and
//! drives a [`MapSurface`] in response to UI events:
//!
//! - `activate_location` - attach a location's layers back-to-front, assign their
//!   z-priority, fit the viewport to every active location
//! - `deactivate_location` - detach a location's layers, refit to what remains
//! - `focus_location` - fit to one location's attached layers only
//! - `toggle_layer` - attach/detach one layer, no state change, no refit
//!
//! Operations run to completion and never fail: unknown keys are no-ops, absent
//! overlays are skipped, and an empty bounds union skips the fit.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::application::activation_state::ActivationState;
use crate::application::registry::{LayerRegistry, LoadOutcome};
use crate::domain::policies::{z_priority, ActivationPolicy};
use crate::domain::ports::MapSurface;
use crate::domain::services::overlay_bounds_union;
use crate::domain::value_objects::{FitPadding, GeoBounds, LayerCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    pub policy: ActivationPolicy,
    pub padding: FitPadding,
}

/// Observable effects of one engine operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outcome {
    pub attached: Vec<String>,
    pub detached: Vec<String>,
    pub fitted: Option<GeoBounds>,
}

impl Outcome {
    pub fn is_noop(&self) -> bool {
        self.attached.is_empty() && self.detached.is_empty() && self.fitted.is_none()
    }
}

pub struct ActivationEngine<M: MapSurface> {
    registry: LayerRegistry,
    state: ActivationState,
    attached: BTreeSet<String>,
    map: M,
    options: EngineOptions,
}

impl<M: MapSurface> ActivationEngine<M> {
    pub fn new(registry: LayerRegistry, map: M, options: EngineOptions) -> Self {
        Self {
            registry,
            state: ActivationState::new(),
            attached: BTreeSet::new(),
            map,
            options,
        }
    }

    pub fn activate_location(&mut self, location_key: &str) -> Outcome {
        if !self.registry.has_location(location_key) {
            tracing::debug!(location = location_key, "activate: unknown location");
            return Outcome::default();
        }

        self.state.activate(location_key);
        let mut outcome = Outcome::default();

        for category in LayerCategory::PAINT_ORDER {
            if !self.options.policy.auto_attaches(category) {
                continue;
            }
            let candidates: Vec<_> = self
                .registry
                .entries()
                .iter()
                .filter(|e| {
                    e.descriptor.belongs_to(location_key)
                        && e.descriptor.category == category
                        && e.is_loaded()
                        && !self.attached.contains(&e.descriptor.name)
                })
                .map(|e| {
                    let priority = z_priority(e.descriptor.category, e.descriptor.geometry);
                    (e.descriptor.name.clone(), priority)
                })
                .collect();

            for (name, priority) in candidates {
                let Some(overlay) = self.registry.get_mut(&name) else {
                    continue;
                };
                self.map.attach(overlay);
                overlay.set_z_priority(priority);
                self.map.set_z_priority(&name, priority);
                tracing::debug!(layer = %name, %priority, "attached");
                self.attached.insert(name.clone());
                outcome.attached.push(name);
            }
        }

        outcome.fitted = self.fit_active();
        outcome
    }

    pub fn deactivate_location(&mut self, location_key: &str) -> Outcome {
        if !self.registry.has_location(location_key) {
            tracing::debug!(location = location_key, "deactivate: unknown location");
            return Outcome::default();
        }

        self.state.deactivate(location_key);
        let mut outcome = Outcome::default();

        let leaving: Vec<String> = self
            .attached
            .iter()
            .filter(|name| self.location_of(name) == Some(location_key))
            .cloned()
            .collect();
        for name in leaving {
            self.map.detach(&name);
            self.attached.remove(&name);
            tracing::debug!(layer = %name, "detached");
            outcome.detached.push(name);
        }

        if !self.state.is_empty() {
            outcome.fitted = self.fit_active();
        }
        outcome
    }

    pub fn focus_location(&mut self, location_key: &str) -> Outcome {
        let bounds = overlay_bounds_union(
            self.attached
                .iter()
                .filter(|name| self.location_of(name) == Some(location_key))
                .filter_map(|name| self.registry.get(name)),
        );
        Outcome {
            fitted: bounds.map(|b| self.fit(b)),
            ..Outcome::default()
        }
    }

    pub fn toggle_layer(&mut self, layer: &str, visible: bool) -> Outcome {
        let Some(overlay) = self.registry.get(layer) else {
            tracing::debug!(layer, "toggle: layer unknown or not loaded");
            return Outcome::default();
        };

        let mut outcome = Outcome::default();
        let is_attached = self.attached.contains(layer);
        if visible && !is_attached {
            self.map.attach(overlay);
            self.attached.insert(layer.to_string());
            outcome.attached.push(layer.to_string());
        } else if !visible && is_attached {
            self.map.detach(layer);
            self.attached.remove(layer);
            outcome.detached.push(layer.to_string());
        }
        outcome
    }

    /// Fold a finished load into the registry. Never attaches by itself; the
    /// location has to be activated again to pick the layer up.
    pub fn absorb(&mut self, outcome: LoadOutcome) -> bool {
        self.registry.apply(outcome)
    }

    pub fn is_attached(&self, layer: &str) -> bool {
        self.attached.contains(layer)
    }

    pub fn attached(&self) -> impl Iterator<Item = &str> {
        self.attached.iter().map(String::as_str)
    }

    pub fn active_locations(&self) -> &ActivationState {
        &self.state
    }

    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    fn location_of(&self, layer: &str) -> Option<&str> {
        self.registry
            .entry(layer)
            .map(|e| e.descriptor.location_key.as_str())
    }

    fn fit_active(&mut self) -> Option<GeoBounds> {
        let bounds = overlay_bounds_union(
            self.attached
                .iter()
                .filter(|name| {
                    self.location_of(name)
                        .is_some_and(|location| self.state.is_active(location))
                })
                .filter_map(|name| self.registry.get(name)),
        )?;
        Some(self.fit(bounds))
    }

    fn fit(&mut self, bounds: GeoBounds) -> GeoBounds {
        tracing::debug!(%bounds, "fitting viewport");
        self.map.fit_bounds(bounds, self.options.padding);
        bounds
    }
}

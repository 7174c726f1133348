// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: named easing curves

use crate::error::{Error, Result};
use crate::timeline::CubicBezier;
use crate::types::Point;
use std::collections::HashMap;

/// Lookup table from easing names to curves.
///
/// Owned by whoever loads documents; nothing is registered implicitly.
#[derive(Debug, Clone, Default)]
pub struct EasingRegistry {
    curves: HashMap<String, CubicBezier>,
}

impl EasingRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `linear` and the CSS `ease` family.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("linear", CubicBezier::linear());
        registry.register(
            "ease",
            CubicBezier::new(Point::new(0.25, 0.1), Point::new(0.25, 1.0)),
        );
        registry.register(
            "ease_in",
            CubicBezier::new(Point::new(0.42, 0.0), Point::new(1.0, 1.0)),
        );
        registry.register(
            "ease_out",
            CubicBezier::new(Point::new(0.0, 0.0), Point::new(0.58, 1.0)),
        );
        registry.register(
            "ease_in_out",
            CubicBezier::new(Point::new(0.42, 0.0), Point::new(0.58, 1.0)),
        );
        registry
    }

    /// Add or replace a named curve, returning the previous one.
    pub fn register(&mut self, name: impl Into<String>, curve: CubicBezier) -> Option<CubicBezier> {
        self.curves.insert(name.into(), curve)
    }

    /// Look up a curve by name.
    pub fn get(&self, name: &str) -> Option<&CubicBezier> {
        self.curves.get(name)
    }

    /// Look up a curve by name, failing on unknown names.
    pub fn resolve(&self, name: &str) -> Result<CubicBezier> {
        self.get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownEasing(name.to_string()))
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.curves.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_knows_nothing() {
        let registry = EasingRegistry::new();
        assert!(registry.get("linear").is_none());
        assert!(matches!(
            registry.resolve("linear"),
            Err(Error::UnknownEasing(name)) if name == "linear"
        ));
    }

    #[test]
    fn defaults() {
        let registry = EasingRegistry::with_defaults();
        let mut names: Vec<_> = registry.names().collect();
        names.sort_unstable();
        assert_eq!(names, ["ease", "ease_in", "ease_in_out", "ease_out", "linear"]);
        let curve = registry.resolve("ease_in_out").unwrap();
        assert!((curve.value(0.25) - 0.129162).abs() < 0.0001);
        assert_eq!(registry.resolve("linear").unwrap().value(0.3), 0.3);
    }

    #[test]
    fn register_replaces() {
        let mut registry = EasingRegistry::with_defaults();
        let old = registry.register(
            "linear",
            CubicBezier::new(Point::new(0.5, 0.0), Point::new(0.5, 1.0)),
        );
        assert!(old.is_some());
        assert_ne!(registry.resolve("linear").unwrap().value(0.25), 0.25);
    }
}

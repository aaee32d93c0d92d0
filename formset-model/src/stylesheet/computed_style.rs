//! Flattened view of the rules that apply to one widget.

use super::{StyleRule, Stylesheet};

/// Computed styles for a widget, with all applicable rules flattened
///
/// Later classes override earlier classes for the same kind of rule
#[derive(Debug, Clone, Default)]
pub struct ComputedStyle {
    rules: Vec<StyleRule>,
}

impl ComputedStyle {
    pub fn compute(stylesheet: &Stylesheet, classes: &[String]) -> Self {
        let mut rules = Vec::new();

        for class_name in classes {
            if let Some(class) = stylesheet.get(class_name) {
                for rule in &class.rules {
                    rules.retain(|r| std::mem::discriminant(r) != std::mem::discriminant(rule));
                    rules.push(rule.clone());
                }
            }
        }

        ComputedStyle { rules }
    }

    /// Pull a value out of the first rule `extractor` accepts
    pub fn extract<T>(&self, extractor: impl Fn(&StyleRule) -> Option<T>) -> Option<T> {
        self.rules.iter().rev().find_map(extractor)
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }
}

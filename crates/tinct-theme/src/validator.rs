//! Append-only override log with insertion-time rule checks.
//!
//! Every update passes four rules, checked in order; the first violation
//! rejects the update and leaves the log unchanged:
//!
//! 1. the `system` variant is resolved at runtime and never a target;
//! 2. high-contrast variants are always derived;
//! 3. `hidden` and `read-only` states are not independently stylable;
//! 4. the focus outline geometry (offset, style, width) is fixed for the
//!    `focused` state.
//!
//! Rules only accept or reject. Accepted updates are never rewritten.

use std::ops::Index;

use thiserror::Error;

use crate::selector::{SelectorAxis, ThemeSelector};
use crate::tags::{ComponentKind, InteractionState, StyleProperty, ThemeVariant};
use crate::update::ThemeUpdate;
use crate::value::StyleValue;

/// Which override rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationRule {
    SystemVariant,
    HighContrastVariant,
    UnstylableState,
    FocusOutlineLocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the `system` theme variant is resolved at runtime and cannot be overridden")]
    SystemVariant,

    #[error("high-contrast variant `{variant}` is derived and cannot be overridden")]
    HighContrastVariant { variant: ThemeVariant },

    #[error("interaction state `{state}` is not independently stylable")]
    UnstylableState { state: InteractionState },

    #[error("`{property}` is locked for the focused state")]
    FocusOutlineLocked { property: StyleProperty },
}

impl ValidationError {
    pub const fn rule(&self) -> ValidationRule {
        match self {
            Self::SystemVariant => ValidationRule::SystemVariant,
            Self::HighContrastVariant { .. } => ValidationRule::HighContrastVariant,
            Self::UnstylableState { .. } => ValidationRule::UnstylableState,
            Self::FocusOutlineLocked { .. } => ValidationRule::FocusOutlineLocked,
        }
    }

    /// The selector axis holding the offending tag.
    pub const fn axis(&self) -> SelectorAxis {
        match self {
            Self::SystemVariant | Self::HighContrastVariant { .. } => SelectorAxis::Variant,
            Self::UnstylableState { .. } => SelectorAxis::State,
            Self::FocusOutlineLocked { .. } => SelectorAxis::Property,
        }
    }
}

fn check_selector(selector: &ThemeSelector) -> Result<(), ValidationError> {
    if selector.variants().contains(&ThemeVariant::System) {
        return Err(ValidationError::SystemVariant);
    }
    if let Some(&variant) = selector.variants().iter().find(|v| v.is_high_contrast()) {
        return Err(ValidationError::HighContrastVariant { variant });
    }
    if let Some(&state) = selector.states().iter().find(|s| !s.is_stylable()) {
        return Err(ValidationError::UnstylableState { state });
    }
    if selector.states().contains(&InteractionState::Focused)
        && let Some(&property) = selector
            .properties()
            .iter()
            .find(|p| p.is_focus_outline_geometry())
    {
        return Err(ValidationError::FocusOutlineLocked { property });
    }
    Ok(())
}

/// Ordered, append-only log of validated theme updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideValidator {
    updates: Vec<ThemeUpdate>,
}

impl OverrideValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the override rules without touching the log.
    pub fn check(&self, update: &ThemeUpdate) -> Result<(), ValidationError> {
        check_selector(&update.selector)
    }

    /// Validate `update` and append it.
    ///
    /// Returns `self` for chaining. On error the log is unchanged.
    pub fn accept(&mut self, update: ThemeUpdate) -> Result<&mut Self, ValidationError> {
        if let Err(error) = self.check(&update) {
            tracing::debug!(
                message = "override.rejected",
                rule = ?error.rule(),
                axis = %error.axis(),
                selector = %update.selector,
            );
            return Err(error);
        }
        tracing::debug!(
            message = "override.accepted",
            index = self.updates.len(),
            selector = %update.selector,
        );
        self.updates.push(update);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ThemeUpdate> {
        self.updates.get(index)
    }

    pub fn last(&self) -> Option<&ThemeUpdate> {
        self.updates.last()
    }

    /// Updates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ThemeUpdate> {
        self.updates.iter()
    }

    pub fn into_updates(self) -> Vec<ThemeUpdate> {
        self.updates
    }

    /// Value of the latest update covering the given point, if any.
    pub fn resolve(
        &self,
        component: ComponentKind,
        variant: ThemeVariant,
        state: InteractionState,
        property: StyleProperty,
    ) -> Option<&StyleValue> {
        self.updates
            .iter()
            .rev()
            .find(|update| update.selector.covers(component, variant, state, property))
            .map(|update| &update.value)
    }
}

impl Index<usize> for OverrideValidator {
    type Output = ThemeUpdate;

    fn index(&self, index: usize) -> &ThemeUpdate {
        &self.updates[index]
    }
}

impl<'a> IntoIterator for &'a OverrideValidator {
    type Item = &'a ThemeUpdate;
    type IntoIter = std::slice::Iter<'a, ThemeUpdate>;

    fn into_iter(self) -> Self::IntoIter {
        self.updates.iter()
    }
}

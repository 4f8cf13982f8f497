//! Four-axis theme selectors.
//!
//! A [`ThemeSelector`] names a set of (component, variant, state, property)
//! combinations. Each axis is a set; an empty axis means "not yet
//! specified" rather than "match nothing". A selector whose four axes are
//! all singletons is concrete and names exactly one combination.
//!
//! Setters consume the selector and return a new one:
//!
//! ```
//! use tinct_theme::{ComponentKind, StyleProperty, ThemeSelector};
//!
//! let selector = ThemeSelector::new()
//!     .with_component(ComponentKind::Button)
//!     .with_high_contrast(false)
//!     .with_interactive_states()
//!     .with_property(StyleProperty::BackgroundColor);
//! assert_eq!(selector.states().len(), 7);
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tags::{ComponentKind, InteractionState, StyleProperty, ThemeVariant};

/// One of the four selector axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorAxis {
    Component,
    Variant,
    State,
    Property,
}

impl fmt::Display for SelectorAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Component => "component",
            Self::Variant => "theme variant",
            Self::State => "interaction state",
            Self::Property => "style property",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeSelector {
    components: BTreeSet<ComponentKind>,
    variants: BTreeSet<ThemeVariant>,
    states: BTreeSet<InteractionState>,
    properties: BTreeSet<StyleProperty>,
}

impl ThemeSelector {
    /// A selector with every axis unspecified.
    pub fn new() -> Self {
        Self::default()
    }

    /// A selector naming exactly one combination.
    pub fn concrete(
        component: ComponentKind,
        variant: ThemeVariant,
        state: InteractionState,
        property: StyleProperty,
    ) -> Self {
        Self::new()
            .with_component(component)
            .with_variant(variant)
            .with_state(state)
            .with_property(property)
    }

    pub fn components(&self) -> &BTreeSet<ComponentKind> {
        &self.components
    }

    pub fn variants(&self) -> &BTreeSet<ThemeVariant> {
        &self.variants
    }

    pub fn states(&self) -> &BTreeSet<InteractionState> {
        &self.states
    }

    pub fn properties(&self) -> &BTreeSet<StyleProperty> {
        &self.properties
    }

    #[must_use]
    pub fn with_component(self, component: ComponentKind) -> Self {
        self.with_components([component])
    }

    #[must_use]
    pub fn with_components(mut self, components: impl IntoIterator<Item = ComponentKind>) -> Self {
        self.components = components.into_iter().collect();
        self
    }

    /// Select every component kind.
    #[must_use]
    pub fn with_all_components(self) -> Self {
        self.with_components(ComponentKind::ALL.iter().copied())
    }

    #[must_use]
    pub fn with_variant(self, variant: ThemeVariant) -> Self {
        self.with_variants([variant])
    }

    #[must_use]
    pub fn with_variants(mut self, variants: impl IntoIterator<Item = ThemeVariant>) -> Self {
        self.variants = variants.into_iter().collect();
        self
    }

    /// Select {Light, Dark}, or {HighContrastLight, HighContrastDark} when
    /// `high_contrast` is set. No other pairing is reachable here.
    #[must_use]
    pub fn with_high_contrast(self, high_contrast: bool) -> Self {
        self.with_variants(ThemeVariant::pair(high_contrast))
    }

    #[must_use]
    pub fn with_state(self, state: InteractionState) -> Self {
        self.with_states([state])
    }

    #[must_use]
    pub fn with_states(mut self, states: impl IntoIterator<Item = InteractionState>) -> Self {
        self.states = states.into_iter().collect();
        self
    }

    /// Select every state except Hidden and ReadOnly.
    #[must_use]
    pub fn with_interactive_states(self) -> Self {
        self.with_states(InteractionState::INTERACTIVE)
    }

    #[must_use]
    pub fn with_property(self, property: StyleProperty) -> Self {
        self.with_properties([property])
    }

    #[must_use]
    pub fn with_properties(mut self, properties: impl IntoIterator<Item = StyleProperty>) -> Self {
        self.properties = properties.into_iter().collect();
        self
    }

    /// Select every style property.
    #[must_use]
    pub fn with_all_properties(self) -> Self {
        self.with_properties(StyleProperty::ALL.iter().copied())
    }

    /// Whether every axis is a singleton.
    pub fn is_concrete(&self) -> bool {
        self.components.len() == 1
            && self.variants.len() == 1
            && self.states.len() == 1
            && self.properties.len() == 1
    }

    /// Whether `axis` has been left unspecified.
    pub fn is_unspecified(&self, axis: SelectorAxis) -> bool {
        match axis {
            SelectorAxis::Component => self.components.is_empty(),
            SelectorAxis::Variant => self.variants.is_empty(),
            SelectorAxis::State => self.states.is_empty(),
            SelectorAxis::Property => self.properties.is_empty(),
        }
    }

    /// Whether the selector covers the given combination.
    ///
    /// An unspecified axis does not constrain the match.
    pub fn covers(
        &self,
        component: ComponentKind,
        variant: ThemeVariant,
        state: InteractionState,
        property: StyleProperty,
    ) -> bool {
        fn axis<T: Ord>(set: &BTreeSet<T>, value: &T) -> bool {
            set.is_empty() || set.contains(value)
        }
        axis(&self.components, &component)
            && axis(&self.variants, &variant)
            && axis(&self.states, &state)
            && axis(&self.properties, &property)
    }
}

impl fmt::Display for ThemeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn axis<T: fmt::Display>(
            f: &mut fmt::Formatter<'_>,
            label: &str,
            set: &BTreeSet<T>,
        ) -> fmt::Result {
            write!(f, "{label}=[")?;
            for (i, tag) in set.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{tag}")?;
            }
            f.write_str("]")
        }
        axis(f, "components", &self.components)?;
        f.write_str(" ")?;
        axis(f, "variants", &self.variants)?;
        f.write_str(" ")?;
        axis(f, "states", &self.states)?;
        f.write_str(" ")?;
        axis(f, "properties", &self.properties)
    }
}

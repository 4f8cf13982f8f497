//! Expansion of one customization intent into concrete theme updates.
//!
//! An [`Intent`] names a component and a style concern. Expansion crosses
//! the theme-variant pair picked by the high-contrast flag with every
//! stylable interaction state, and emits one concrete [`ThemeUpdate`] per
//! combination (and per color channel for a whole-palette concern):
//!
//! - `2 variants x 7 states = 14` updates per property;
//! - `7 channels x 14 = 98` updates for [`Concern::Palette`].
//!
//! Color concerns look up the base palette for (variant, role), apply the
//! optional elevation, then derive the per-state palette. Value concerns
//! attach the supplied value unchanged to every combination.

use tinct_color::ColorValue;

use crate::config::DeriveConfig;
use crate::defaults::{DefaultPalettes, PaletteSource};
use crate::error::{Result, ThemeError};
use crate::palette::{ColorChannel, Elevation, PaletteDeriver, PaletteVariant};
use crate::selector::ThemeSelector;
use crate::tags::{ComponentKind, InteractionState, PaletteRole, StyleProperty, ThemeVariant};
use crate::update::ThemeUpdate;
use crate::validator::OverrideValidator;
use crate::value::StyleValue;

/// What an intent customizes.
#[derive(Debug, Clone, PartialEq)]
pub enum Concern {
    /// Every palette color channel.
    Palette,
    /// One palette color channel.
    Color(ColorChannel),
    /// A fixed value for one property, identical across states.
    Value {
        property: StyleProperty,
        value: StyleValue,
    },
}

impl Concern {
    pub fn value(property: StyleProperty, value: impl Into<StyleValue>) -> Self {
        Self::Value {
            property,
            value: value.into(),
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Palette => "palette",
            Self::Color(channel) => channel.property().name(),
            Self::Value { property, .. } => property.name(),
        }
    }
}

/// One customization request.
#[derive(Debug, Clone, PartialEq)]
pub struct Intent {
    pub component: ComponentKind,
    pub concern: Concern,
    pub role: PaletteRole,
    pub high_contrast: bool,
    pub elevation: Option<Elevation>,
}

impl Intent {
    /// An intent for the neutral role, regular variants, no elevation.
    pub fn new(component: ComponentKind, concern: Concern) -> Self {
        Self {
            component,
            concern,
            role: PaletteRole::default(),
            high_contrast: false,
            elevation: None,
        }
    }

    #[must_use]
    pub fn role(mut self, role: PaletteRole) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn high_contrast(mut self, high_contrast: bool) -> Self {
        self.high_contrast = high_contrast;
        self
    }

    #[must_use]
    pub fn elevation(mut self, elevation: Elevation) -> Self {
        self.elevation = Some(elevation);
        self
    }
}

/// Turns intents into updates using a palette source and a deriver.
#[derive(Debug, Clone, Default)]
pub struct IntentExpander<S = DefaultPalettes> {
    source: S,
    deriver: PaletteDeriver,
}

impl<S: PaletteSource> IntentExpander<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            deriver: PaletteDeriver::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: DeriveConfig) -> Self {
        self.deriver = PaletteDeriver::new(config);
        self
    }

    pub fn deriver(&self) -> &PaletteDeriver {
        &self.deriver
    }

    /// Every concrete update the intent implies, without validating them.
    pub fn expand(&self, intent: &Intent) -> Result<Vec<ThemeUpdate>> {
        let variants = ThemeVariant::pair(intent.high_contrast);
        let states = InteractionState::INTERACTIVE;

        let channels: &[ColorChannel] = match &intent.concern {
            Concern::Palette => &ColorChannel::ALL,
            Concern::Color(channel) => std::slice::from_ref(channel),
            Concern::Value { property, value } => {
                let updates = variants
                    .iter()
                    .flat_map(|&variant| states.iter().map(move |&state| (variant, state)))
                    .map(|(variant, state)| {
                        ThemeUpdate::new(
                            ThemeSelector::concrete(intent.component, variant, state, *property),
                            value.clone(),
                        )
                    })
                    .collect();
                return Ok(self.finish(intent, updates));
            }
        };

        // Per-variant state palettes, computed once and shared by every channel.
        let mut derived: Vec<(ThemeVariant, [PaletteVariant; 7])> = Vec::with_capacity(2);
        for variant in variants {
            let base = self.base_palette(variant, intent)?;
            derived.push((variant, states.map(|state| self.deriver.derive(&base, state))));
        }

        let mut updates = Vec::with_capacity(channels.len() * variants.len() * states.len());
        for &channel in channels {
            for (variant, palettes) in &derived {
                for (state, palette) in states.iter().zip(palettes) {
                    let color: ColorValue = palette.channel(channel);
                    updates.push(ThemeUpdate::new(
                        ThemeSelector::concrete(
                            intent.component,
                            *variant,
                            *state,
                            channel.property(),
                        ),
                        color,
                    ));
                }
            }
        }
        Ok(self.finish(intent, updates))
    }

    /// Expand the intent and append every update to `log`.
    ///
    /// All updates are checked before any is appended, so a rejected
    /// intent leaves the log untouched. Returns the number appended.
    pub fn apply(&self, intent: &Intent, log: &mut OverrideValidator) -> Result<usize> {
        let updates = self.expand(intent)?;
        for update in &updates {
            log.check(update)?;
        }
        let count = updates.len();
        for update in updates {
            log.accept(update)?;
        }
        Ok(count)
    }

    fn base_palette(&self, variant: ThemeVariant, intent: &Intent) -> Result<PaletteVariant> {
        let base = self
            .source
            .palette(variant, intent.role)
            .ok_or(ThemeError::MissingPalette {
                variant,
                role: intent.role,
            })?;
        Ok(match intent.elevation {
            Some(elevation) => self.deriver.elevate(&base, elevation),
            None => base,
        })
    }

    fn finish(&self, intent: &Intent, updates: Vec<ThemeUpdate>) -> Vec<ThemeUpdate> {
        tracing::debug!(
            message = "intent.expanded",
            component = %intent.component,
            concern = intent.concern.label(),
            role = %intent.role,
            high_contrast = intent.high_contrast,
            updates = updates.len(),
        );
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Length;
    use std::collections::BTreeSet;
    use tracing_test::traced_test;

    struct LightOnly;

    impl PaletteSource for LightOnly {
        fn palette(&self, variant: ThemeVariant, role: PaletteRole) -> Option<PaletteVariant> {
            (variant == ThemeVariant::Light)
                .then(|| DefaultPalettes.palette(variant, role))
                .flatten()
        }
    }

    #[test]
    fn single_channel_yields_fourteen_updates() {
        let intent = Intent::new(ComponentKind::Button, Concern::Color(ColorChannel::Border))
            .role(PaletteRole::Secondary);
        let updates = IntentExpander::new(DefaultPalettes).expand(&intent).unwrap();
        assert_eq!(updates.len(), 14);
        assert!(updates.iter().all(|u| u.selector.is_concrete()));
        assert!(
            updates
                .iter()
                .all(|u| u.selector.properties().contains(&StyleProperty::BorderColor))
        );
    }

    #[test]
    fn palette_concern_covers_every_channel() {
        let intent = Intent::new(ComponentKind::Card, Concern::Palette);
        let updates = IntentExpander::new(DefaultPalettes).expand(&intent).unwrap();
        assert_eq!(updates.len(), 98);
        let properties: BTreeSet<StyleProperty> = updates
            .iter()
            .flat_map(|u| u.selector.properties().iter().copied())
            .collect();
        assert_eq!(properties.len(), 7);
    }

    #[test]
    fn default_state_uses_base_palette() {
        let expander = IntentExpander::new(DefaultPalettes);
        let intent = Intent::new(ComponentKind::Surface, Concern::Color(ColorChannel::Background))
            .role(PaletteRole::Primary);
        let updates = expander.expand(&intent).unwrap();
        let base = DefaultPalettes
            .palette(ThemeVariant::Light, PaletteRole::Primary)
            .unwrap();
        let default_light = updates
            .iter()
            .find(|u| {
                u.selector.covers(
                    ComponentKind::Surface,
                    ThemeVariant::Light,
                    InteractionState::Default,
                    StyleProperty::BackgroundColor,
                )
            })
            .unwrap();
        assert_eq!(default_light.value.as_color(), Some(base.background()));

        let hovered = expander
            .deriver()
            .derive(&base, InteractionState::Hovered)
            .background();
        assert!(updates.iter().any(|u| u.value.as_color() == Some(hovered)));
    }

    #[test]
    fn value_concern_is_constant_across_states() {
        let intent = Intent::new(
            ComponentKind::TextBox,
            Concern::value(StyleProperty::FontFamily, StyleValue::keyword("Inter")),
        );
        let updates = IntentExpander::new(DefaultPalettes).expand(&intent).unwrap();
        assert_eq!(updates.len(), 14);
        assert!(updates.iter().all(|u| u.value == StyleValue::keyword("Inter")));
    }

    #[test]
    fn elevation_changes_base_background() {
        let expander = IntentExpander::new(DefaultPalettes);
        let flat = Intent::new(ComponentKind::Card, Concern::Color(ColorChannel::Background));
        let raised = flat.clone().elevation(Elevation::Highest);
        let flat = expander.expand(&flat).unwrap();
        let raised = expander.expand(&raised).unwrap();
        // Dark neutral default state sits at index 7.
        let dark_flat = flat[7].value.as_color().unwrap();
        let dark_raised = raised[7].value.as_color().unwrap();
        assert!(dark_raised.value() < dark_flat.value());
    }

    #[test]
    fn missing_palette_is_reported() {
        let expander = IntentExpander::new(LightOnly);
        let intent = Intent::new(ComponentKind::Menu, Concern::Palette);
        let error = expander.expand(&intent).unwrap_err();
        assert!(matches!(
            error,
            ThemeError::MissingPalette {
                variant: ThemeVariant::Dark,
                role: PaletteRole::Neutral
            }
        ));
    }

    #[test]
    fn apply_appends_all_or_nothing() {
        let expander = IntentExpander::new(DefaultPalettes);
        let mut log = OverrideValidator::new();

        let count = expander
            .apply(
                &Intent::new(ComponentKind::Link, Concern::value(StyleProperty::Margin, Length::px(2.0))),
                &mut log,
            )
            .unwrap();
        assert_eq!(count, 14);
        assert_eq!(log.len(), 14);

        let locked = Intent::new(
            ComponentKind::Link,
            Concern::value(StyleProperty::OutlineOffset, Length::px(1.0)),
        );
        let error = expander.apply(&locked, &mut log).unwrap_err();
        assert!(matches!(error, ThemeError::Validation(_)));
        assert_eq!(log.len(), 14);
    }

    #[traced_test]
    #[test]
    fn logs_expansion_summary() {
        let intent = Intent::new(ComponentKind::Tab, Concern::Color(ColorChannel::Caret));
        IntentExpander::new(DefaultPalettes).expand(&intent).unwrap();
        assert!(logs_contain("intent.expanded"));
        assert!(logs_contain("caret-color"));
    }
}

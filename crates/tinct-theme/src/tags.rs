//! Closed-set tags for the four selector axes and palette roles.
//!
//! Each tag type carries a constant table mapping variant to canonical
//! name. Parsing is a case-insensitive reverse lookup over that table, and
//! serde goes through the same names.

use std::fmt;
use std::str::FromStr;

use tinct_color::FormatError;

macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Canonical name.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = FormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|tag| tag.name().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| FormatError::new("keyword", s))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

tag_enum! {
    /// Kind of UI component an override targets.
    pub enum ComponentKind {
        Surface => "surface",
        Button => "button",
        TextBox => "text-box",
        Checkbox => "checkbox",
        Radio => "radio",
        Switch => "switch",
        Slider => "slider",
        Select => "select",
        Link => "link",
        Tab => "tab",
        Card => "card",
        Dialog => "dialog",
        Menu => "menu",
        Tooltip => "tooltip",
    }
}

tag_enum! {
    /// Theme variant.
    pub enum ThemeVariant {
        /// Resolved to one of the concrete variants at runtime.
        System => "system",
        Light => "light",
        Dark => "dark",
        HighContrastLight => "high-contrast-light",
        HighContrastDark => "high-contrast-dark",
    }
}

tag_enum! {
    /// Interaction state of a component.
    pub enum InteractionState {
        Default => "default",
        Hovered => "hovered",
        Focused => "focused",
        Pressed => "pressed",
        Dragged => "dragged",
        Disabled => "disabled",
        Visited => "visited",
        /// Suppressed by the consumer; never styled directly.
        Hidden => "hidden",
        /// Inherited by the consumer; never styled directly.
        ReadOnly => "read-only",
    }
}

tag_enum! {
    /// Style property, named by its CSS property name.
    pub enum StyleProperty {
        BackgroundColor => "background-color",
        AccentColor => "accent-color",
        BorderColor => "border-color",
        CaretColor => "caret-color",
        ForegroundColor => "color",
        TextDecorationColor => "text-decoration-color",
        OutlineColor => "outline-color",
        FontFamily => "font-family",
        FontSize => "font-size",
        FontWeight => "font-weight",
        TextDecorationLine => "text-decoration-line",
        TextDecorationStyle => "text-decoration-style",
        TextDecorationThickness => "text-decoration-thickness",
        Margin => "margin",
        Padding => "padding",
        BorderRadius => "border-radius",
        BorderWidth => "border-width",
        OutlineOffset => "outline-offset",
        OutlineStyle => "outline-style",
        OutlineWidth => "outline-width",
    }
}

tag_enum! {
    /// Semantic palette role a color concern draws from.
    pub enum PaletteRole {
        Primary => "primary",
        Secondary => "secondary",
        Tertiary => "tertiary",
        Neutral => "neutral",
        Error => "error",
        Warning => "warning",
        Success => "success",
        Info => "info",
    }
}

impl ThemeVariant {
    pub const fn is_high_contrast(self) -> bool {
        matches!(self, Self::HighContrastLight | Self::HighContrastDark)
    }

    /// The variant pair an intent expands over.
    pub const fn pair(high_contrast: bool) -> [Self; 2] {
        if high_contrast {
            [Self::HighContrastLight, Self::HighContrastDark]
        } else {
            [Self::Light, Self::Dark]
        }
    }
}

impl InteractionState {
    /// Every state except [`Hidden`](Self::Hidden) and [`ReadOnly`](Self::ReadOnly).
    pub const INTERACTIVE: [Self; 7] = [
        Self::Default,
        Self::Hovered,
        Self::Focused,
        Self::Pressed,
        Self::Dragged,
        Self::Disabled,
        Self::Visited,
    ];

    /// Whether overrides may target this state.
    pub const fn is_stylable(self) -> bool {
        !matches!(self, Self::Hidden | Self::ReadOnly)
    }
}

impl StyleProperty {
    pub const fn is_color(self) -> bool {
        matches!(
            self,
            Self::BackgroundColor
                | Self::AccentColor
                | Self::BorderColor
                | Self::CaretColor
                | Self::ForegroundColor
                | Self::TextDecorationColor
                | Self::OutlineColor
        )
    }

    /// Focus-indicator geometry, locked for the focused state.
    pub const fn is_focus_outline_geometry(self) -> bool {
        matches!(
            self,
            Self::OutlineOffset | Self::OutlineStyle | Self::OutlineWidth
        )
    }
}

impl Default for PaletteRole {
    fn default() -> Self {
        Self::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for &state in InteractionState::ALL {
            assert_eq!(state.name().parse::<InteractionState>().unwrap(), state);
        }
        for &property in StyleProperty::ALL {
            assert_eq!(property.to_string().parse::<StyleProperty>().unwrap(), property);
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(
            " High-Contrast-Dark ".parse::<ThemeVariant>().unwrap(),
            ThemeVariant::HighContrastDark
        );
        assert_eq!("READ-ONLY".parse::<InteractionState>().unwrap(), InteractionState::ReadOnly);
    }

    #[test]
    fn unknown_keyword_is_format_error() {
        let error = "sepia".parse::<ThemeVariant>().unwrap_err();
        assert_eq!(error.expected, "keyword");
        assert_eq!(error.input, "sepia");
    }

    #[test]
    fn interactive_states_exclude_hidden_and_read_only() {
        assert_eq!(InteractionState::INTERACTIVE.len(), 7);
        assert!(InteractionState::INTERACTIVE.iter().all(|s| s.is_stylable()));
        let excluded: Vec<_> = InteractionState::ALL
            .iter()
            .filter(|s| !s.is_stylable())
            .collect();
        assert_eq!(excluded, [&InteractionState::Hidden, &InteractionState::ReadOnly]);
    }

    #[test]
    fn variant_pair_follows_high_contrast_flag() {
        assert_eq!(ThemeVariant::pair(false), [ThemeVariant::Light, ThemeVariant::Dark]);
        assert_eq!(
            ThemeVariant::pair(true),
            [ThemeVariant::HighContrastLight, ThemeVariant::HighContrastDark]
        );
    }

    #[test]
    fn color_properties_are_the_seven_channels() {
        let colors = StyleProperty::ALL.iter().filter(|p| p.is_color()).count();
        assert_eq!(colors, 7);
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&StyleProperty::ForegroundColor).unwrap();
        assert_eq!(json, "\"color\"");
        let state: InteractionState = serde_json::from_str("\"read-only\"").unwrap();
        assert_eq!(state, InteractionState::ReadOnly);
    }
}

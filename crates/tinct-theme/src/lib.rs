#![forbid(unsafe_code)]

//! Palette derivation and validated style overrides for Tinct.
//!
//! # Role in Tinct
//! `tinct-theme` sits on top of `tinct-color`. It derives per-state
//! palettes from a base palette, describes override targets with a
//! four-axis selector, and keeps an append-only log of overrides that
//! respect the system rules.
//!
//! # This crate provides
//! - [`PaletteVariant`] and [`PaletteDeriver`]: state and elevation
//!   derivations driven by a [`DeriveConfig`].
//! - [`ThemeSelector`] and the tag enums for its axes.
//! - [`OverrideValidator`]: the override log and its four rules.
//! - [`IntentExpander`]: one [`Intent`] in, every concrete [`ThemeUpdate`]
//!   out.
//!
//! ```
//! use tinct_theme::{
//!     ColorChannel, ComponentKind, Concern, DefaultPalettes, Intent, IntentExpander,
//!     OverrideValidator, PaletteRole,
//! };
//!
//! let intent = Intent::new(ComponentKind::Surface, Concern::Color(ColorChannel::Background))
//!     .role(PaletteRole::Primary);
//! let mut log = OverrideValidator::new();
//! let appended = IntentExpander::new(DefaultPalettes).apply(&intent, &mut log)?;
//! assert_eq!(appended, 14);
//! # Ok::<(), tinct_theme::ThemeError>(())
//! ```

/// Derivation constants and their JSON loader.
pub mod config;
/// Built-in base palettes.
pub mod defaults;
/// Crate-level error type.
pub mod error;
/// Intent expansion into concrete updates.
pub mod expand;
/// Palette variants and per-state derivations.
pub mod palette;
/// Four-axis theme selectors.
pub mod selector;
/// Closed-set tags for selector axes and palette roles.
pub mod tags;
/// Selector and value pairs.
pub mod update;
/// Override log and its rules.
pub mod validator;
/// Style values and CSS lengths.
pub mod value;

pub use config::{DeriveConfig, StateDelta};
pub use defaults::{DefaultPalettes, PaletteSource};
pub use error::{Result, ThemeError};
pub use expand::{Concern, Intent, IntentExpander};
pub use palette::{
    ColorChannel, Elevation, PaletteDeriver, PaletteVariant, derive_directional, derive_disabled,
    derive_elevation,
};
pub use selector::{SelectorAxis, ThemeSelector};
pub use tags::{ComponentKind, InteractionState, PaletteRole, StyleProperty, ThemeVariant};
pub use update::ThemeUpdate;
pub use validator::{OverrideValidator, ValidationError, ValidationRule};
pub use value::{Length, LengthUnit, StyleValue};

pub use tinct_color::{ColorValue, FormatError};

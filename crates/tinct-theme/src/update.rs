//! A (selector, value) pair destined for the override log.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::selector::ThemeSelector;
use crate::value::StyleValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeUpdate {
    pub selector: ThemeSelector,
    pub value: StyleValue,
}

impl ThemeUpdate {
    pub fn new(selector: ThemeSelector, value: impl Into<StyleValue>) -> Self {
        Self {
            selector,
            value: value.into(),
        }
    }

    /// `(property-name, value-string)` for each property on the selector.
    ///
    /// Assembling these into a declaration block is left to the caller.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let css = self.value.to_css();
        self.selector
            .properties()
            .iter()
            .map(|property| (property.name(), css.clone()))
            .collect()
    }
}

impl fmt::Display for ThemeUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.selector, self.value.to_css())
    }
}

use thiserror::Error;
use tinct_color::FormatError;

use crate::tags::{PaletteRole, ThemeVariant};
use crate::validator::ValidationError;

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no `{role}` palette for theme variant `{variant}`")]
    MissingPalette {
        variant: ThemeVariant,
        role: PaletteRole,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid derivation config: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_palette_names_variant_and_role() {
        let error = ThemeError::MissingPalette {
            variant: ThemeVariant::System,
            role: PaletteRole::Primary,
        };
        assert_eq!(
            error.to_string(),
            "no `primary` palette for theme variant `system`"
        );
    }

    #[test]
    fn invalid_config_joins_problems() {
        let error = ThemeError::InvalidConfig(vec!["a".into(), "b".into()]);
        assert_eq!(error.to_string(), "invalid derivation config: a; b");
    }
}

//! Horizontal alignment shared by block components.

use serde::Deserialize;

/// Horizontal alignment of a component within its flex wrapper.
///
/// Decoded from the `display` field of a component payload; defaults to
/// [`Center`](Self::Center) when the field is absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Align to the start of the line (`justify-start`).
    Left,
    /// Center on the line (`justify-center`).
    #[default]
    Center,
    /// Align to the end of the line (`justify-end`).
    Right,
}

impl Alignment {
    /// Flexbox justification class for this alignment.
    #[must_use]
    pub fn justify_class(self) -> &'static str {
        match self {
            Self::Left => "justify-start",
            Self::Center => "justify-center",
            Self::Right => "justify-end",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_justify_classes() {
        assert_eq!(Alignment::Left.justify_class(), "justify-start");
        assert_eq!(Alignment::Center.justify_class(), "justify-center");
        assert_eq!(Alignment::Right.justify_class(), "justify-end");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let align: Alignment = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(align, Alignment::Right);
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        let result = serde_json::from_str::<Alignment>("\"justified\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_center() {
        assert_eq!(Alignment::default(), Alignment::Center);
    }
}

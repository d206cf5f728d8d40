//! Output layout configuration.

/// How serialized JSON is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Single line, no insignificant whitespace.
    #[default]
    Compact,

    /// One value per line, nested values indented by `indent` spaces.
    Pretty { indent: usize },
}

/// Serialization options for [`SerdeJsonIo`](crate::SerdeJsonIo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonOptions {
    pub layout: Layout,
}

impl JsonOptions {
    pub const DEFAULT_INDENT: usize = 2;

    pub fn compact() -> Self {
        Self {
            layout: Layout::Compact,
        }
    }

    /// Indented output using [`DEFAULT_INDENT`](Self::DEFAULT_INDENT) spaces.
    pub fn pretty() -> Self {
        Self::indented(Self::DEFAULT_INDENT)
    }

    pub fn indented(indent: usize) -> Self {
        Self {
            layout: Layout::Pretty { indent },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_compact() {
        assert_eq!(JsonOptions::default(), JsonOptions::compact());
    }

    #[test]
    fn pretty_uses_two_spaces() {
        assert_eq!(JsonOptions::pretty().layout, Layout::Pretty { indent: 2 });
    }
}

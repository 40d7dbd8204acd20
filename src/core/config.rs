//! Run-time configuration object + fluent builder.

use crate::core::color::{Ansi, ColorError};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub subtitle: Option<String>,
    pub bound: i64,
    pub color: Option<Ansi>,
}

impl Config {
    #[inline]
    pub fn builder(bound: i64) -> ConfigBuilder {
        ConfigBuilder::new(bound)
    }
}

/// Fluent builder; the colour spec is the only part that can fail, and it
/// is parsed once at `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    bound: i64,
    title: Option<String>,
    subtitle: Option<String>,
    color: Option<String>,
}

impl ConfigBuilder {
    pub(crate) fn new(bound: i64) -> Self {
        Self {
            bound,
            title: None,
            subtitle: None,
            color: None,
        }
    }

    #[inline]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    pub fn subtitle(mut self, s: impl Into<String>) -> Self {
        self.subtitle = Some(s.into());
        self
    }
    #[inline]
    pub fn color(mut self, spec: impl Into<String>) -> Self {
        self.color = Some(spec.into());
        self
    }
    #[inline]
    pub fn color_opt(mut self, spec: &Option<String>) -> Self {
        if let Some(s) = spec {
            self.color = Some(s.clone());
        }
        self
    }

    pub fn build(self) -> Result<Config, ColorError> {
        let color = match self.color {
            Some(spec) => Some(Ansi::from_name(&spec)?),
            None => None,
        };
        Ok(Config {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            bound: self.bound,
            color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::core::color::{Ansi, ColorError};

    #[test]
    fn defaults_are_plain_and_untitled() {
        let cfg = Config::builder(7).build().unwrap();
        assert_eq!(cfg.bound, 7);
        assert!(cfg.title.is_empty());
        assert!(cfg.subtitle.is_none());
        assert!(cfg.color.is_none());
    }

    #[test]
    fn color_spec_is_parsed_at_build() {
        let cfg = Config::builder(3).color("blue").build().unwrap();
        assert_eq!(cfg.color, Some(Ansi::blue()));

        let err = Config::builder(3).color("bogus").build().unwrap_err();
        assert_eq!(err, ColorError::InvalidHexLength);
    }

    #[test]
    fn absent_optional_spec_leaves_color_unset() {
        let cfg = Config::builder(3).color_opt(&None).build().unwrap();
        assert!(cfg.color.is_none());
    }
}

//! Environment mode collaborators.
//!
//! The widget shows which build or deploy configuration it is running under.
//! That string comes from outside the widget through [`ModeSource`] and is
//! read exactly once, when the widget is constructed.

/// Mode reported by debug builds when no override is compiled in.
pub const DEVELOPMENT: &str = "development";

/// Mode reported by release builds when no override is compiled in.
pub const PRODUCTION: &str = "production";

/// Read-only source of the current environment mode.
pub trait ModeSource {
    /// The current mode, or `None` if the host does not provide one.
    fn current_mode(&self) -> Option<String>;
}

impl<S: ModeSource + ?Sized> ModeSource for &S {
    fn current_mode(&self) -> Option<String> {
        (**self).current_mode()
    }
}

/// Mode baked in at compile time.
///
/// `LAUNCHPAD_MODE` set while compiling wins; otherwise debug builds report
/// `"development"` and release builds report `"production"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildMode;

impl BuildMode {
    /// The mode string this build was compiled with.
    #[must_use]
    pub const fn resolve() -> &'static str {
        match option_env!("LAUNCHPAD_MODE") {
            Some(mode) => mode,
            None if cfg!(debug_assertions) => DEVELOPMENT,
            None => PRODUCTION,
        }
    }
}

impl ModeSource for BuildMode {
    fn current_mode(&self) -> Option<String> {
        Some(Self::resolve().to_string())
    }
}

/// A mode supplied directly, e.g. from a command-line flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedMode(String);

impl FixedMode {
    /// Wrap a mode string.
    pub fn new(mode: impl Into<String>) -> Self {
        Self(mode.into())
    }

    /// The wrapped mode.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ModeSource for FixedMode {
    fn current_mode(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_mode_is_verbatim() {
        let source = FixedMode::new("staging");
        assert_eq!(source.current_mode().as_deref(), Some("staging"));
        assert_eq!(source.as_str(), "staging");
    }

    #[test]
    fn test_build_mode_is_never_empty() {
        let mode = BuildMode.current_mode().unwrap();
        assert!(!mode.is_empty());
        assert_eq!(mode, BuildMode::resolve());
    }

    #[test]
    fn test_build_mode_follows_profile() {
        if option_env!("LAUNCHPAD_MODE").is_none() {
            let expected = if cfg!(debug_assertions) {
                DEVELOPMENT
            } else {
                PRODUCTION
            };
            assert_eq!(BuildMode::resolve(), expected);
        }
    }

    #[test]
    fn test_reference_is_a_source() {
        fn read(source: impl ModeSource) -> Option<String> {
            source.current_mode()
        }

        let source = FixedMode::new("production");
        assert_eq!(read(&source).as_deref(), Some("production"));
    }
}

/// Unique identifier for each persisted preference.
///
/// The `as_str()` value is the storage key. Once written to disk, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceId {
    DarkTheme,
    LinearLayout,
}

impl PreferenceId {
    /// Stable key in the preference file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DarkTheme => "isDarkTheme",
            Self::LinearLayout => "isLinearLayout",
        }
    }

    /// Value reported before anything has been written.
    pub fn default_value(&self) -> bool {
        match self {
            Self::DarkTheme => false,
            Self::LinearLayout => true,
        }
    }

    /// All variants for iteration.
    pub fn all() -> &'static [PreferenceId] {
        &[Self::DarkTheme, Self::LinearLayout]
    }

    /// Human label for logs and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DarkTheme => "theme",
            Self::LinearLayout => "layout",
        }
    }

    /// Render a value the way the user thinks about it ("dark", "grid", ...).
    pub fn describe(&self, value: bool) -> &'static str {
        match (self, value) {
            (Self::DarkTheme, true) => "dark",
            (Self::DarkTheme, false) => "light",
            (Self::LinearLayout, true) => "linear",
            (Self::LinearLayout, false) => "grid",
        }
    }
}

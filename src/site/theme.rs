pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Icon shows the theme a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Durable key/value storage for the preference. Implementations swallow
/// their own failures: a read that fails is `None`, a write that fails is
/// reported as `false` and otherwise ignored.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub default: Theme,
    pub switchable: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: Theme::Light,
            switchable: true,
        }
    }
}

pub struct ThemeStore<S> {
    storage: S,
    config: ThemeConfig,
    current: Theme,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    pub fn load(storage: S, config: ThemeConfig) -> Self {
        let current = if config.switchable {
            storage
                .read(THEME_KEY)
                .and_then(|value| Theme::from_str(&value))
                .unwrap_or(config.default)
        } else {
            config.default
        };

        Self {
            storage,
            config,
            current,
        }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn switchable(&self) -> bool {
        self.config.switchable
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled())
    }

    /// Returns the active theme after the call. A fixed (non-switchable)
    /// store ignores the request.
    pub fn set(&mut self, theme: Theme) -> Theme {
        if !self.config.switchable {
            return self.current;
        }

        self.current = theme;
        self.storage.write(THEME_KEY, theme.as_str());
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    #[derive(Clone, Default)]
    struct MemoryStorage {
        values: Rc<RefCell<HashMap<String, String>>>,
        broken: bool,
    }

    impl MemoryStorage {
        fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            storage
        }

        fn stored(&self) -> Option<String> {
            self.values.borrow().get(THEME_KEY).cloned()
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            if self.broken {
                return None;
            }
            self.values.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) -> bool {
            if self.broken {
                return false;
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            true
        }
    }

    #[test]
    fn first_load_defaults_to_light() {
        let store = ThemeStore::load(MemoryStorage::default(), ThemeConfig::default());
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn stored_value_wins_when_switchable() {
        let store = ThemeStore::load(MemoryStorage::with(THEME_KEY, "dark"), ThemeConfig::default());
        assert!(store.switchable());
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn garbage_in_storage_falls_back_to_default() {
        let store = ThemeStore::load(MemoryStorage::with(THEME_KEY, "sepia"), ThemeConfig::default());
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn fixed_theme_ignores_storage_and_toggles() {
        let config = ThemeConfig {
            default: Theme::Dark,
            switchable: false,
        };
        let storage = MemoryStorage::with(THEME_KEY, "light");
        let mut store = ThemeStore::load(storage.clone(), config);

        assert!(!store.switchable());
        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(storage.stored().as_deref(), Some("light"));
    }

    #[test]
    fn toggle_twice_restores_and_persists_each_step() {
        let storage = MemoryStorage::default();
        let mut store = ThemeStore::load(storage.clone(), ThemeConfig::default());
        let original = store.get();

        let first = store.toggle();
        assert_eq!(storage.stored().as_deref(), Some(first.as_str()));

        let second = store.toggle();
        assert_eq!(second, original);
        assert_eq!(storage.stored().as_deref(), Some(store.get().as_str()));
    }

    #[test]
    fn broken_storage_keeps_in_memory_value() {
        let storage = MemoryStorage {
            broken: true,
            ..MemoryStorage::default()
        };
        let mut store = ThemeStore::load(storage, ThemeConfig::default());

        assert_eq!(store.set(Theme::Dark), Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    }
}

use crate::error::{AppError, AppResult};
use crate::theme::loader::{DEFAULT_THEME_KEY, ThemeRegistry};
use crate::theme::types::Theme;
use client::events::{EventBus, SubscriptionId};
use client::storage::{LocalStore, slots};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// Global theme manager instance, wrapped in a Mutex for thread-safe updates
static GLOBAL_THEME_MANAGER: OnceCell<Mutex<ThemeManager>> = OnceCell::new();

/// Notification broadcast on every theme change, carrying the resolved key
/// and the full theme record.
#[derive(Debug, Clone)]
pub enum ThemeEvent {
    Changed { theme: String, config: Theme },
}

/// Process-wide theme state: the active key, the applied style variables
/// and the change bus. Switching is the only mutation; observers read the
/// current key and variables at any time.
pub struct ThemeManager {
    registry: ThemeRegistry,
    store: LocalStore,
    current: String,
    style_vars: HashMap<String, String>,
    events: Arc<EventBus<ThemeEvent>>,
}

impl ThemeManager {
    /// Build a manager over the given store and apply the persisted theme
    /// key (falling back to the default when absent or unknown), so no
    /// caller ever observes an unapplied or partial theme.
    pub fn new(store: LocalStore) -> AppResult<Self> {
        let registry = ThemeRegistry::load_builtin()?;
        let persisted = store
            .get(slots::THEME)
            .unwrap_or_else(|| DEFAULT_THEME_KEY.to_string());

        let mut manager = Self {
            registry,
            store,
            current: String::new(),
            style_vars: HashMap::new(),
            events: Arc::new(EventBus::new()),
        };
        manager.apply(&persisted);
        Ok(manager)
    }

    /// Initialize the global theme manager - call this once at app startup
    pub fn init_global(store: LocalStore) -> AppResult<()> {
        let manager = Self::new(store)?;
        let initial = manager.current.clone();

        GLOBAL_THEME_MANAGER
            .set(Mutex::new(manager))
            .map_err(|_| AppError::State("Theme manager already initialized".to_string()))?;

        log::info!("Global theme manager initialized with theme '{initial}'");
        Ok(())
    }

    /// Get the global theme manager instance
    pub fn global() -> &'static Mutex<ThemeManager> {
        GLOBAL_THEME_MANAGER
            .get()
            .expect("Theme manager not initialized. Call ThemeManager::init_global() first.")
    }

    /// Resolve `key` (unknown keys warn and fall back to the default),
    /// persist it, and rewrite every style variable. Returns the change
    /// notification for the caller to broadcast.
    fn apply(&mut self, key: &str) -> ThemeEvent {
        let resolved = if self.registry.contains(key) {
            key.to_string()
        } else {
            log::warn!("Unknown theme '{key}', falling back to '{DEFAULT_THEME_KEY}'");
            DEFAULT_THEME_KEY.to_string()
        };

        // The registry is validated at load time and always holds the default.
        let theme = self
            .registry
            .get(&resolved)
            .cloned()
            .expect("default theme is always registered");

        self.current = resolved.clone();
        self.store.set(slots::THEME, resolved.as_str());
        self.style_vars = theme.style_variables().into_iter().collect();

        ThemeEvent::Changed {
            theme: resolved,
            config: theme,
        }
    }

    /// Switch themes and notify every subscriber before returning.
    pub fn switch_theme(&mut self, key: &str) {
        let event = self.apply(key);
        let events = self.events.clone();
        events.publish(&event);
    }

    /// The active theme key. Never fails.
    pub fn current_theme(&self) -> &str {
        &self.current
    }

    /// The full record of the active theme.
    pub fn current_config(&self) -> &Theme {
        self.registry
            .get(&self.current)
            .expect("current theme is always registered")
    }

    /// Enumeration of `(key, display name)` pairs in declaration order.
    pub fn available_themes(&self) -> Vec<(String, String)> {
        self.registry.available()
    }

    /// Value of one applied style variable, e.g. `--theme-primary`.
    pub fn style_variable(&self, name: &str) -> Option<String> {
        self.style_vars.get(name).cloned()
    }

    /// Snapshot of every applied style variable.
    pub fn style_variables(&self) -> HashMap<String, String> {
        self.style_vars.clone()
    }

    /// Bus carrying [`ThemeEvent::Changed`] notifications.
    pub fn events(&self) -> Arc<EventBus<ThemeEvent>> {
        self.events.clone()
    }
}

// Static accessors over the global instance. Reads fall back to safe
// defaults when the manager is unavailable, because theming must never
// block a page render.
impl ThemeManager {
    fn with_manager<F, R>(f: F, fallback: R) -> R
    where
        F: FnOnce(&mut ThemeManager) -> R,
    {
        match GLOBAL_THEME_MANAGER.get() {
            Some(manager_mutex) => match manager_mutex.lock() {
                Ok(mut manager) => f(&mut manager),
                Err(_) => {
                    log::warn!("Theme manager lock poisoned, using fallback");
                    fallback
                }
            },
            None => {
                log::warn!("Theme manager not initialized, using fallback");
                fallback
            }
        }
    }

    pub fn global_current_theme() -> String {
        Self::with_manager(
            |manager| manager.current_theme().to_string(),
            DEFAULT_THEME_KEY.to_string(),
        )
    }

    /// Switch the global theme. Subscribers are notified synchronously,
    /// after the manager lock is released so they may read theme state.
    pub fn global_switch_theme(key: &str) {
        let published = Self::with_manager(
            |manager| {
                let event = manager.apply(key);
                Some((manager.events.clone(), event))
            },
            None,
        );
        if let Some((events, event)) = published {
            events.publish(&event);
        }
    }

    pub fn global_available_themes() -> Vec<(String, String)> {
        Self::with_manager(|manager| manager.available_themes(), Vec::new())
    }

    pub fn global_style_variable(name: &str) -> Option<String> {
        Self::with_manager(|manager| manager.style_variable(name), None)
    }

    pub fn global_subscribe<F>(callback: F) -> Option<SubscriptionId>
    where
        F: Fn(&ThemeEvent) + Send + Sync + 'static,
    {
        Self::with_manager(|manager| Some(manager.events.subscribe(callback)), None)
    }

    pub fn global_unsubscribe(id: SubscriptionId) -> bool {
        Self::with_manager(|manager| manager.events.unsubscribe(id), false)
    }
}

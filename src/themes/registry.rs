use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::{
    types::{ThemeStyle, ThemeType},
    utils,
};

use super::{ThemeStrategy, build_theme};

/// Default number of theme instances kept alive.
pub const THEME_CACHE_CAPACITY: usize = 20;

type ThemeKey = (ThemeType, ThemeStyle, Option<String>);

/// Memoizing factory for theme strategies.
///
/// Keys are normalized before lookup, so `windows98/dark` and
/// `windows98/light` share one instance, as do requests that differ only in a
/// colour the theme ignores. When full, the oldest insertion is evicted.
pub struct ThemeRegistry {
    capacity: usize,
    entries: Mutex<VecDeque<(ThemeKey, Arc<dyn ThemeStrategy>)>>,
    constructed: AtomicUsize,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::with_capacity(THEME_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            constructed: AtomicUsize::new(0),
        }
    }

    pub fn get_theme(
        &self,
        theme: ThemeType,
        style: ThemeStyle,
        color: Option<&str>,
    ) -> Arc<dyn ThemeStrategy> {
        let key: ThemeKey = (
            theme,
            theme.coerce_style(style),
            color
                .filter(|_| theme.accepts_color())
                .and_then(utils::normalize_hex),
        );

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if let Some((_, instance)) = entries.iter().find(|(k, _)| *k == key) {
            return Arc::clone(instance);
        }

        let instance = build_theme(key.0, key.1, key.2.as_deref());
        self.constructed.fetch_add(1, Ordering::Relaxed);

        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back((key, Arc::clone(&instance)));
        instance
    }

    /// How many strategies have been built since creation.
    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn available_themes() -> Vec<&'static str> {
        ThemeType::ALL.iter().map(|t| t.as_str()).collect()
    }
}

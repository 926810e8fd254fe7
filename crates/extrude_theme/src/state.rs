//! Process-wide active theme

use crate::theme::ExtrudeTheme;
use std::sync::{Arc, LazyLock, RwLock};

static ACTIVE_THEME: LazyLock<RwLock<Arc<ExtrudeTheme>>> =
    LazyLock::new(|| RwLock::new(Arc::new(ExtrudeTheme::default())));

/// Access to the active theme
///
/// Components read the theme once per scene build. Swapping the theme takes
/// effect on the next build.
pub struct ThemeState;

impl ThemeState {
    /// The active theme
    pub fn get() -> Arc<ExtrudeTheme> {
        match ACTIVE_THEME.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replace the active theme
    pub fn set(theme: ExtrudeTheme) {
        let theme = Arc::new(theme);
        match ACTIVE_THEME.write() {
            Ok(mut guard) => *guard = theme,
            Err(poisoned) => *poisoned.into_inner() = theme,
        }
        tracing::debug!("active theme replaced");
    }

    /// Restore the default theme
    pub fn reset() {
        Self::set(ExtrudeTheme::default());
    }
}

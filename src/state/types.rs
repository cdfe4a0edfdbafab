//! Small state types shared across events and UI.

use crate::schema::CATEGORIES;

/// Top-level tab: the theme browser plus one tab per schema category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    /// The searchable theme browser.
    #[default]
    Themes,
    /// An option category, by index into [`CATEGORIES`].
    Category(usize),
}

impl Tab {
    /// Number of tabs: themes plus every category.
    #[must_use]
    pub const fn count() -> usize {
        1 + CATEGORIES.len()
    }

    /// Position in the tab bar.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Themes => 0,
            Self::Category(i) => i + 1,
        }
    }

    /// Tab at a position, wrapping around.
    #[must_use]
    pub const fn from_index(i: usize) -> Self {
        let i = i % Self::count();
        if i == 0 {
            Self::Themes
        } else {
            Self::Category(i - 1)
        }
    }

    /// The next tab, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The previous tab, wrapping.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::from_index(self.index() + Self::count() - 1)
    }

    /// Tab bar title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Themes => "Themes",
            Self::Category(i) => CATEGORIES.get(i).copied().unwrap_or("?"),
        }
    }

    /// The category name this tab shows, when it is a category tab.
    #[must_use]
    pub fn category(self) -> Option<&'static str> {
        match self {
            Self::Themes => None,
            Self::Category(i) => CATEGORIES.get(i).copied(),
        }
    }
}

/// Severity of a status-line message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    /// Normal feedback (saved, reloaded).
    Info,
    /// Something degraded but not blocking (reload failed).
    Warning,
    /// An operation was aborted (save failed).
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle_covers_every_tab_and_wraps() {
        let mut tab = Tab::Themes;
        for _ in 0..Tab::count() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Themes);
        assert_eq!(Tab::Themes.prev().next(), Tab::Themes);
        assert_eq!(Tab::Category(0).prev(), Tab::Themes);
    }

    #[test]
    fn tab_titles_follow_categories() {
        assert_eq!(Tab::Themes.title(), "Themes");
        assert_eq!(Tab::Category(0).title(), CATEGORIES[0]);
        assert_eq!(Tab::Category(0).category(), Some(CATEGORIES[0]));
        assert_eq!(Tab::Themes.category(), None);
    }
}

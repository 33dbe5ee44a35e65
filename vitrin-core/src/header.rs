//! Header appearance and mobile drawer state.

use crate::catalog::Brand;
use crate::constants::HEADER_SCROLL_THRESHOLD_PX;

/// Header look: transparent over the hero, solid once the page scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderTheme {
    #[default]
    Transparent,
    Solid,
}

impl HeaderTheme {
    /// Scroll offsets at or below the threshold keep the transparent look.
    #[must_use]
    pub fn from_scroll(scroll_y: f64) -> Self {
        if scroll_y > HEADER_SCROLL_THRESHOLD_PX {
            Self::Solid
        } else {
            Self::Transparent
        }
    }

    #[must_use]
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Solid)
    }

    #[must_use]
    pub const fn shell_class(self) -> &'static str {
        match self {
            Self::Transparent => "bg-transparent text-white",
            Self::Solid => "bg-white border-b border-black/5 backdrop-blur text-black",
        }
    }

    #[must_use]
    pub const fn top_bar_class(self) -> &'static str {
        match self {
            Self::Transparent => "bg-black text-white",
            Self::Solid => "bg-white text-black",
        }
    }

    #[must_use]
    pub const fn hover_class(self) -> &'static str {
        match self {
            Self::Transparent => "hover:bg-white/10",
            Self::Solid => "hover:bg-black/5",
        }
    }

    /// Light logo over the hero, dark logo on the solid bar.
    #[must_use]
    pub fn logo(self, brand: &Brand) -> &str {
        match self {
            Self::Transparent => &brand.logo_top,
            Self::Solid => &brand.logo_scrolled,
        }
    }
}

/// Mobile navigation drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Drawer {
    open: bool,
}

impl Drawer {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn opened(self) -> Self {
        Self { open: true }
    }

    #[must_use]
    pub const fn closed(self) -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Page body overflow while the drawer is shown.
    #[must_use]
    pub const fn body_overflow(self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(HeaderTheme::from_scroll(0.0), HeaderTheme::Transparent);
        assert_eq!(HeaderTheme::from_scroll(24.0), HeaderTheme::Transparent);
        assert_eq!(HeaderTheme::from_scroll(24.5), HeaderTheme::Solid);
        assert!(HeaderTheme::from_scroll(800.0).is_solid());
    }

    #[test]
    fn logo_swaps_with_theme() {
        let brand = Catalog::builtin().unwrap().brand;
        assert_eq!(HeaderTheme::Transparent.logo(&brand), "/2.png");
        assert_eq!(HeaderTheme::Solid.logo(&brand), "/1.png");
    }

    #[test]
    fn drawer_transitions() {
        let drawer = Drawer::default();
        assert!(!drawer.is_open());
        assert_eq!(drawer.opened().body_overflow(), "hidden");
        assert!(!drawer.opened().closed().is_open());
        assert!(drawer.toggled().is_open());
    }
}

//! Static window catalog generated at build time from `windows.catalog.toml`.

use crate::model::{WindowId, WindowRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Display grouping used by the start menu and the desktop icon columns.
pub enum CatalogSection {
    /// Portfolio sections.
    Apps,
    /// Mini-games.
    Games,
}

impl CatalogSection {
    pub const ALL: [CatalogSection; 2] = [Self::Apps, Self::Games];

    pub fn label(self) -> &'static str {
        match self {
            Self::Apps => "Programs",
            Self::Games => "Games",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Apps => "apps",
            Self::Games => "games",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One launchable window known at startup.
pub struct CatalogEntry {
    pub id: WindowId,
    pub title: &'static str,
    pub icon: &'static str,
    pub desktop_label: &'static str,
    pub section: CatalogSection,
    pub default_rect: WindowRect,
}

include!(concat!(env!("OUT_DIR"), "/window_catalog_generated.rs"));

pub fn window_catalog() -> &'static [CatalogEntry] {
    WINDOW_CATALOG
}

pub fn catalog_entry(window_id: WindowId) -> Option<&'static CatalogEntry> {
    window_catalog().iter().find(|entry| entry.id == window_id)
}

pub fn entries_in_section(section: CatalogSection) -> Vec<CatalogEntry> {
    window_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.section == section)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_ids_are_unique_and_sizes_positive() {
        let catalog = window_catalog();
        for (idx, entry) in catalog.iter().enumerate() {
            assert!(entry.default_rect.w > 0 && entry.default_rect.h > 0);
            assert!(catalog[idx + 1..].iter().all(|other| other.id != entry.id));
        }
    }

    #[test]
    fn catalog_contains_portfolio_and_game_windows() {
        for id in ["about", "projects", "resume", "contact", "blog"] {
            let entry = catalog_entry(WindowId(id)).expect("portfolio entry");
            assert_eq!(entry.section, CatalogSection::Apps);
        }
        for id in ["snake", "minesweeper", "tictactoe"] {
            let entry = catalog_entry(WindowId(id)).expect("game entry");
            assert_eq!(entry.section, CatalogSection::Games);
        }
    }

    #[test]
    fn sections_partition_catalog_in_declaration_order() {
        let apps = entries_in_section(CatalogSection::Apps);
        let games = entries_in_section(CatalogSection::Games);
        assert_eq!(apps.len() + games.len(), window_catalog().len());
        assert_eq!(
            apps.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            vec!["about", "projects", "resume", "contact", "blog"]
        );
    }

    #[test]
    fn desktop_settings_sit_above_static_chrome() {
        assert_eq!(Z_INDEX_BASELINE, 100);
        assert!(TASKBAR_HEIGHT_PX > 0);
    }
}

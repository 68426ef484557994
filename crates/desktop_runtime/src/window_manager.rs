//! Window registry: the single owner of per-window lifecycle, stacking, and geometry state.

use thiserror::Error;

use crate::catalog::CatalogEntry;
use crate::model::{WindowId, WindowRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Registry errors. Every variant is a programming error at the call site.
pub enum RegistryError {
    /// The id is not part of the window catalog.
    #[error("unknown window `{0}`")]
    UnknownWindow(WindowId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Authoritative window state for every catalog entry, plus the shared z-order counter.
///
/// Records are created once from the catalog and live for the whole session; operations only
/// mutate their flags, origin, and `z_index`.
pub struct WindowRegistry {
    windows: Vec<WindowRecord>,
    z_baseline: u32,
    z_counter: u32,
}

impl WindowRegistry {
    /// Builds one closed record per catalog entry, all sharing `z_baseline`.
    pub fn new(catalog: &[CatalogEntry], z_baseline: u32) -> Self {
        Self {
            windows: catalog
                .iter()
                .map(|entry| WindowRecord::from_catalog(entry, z_baseline))
                .collect(),
            z_baseline,
            z_counter: z_baseline,
        }
    }

    pub fn get(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Open windows (minimized or not) in catalog order.
    pub fn open_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| w.is_open)
    }

    /// Painted windows, back to front.
    pub fn visible_windows(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> =
            self.windows.iter().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    pub fn topmost(&self) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
    }

    /// Last z value handed out.
    pub fn z_counter(&self) -> u32 {
        self.z_counter
    }

    /// Opens `window_id` and raises it. Opening an open window is the same as focusing it.
    pub fn open(&mut self, window_id: WindowId) -> Result<(), RegistryError> {
        let index = self.index_of(window_id)?;
        let z_index = self.next_z_index();
        let window = &mut self.windows[index];
        window.is_open = true;
        window.is_minimized = false;
        window.z_index = z_index;
        Ok(())
    }

    /// Closes `window_id`, clearing minimize/maximize. The floating rectangle is kept.
    pub fn close(&mut self, window_id: WindowId) -> Result<(), RegistryError> {
        let window = self.find_mut(window_id)?;
        window.is_open = false;
        window.is_minimized = false;
        window.is_maximized = false;
        Ok(())
    }

    /// Hides an open window from the surface without touching its `z_index`.
    ///
    /// A maximized window drops back to its floating rectangle so that restoring it from the
    /// taskbar never yields a minimized-and-maximized record.
    pub fn minimize(&mut self, window_id: WindowId) -> Result<(), RegistryError> {
        let window = self.find_mut(window_id)?;
        if !window.is_open {
            return Ok(());
        }
        window.is_minimized = true;
        window.is_maximized = false;
        Ok(())
    }

    /// Flips the maximized flag of a visible window. Geometry is left untouched.
    pub fn toggle_maximize(&mut self, window_id: WindowId) -> Result<(), RegistryError> {
        let window = self.find_mut(window_id)?;
        if !window.is_visible() {
            return Ok(());
        }
        window.is_maximized = !window.is_maximized;
        Ok(())
    }

    /// Un-minimizes and raises an open window.
    pub fn focus(&mut self, window_id: WindowId) -> Result<(), RegistryError> {
        let index = self.index_of(window_id)?;
        if !self.windows[index].is_open {
            return Ok(());
        }
        let z_index = self.next_z_index();
        let window = &mut self.windows[index];
        window.is_minimized = false;
        window.z_index = z_index;
        Ok(())
    }

    /// Overwrites the floating origin. Called once per completed drag gesture.
    pub fn update_position(
        &mut self,
        window_id: WindowId,
        x: i32,
        y: i32,
    ) -> Result<(), RegistryError> {
        let window = self.find_mut(window_id)?;
        window.rect = window.rect.with_origin(x, y);
        Ok(())
    }

    fn next_z_index(&mut self) -> u32 {
        if self.z_counter == u32::MAX {
            self.renormalize_z_order();
        }
        self.z_counter += 1;
        self.z_counter
    }

    /// Repacks open windows into `base+1..` keeping their stacking order, so the counter has
    /// room again. Closed windows drop to `base`.
    fn renormalize_z_order(&mut self) {
        let headroom = u32::try_from(self.windows.len() + 1).unwrap_or(u32::MAX);
        let base = self.z_baseline.min(u32::MAX.saturating_sub(headroom));

        let mut stacking: Vec<usize> = (0..self.windows.len())
            .filter(|&i| self.windows[i].is_open)
            .collect();
        stacking.sort_by_key(|&i| self.windows[i].z_index);

        for window in self.windows.iter_mut().filter(|w| !w.is_open) {
            window.z_index = base;
        }
        let mut next = base;
        for index in stacking {
            next += 1;
            self.windows[index].z_index = next;
        }
        self.z_counter = next;
    }

    fn index_of(&self, window_id: WindowId) -> Result<usize, RegistryError> {
        self.windows
            .iter()
            .position(|w| w.id == window_id)
            .ok_or(RegistryError::UnknownWindow(window_id))
    }

    fn find_mut(&mut self, window_id: WindowId) -> Result<&mut WindowRecord, RegistryError> {
        self.windows
            .iter_mut()
            .find(|w| w.id == window_id)
            .ok_or(RegistryError::UnknownWindow(window_id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::{window_catalog, Z_INDEX_BASELINE};

    const ABOUT: WindowId = WindowId("about");
    const PROJECTS: WindowId = WindowId("projects");
    const RESUME: WindowId = WindowId("resume");

    fn registry() -> WindowRegistry {
        WindowRegistry::new(window_catalog(), Z_INDEX_BASELINE)
    }

    fn record(registry: &WindowRegistry, id: WindowId) -> WindowRecord {
        registry.get(id).cloned().expect("catalog window")
    }

    fn assert_invariants(registry: &WindowRegistry) {
        for w in registry.records() {
            assert!(!w.is_minimized || w.is_open, "{} minimized while closed", w.id);
            assert!(
                !w.is_maximized || (w.is_open && !w.is_minimized),
                "{} maximized while hidden",
                w.id
            );
        }
    }

    #[test]
    fn session_starts_with_every_window_closed_at_baseline() {
        let registry = registry();
        assert_eq!(registry.records().len(), window_catalog().len());
        assert!(registry.records().iter().all(|w| !w.is_open));
        assert!(registry
            .records()
            .iter()
            .all(|w| w.z_index == Z_INDEX_BASELINE));
        assert_eq!(registry.topmost(), None);
    }

    #[test]
    fn opening_about_raises_it_one_above_baseline() {
        let mut registry = registry();
        registry.open(ABOUT).unwrap();

        let about = record(&registry, ABOUT);
        assert!(about.is_open);
        assert!(!about.is_minimized);
        assert_eq!(about.z_index, Z_INDEX_BASELINE + 1);
        assert!(registry
            .records()
            .iter()
            .filter(|w| w.id != ABOUT)
            .all(|w| !w.is_open));
    }

    #[test]
    fn close_is_idempotent() {
        let mut registry = registry();
        registry.open(ABOUT).unwrap();
        registry.toggle_maximize(ABOUT).unwrap();

        registry.close(ABOUT).unwrap();
        let once = registry.clone();
        registry.close(ABOUT).unwrap();

        assert_eq!(registry, once);
        let about = record(&registry, ABOUT);
        assert!(!about.is_open && !about.is_minimized && !about.is_maximized);
    }

    #[test]
    fn open_and_focus_allocate_strictly_increasing_z() {
        let mut registry = registry();
        registry.open(ABOUT).unwrap();
        registry.open(PROJECTS).unwrap();
        registry.open(RESUME).unwrap();

        for target in [ABOUT, PROJECTS, ABOUT, RESUME] {
            let others_max = registry
                .open_windows()
                .filter(|w| w.id != target)
                .map(|w| w.z_index)
                .max()
                .unwrap();
            registry.focus(target).unwrap();
            assert!(record(&registry, target).z_index > others_max);
            assert_eq!(registry.topmost().map(|w| w.id), Some(target));
        }
    }

    #[test]
    fn reopening_restores_last_committed_position() {
        let mut registry = registry();
        registry.open(ABOUT).unwrap();
        registry.update_position(ABOUT, 50, 60).unwrap();
        registry.close(ABOUT).unwrap();
        registry.open(ABOUT).unwrap();

        let about = record(&registry, ABOUT);
        assert_eq!((about.rect.x, about.rect.y), (50, 60));
    }

    #[test]
    fn maximize_twice_leaves_geometry_unchanged() {
        let mut registry = registry();
        registry.open(RESUME).unwrap();
        registry.update_position(RESUME, 50, 60).unwrap();
        let before = record(&registry, RESUME).rect;

        registry.toggle_maximize(RESUME).unwrap();
        assert!(record(&registry, RESUME).is_maximized);
        registry.toggle_maximize(RESUME).unwrap();

        let resume = record(&registry, RESUME);
        assert!(!resume.is_maximized);
        assert_eq!(resume.rect, before);
    }

    #[test]
    fn minimize_keeps_z_and_skips_closed_windows() {
        let mut registry = registry();
        registry.minimize(ABOUT).unwrap();
        assert!(!record(&registry, ABOUT).is_minimized);

        registry.open(ABOUT).unwrap();
        let z = record(&registry, ABOUT).z_index;
        registry.minimize(ABOUT).unwrap();

        let about = record(&registry, ABOUT);
        assert!(about.is_minimized);
        assert_eq!(about.z_index, z);
        assert_eq!(registry.topmost(), None);
    }

    #[test]
    fn minimizing_a_maximized_window_restores_it_floating() {
        let mut registry = registry();
        registry.open(RESUME).unwrap();
        registry.toggle_maximize(RESUME).unwrap();
        registry.minimize(RESUME).unwrap();
        assert_invariants(&registry);

        registry.focus(RESUME).unwrap();
        let resume = record(&registry, RESUME);
        assert!(resume.is_visible());
        assert!(!resume.is_maximized);
    }

    #[test]
    fn maximize_and_focus_ignore_hidden_windows() {
        let mut registry = registry();
        registry.toggle_maximize(ABOUT).unwrap();
        registry.focus(ABOUT).unwrap();
        assert!(!record(&registry, ABOUT).is_maximized);
        assert_eq!(registry.z_counter(), Z_INDEX_BASELINE);

        registry.open(ABOUT).unwrap();
        registry.minimize(ABOUT).unwrap();
        registry.toggle_maximize(ABOUT).unwrap();
        assert_invariants(&registry);
    }

    #[test]
    fn update_position_is_allowed_while_maximized() {
        let mut registry = registry();
        registry.open(ABOUT).unwrap();
        registry.toggle_maximize(ABOUT).unwrap();
        registry.update_position(ABOUT, 12, 34).unwrap();
        registry.toggle_maximize(ABOUT).unwrap();

        assert_eq!(record(&registry, ABOUT).rect.x, 12);
        assert_eq!(record(&registry, ABOUT).rect.y, 34);
    }

    #[test]
    fn unknown_ids_are_rejected_by_every_operation() {
        let mut registry = registry();
        let ghost = WindowId("ghost");
        let expected = Err(RegistryError::UnknownWindow(ghost));
        assert_eq!(registry.open(ghost), expected);
        assert_eq!(registry.close(ghost), expected);
        assert_eq!(registry.minimize(ghost), expected);
        assert_eq!(registry.toggle_maximize(ghost), expected);
        assert_eq!(registry.focus(ghost), expected);
        assert_eq!(registry.update_position(ghost, 0, 0), expected);
        assert_eq!(registry.z_counter(), Z_INDEX_BASELINE);
    }

    #[test]
    fn exhausted_counter_repacks_stack_without_ties() {
        let mut registry = WindowRegistry::new(window_catalog(), u32::MAX - 1);
        registry.open(ABOUT).unwrap();
        registry.open(PROJECTS).unwrap();
        let about = record(&registry, ABOUT);
        let projects = record(&registry, PROJECTS);
        assert!(projects.z_index > about.z_index);
        assert_eq!(registry.topmost().map(|w| w.id), Some(PROJECTS));

        registry.focus(ABOUT).unwrap();
        assert!(record(&registry, ABOUT).z_index > record(&registry, PROJECTS).z_index);
        assert_eq!(registry.topmost().map(|w| w.id), Some(ABOUT));

        registry.open(RESUME).unwrap();
        let mut z: Vec<u32> = registry.open_windows().map(|w| w.z_index).collect();
        z.sort_unstable();
        z.dedup();
        assert_eq!(z.len(), 3);
        assert_eq!(registry.topmost().map(|w| w.id), Some(RESUME));
    }

    #[test]
    fn invariants_hold_across_mixed_operation_sequences() {
        let mut registry = registry();
        let ids: Vec<WindowId> = window_catalog().iter().map(|e| e.id).collect();
        for step in 0..240usize {
            let id = ids[(step * 7 + step / 3) % ids.len()];
            match step % 6 {
                0 => registry.open(id).unwrap(),
                1 => registry.minimize(id).unwrap(),
                2 => registry.toggle_maximize(id).unwrap(),
                3 => registry.focus(id).unwrap(),
                4 => registry.update_position(id, step as i32, -(step as i32)).unwrap(),
                _ => registry.close(id).unwrap(),
            }
            assert_invariants(&registry);
        }
    }
}

use super::menu::menu_contains;
use crate::enums::{Role, Section};
use crate::shared::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};

/// What the shell renders: the active section plus the two sidebar flags.
///
/// `sidebar_expanded` and `mobile_overlay_open` are independent booleans;
/// small viewports read the overlay, larger ones read the expanded flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub active_section: Section,
    pub sidebar_expanded: bool,
    pub mobile_overlay_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: Section::Dashboard,
            sidebar_expanded: true,
            mobile_overlay_open: false,
        }
    }
}

/// Navigation state bound to the session's role.
///
/// The role never changes after construction, so `active_section` is always
/// a member of `menu_for(role)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationMachine {
    role: Role,
    state: NavigationState,
}

impl NavigationMachine {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            state: NavigationState::default(),
        }
    }

    /// Starts on `section` (deep link). Sections outside the menu are rejected.
    pub fn starting_at(role: Role, section: Section) -> DashboardResult<Self> {
        let mut machine = Self::new(role);
        machine.select_section(section)?;
        Ok(machine)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn active_section(&self) -> Section {
        self.state.active_section
    }

    /// Selects a section by routing id.
    ///
    /// Fails closed: an unknown id leaves the state untouched.
    pub fn select(&mut self, section_id: &str) -> DashboardResult<Section> {
        let section = Section::from_id(section_id).ok_or_else(|| {
            log::warn!("rejected navigation to unknown section '{}'", section_id);
            DashboardError::UnknownSection {
                role: self.role,
                section: section_id.to_string(),
            }
        })?;
        self.select_section(section)
    }

    /// Sets the active section and closes the mobile overlay in one step.
    pub fn select_section(&mut self, section: Section) -> DashboardResult<Section> {
        if !menu_contains(self.role, section) {
            log::warn!("section '{}' is not in the {} menu", section, self.role);
            return Err(DashboardError::UnknownSection {
                role: self.role,
                section: section.id().to_string(),
            });
        }

        log::debug!("navigation: {} -> {}", self.state.active_section, section);
        self.state = NavigationState {
            active_section: section,
            mobile_overlay_open: false,
            ..self.state
        };
        Ok(section)
    }

    /// Returns the new value.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.state.sidebar_expanded = !self.state.sidebar_expanded;
        self.state.sidebar_expanded
    }

    /// Returns the new value.
    pub fn toggle_mobile_overlay(&mut self) -> bool {
        self.state.mobile_overlay_open = !self.state.mobile_overlay_open;
        self.state.mobile_overlay_open
    }

    /// Backdrop click.
    pub fn close_mobile_overlay(&mut self) {
        self.state.mobile_overlay_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let machine = NavigationMachine::new(Role::Wholesaler);
        assert_eq!(
            machine.state(),
            NavigationState {
                active_section: Section::Dashboard,
                sidebar_expanded: true,
                mobile_overlay_open: false,
            }
        );
    }

    #[test]
    fn test_select_closes_overlay_and_is_idempotent() {
        let mut machine = NavigationMachine::new(Role::Manufacturer);
        machine.toggle_mobile_overlay();
        assert!(machine.state().mobile_overlay_open);

        machine.select("orders").unwrap();
        let once = machine.state();
        assert_eq!(once.active_section, Section::Orders);
        assert!(!once.mobile_overlay_open);

        machine.toggle_mobile_overlay();
        machine.select("orders").unwrap();
        assert_eq!(machine.state(), once);
    }

    #[test]
    fn test_unknown_section_fails_closed() {
        let mut machine = NavigationMachine::new(Role::Distributor);
        machine.select("stocks").unwrap();
        machine.toggle_mobile_overlay();
        let before = machine.state();

        let err = machine.select("analytics").unwrap_err();
        assert_eq!(
            err,
            DashboardError::UnknownSection {
                role: Role::Distributor,
                section: "analytics".to_string(),
            }
        );
        assert_eq!(machine.state(), before);
    }

    #[test]
    fn test_section_outside_role_menu_is_rejected() {
        let mut machine = NavigationMachine::new(Role::Retailer);
        assert!(machine.select("buyers").is_err());
        assert_eq!(machine.select("suppliers"), Ok(Section::Suppliers));

        let mut machine = NavigationMachine::new(Role::Manufacturer);
        assert!(machine.select_section(Section::Suppliers).is_err());
        assert_eq!(machine.active_section(), Section::Dashboard);
    }

    #[test]
    fn test_toggles_are_independent_of_section() {
        let mut machine = NavigationMachine::new(Role::Distributor);
        machine.select("sales").unwrap();
        assert!(!machine.toggle_sidebar());
        assert!(machine.toggle_mobile_overlay());

        let state = machine.state();
        assert_eq!(state.active_section, Section::Sales);
        assert!(!state.sidebar_expanded);
        assert!(state.mobile_overlay_open);

        machine.close_mobile_overlay();
        machine.close_mobile_overlay();
        assert!(!machine.state().mobile_overlay_open);
        assert!(machine.toggle_sidebar());
    }

    #[test]
    fn test_distributor_discounts_scenario() {
        let mut machine = NavigationMachine::new(Role::Distributor);
        assert!(machine.state().sidebar_expanded);
        machine.select("discounts").unwrap();
        let state = machine.state();
        assert_eq!(state.active_section, Section::Discounts);
        assert!(!state.mobile_overlay_open);
    }

    #[test]
    fn test_starting_at() {
        let machine = NavigationMachine::starting_at(Role::Retailer, Section::QrScanner).unwrap();
        assert_eq!(machine.active_section(), Section::QrScanner);
        assert!(NavigationMachine::starting_at(Role::Retailer, Section::Buyers).is_err());
    }
}

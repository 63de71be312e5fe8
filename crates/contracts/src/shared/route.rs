use crate::enums::{Role, Section};
use crate::shared::navigation::menu::menu_contains;
use std::fmt;

/// Top-level page addressed by the browser path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Profile,
    Dashboard { role: Role, section: Section },
}

impl Route {
    pub fn dashboard(role: Role) -> Self {
        Route::Dashboard {
            role,
            section: Section::Dashboard,
        }
    }

    /// Unknown paths map to the landing page. A section outside the role's
    /// menu lands on that role's dashboard.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Landing,
            ["profile"] => Route::Profile,
            [role] => match Role::from_code(role) {
                Some(role) => Route::dashboard(role),
                None => Route::Landing,
            },
            [role, segment] => {
                let Some(role) = Role::from_code(role) else {
                    return Route::Landing;
                };
                match Section::from_path_segment(segment) {
                    Some(section) if menu_contains(role, section) => {
                        Route::Dashboard { role, section }
                    }
                    _ => {
                        log::warn!("no section '{}' for {}, using dashboard", segment, role);
                        Route::dashboard(role)
                    }
                }
            }
            _ => Route::Landing,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Dashboard { role, section } => {
                format!("/{}/{}", role.code(), section.path_segment())
            }
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Route::Dashboard { role, .. } => Some(*role),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Landing);
        assert_eq!(Route::from_path("/profile"), Route::Profile);
        assert_eq!(
            Route::from_path("/distributor/dashboard"),
            Route::dashboard(Role::Distributor)
        );
        assert_eq!(
            Route::from_path("/retailer/qr?order=ORD-1"),
            Route::Dashboard {
                role: Role::Retailer,
                section: Section::QrScanner
            }
        );
        assert_eq!(Route::from_path("/wholesaler"), Route::dashboard(Role::Wholesaler));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::from_path("/admin/dashboard"), Route::Landing);
        assert_eq!(Route::from_path("/a/b/c"), Route::Landing);
        assert_eq!(
            Route::from_path("/retailer/buyers"),
            Route::dashboard(Role::Retailer)
        );
    }

    #[test]
    fn test_to_path() {
        let route = Route::Dashboard {
            role: Role::Manufacturer,
            section: Section::CustomerService,
        };
        assert_eq!(route.to_path(), "/manufacturer/support");
        assert_eq!(Route::from_path(&route.to_path()), route);
        assert_eq!(Route::Landing.role(), None);
        assert_eq!(route.role(), Some(Role::Manufacturer));
    }
}

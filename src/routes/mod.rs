//! Navigation table shared by the sidebar and the router shell.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Authenticated back-office shell.
    Admin,
    /// Sign-in / registration shell.
    Auth,
}

impl Layout {
    pub fn prefix(self) -> &'static str {
        match self {
            Layout::Admin => "/admin",
            Layout::Auth => "/auth",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "/admin" => Some(Layout::Admin),
            "/auth" => Some(Layout::Auth),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Users,
    Event,
    ProjectScreen,
    BarChart,
    EventNote,
    Lock,
    Person,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Users,
    Events,
    Portfolio,
    Offers,
    Applications,
    PortfolioManagement,
    EventManagement,
    OfferManagement,
    SignIn,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub name: &'static str,
    pub layout: Layout,
    pub path: &'static str,
    pub icon: Icon,
    pub view: View,
    pub secondary: bool,
}

impl RouteEntry {
    const fn new(
        name: &'static str,
        layout: Layout,
        path: &'static str,
        icon: Icon,
        view: View,
    ) -> Self {
        Self {
            name,
            layout,
            path,
            icon,
            view,
            secondary: false,
        }
    }

    pub fn full_path(&self) -> String {
        format!("{}/{}", self.layout.prefix(), self.path)
    }
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.full_path())
    }
}

/// Display order is the sidebar order.
pub static ROUTES: &[RouteEntry] = &[
    RouteEntry::new("Dashboard", Layout::Admin, "default", Icon::Home, View::Dashboard),
    RouteEntry {
        secondary: true,
        ..RouteEntry::new("Utilisateurs", Layout::Admin, "Utilisateurs", Icon::Users, View::Users)
    },
    RouteEntry::new("Actualités", Layout::Admin, "Event", Icon::Event, View::Events),
    RouteEntry::new(
        "Portfolio",
        Layout::Admin,
        "portfolioList",
        Icon::ProjectScreen,
        View::Portfolio,
    ),
    RouteEntry::new("Offres", Layout::Admin, "offreList", Icon::ProjectScreen, View::Offers),
    RouteEntry::new(
        "Postulations",
        Layout::Admin,
        "postulationList",
        Icon::ProjectScreen,
        View::Applications,
    ),
    RouteEntry::new(
        "Gestion portfolio",
        Layout::Admin,
        "RTLDefault",
        Icon::BarChart,
        View::PortfolioManagement,
    ),
    RouteEntry::new(
        "Gestion D'actualités",
        Layout::Admin,
        "data-tables",
        Icon::EventNote,
        View::EventManagement,
    ),
    RouteEntry::new(
        "Gestion D'offres",
        Layout::Admin,
        "gestion-offres",
        Icon::EventNote,
        View::OfferManagement,
    ),
    RouteEntry::new("Se déconnecter", Layout::Auth, "sign-in", Icon::Lock, View::SignIn),
    RouteEntry::new("S'inscrire", Layout::Auth, "register", Icon::Person, View::Register),
];

pub fn routes() -> &'static [RouteEntry] {
    ROUTES
}

pub fn routes_for(layout: Layout) -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES.iter().filter(move |r| r.layout == layout)
}

/// Every entry, in order, as the sidebar lists them.
pub fn sidebar_links() -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES.iter()
}

/// Resolves `/admin/offreList` (trailing slash tolerated) to its entry.
pub fn resolve(full_path: &str) -> Option<&'static RouteEntry> {
    let trimmed = full_path.trim_end_matches('/');
    let rest = trimmed.strip_prefix('/')?;
    let (prefix, path) = rest.split_once('/')?;
    let layout = Layout::from_prefix(&format!("/{}", prefix))?;
    ROUTES
        .iter()
        .find(|r| r.layout == layout && r.path == path)
}

pub fn route_for(view: View) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|r| r.view == view)
}

/// Target of the "Ajouter une offre" button on the offers list.
pub fn add_offer_path() -> String {
    route_for(View::OfferManagement)
        .map(RouteEntry::full_path)
        .unwrap_or_else(|| "/admin/gestion-offres".to_string())
}

/// Where the shell lands when no path is given.
pub fn default_route() -> &'static RouteEntry {
    &ROUTES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_sidebar_order() {
        let names: Vec<&str> = sidebar_links().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "Dashboard",
                "Utilisateurs",
                "Actualités",
                "Portfolio",
                "Offres",
                "Postulations",
                "Gestion portfolio",
                "Gestion D'actualités",
                "Gestion D'offres",
                "Se déconnecter",
                "S'inscrire",
            ]
        );
    }

    #[test]
    fn layouts_split_admin_and_auth() {
        assert_eq!(routes_for(Layout::Admin).count(), 9);
        let auth: Vec<String> = routes_for(Layout::Auth).map(|r| r.full_path()).collect();
        assert_eq!(auth, vec!["/auth/sign-in", "/auth/register"]);
    }

    #[test]
    fn resolves_full_paths() {
        assert_eq!(resolve("/admin/offreList").map(|r| r.view), Some(View::Offers));
        assert_eq!(
            resolve("/admin/postulationList/").map(|r| r.view),
            Some(View::Applications)
        );
        assert!(resolve("/auth/offreList").is_none());
        assert!(resolve("/admin").is_none());
        assert!(resolve("admin/offreList").is_none());
    }

    #[test]
    fn only_users_entry_is_secondary() {
        let secondary: Vec<&str> = routes().iter().filter(|r| r.secondary).map(|r| r.name).collect();
        assert_eq!(secondary, vec!["Utilisateurs"]);
    }

    #[test]
    fn add_offer_goes_to_management_screen() {
        assert_eq!(add_offer_path(), "/admin/gestion-offres");
        assert_eq!(default_route().full_path(), "/admin/default");
    }
}

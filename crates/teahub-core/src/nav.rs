//! Site navigation: section anchors and the mobile menu.

/// A link to an in-page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub const fn new(name: &'static str, href: &'static str) -> Self {
        Self { name, href }
    }

    /// Element id the link points at, without the leading `#`. `None` for
    /// links that leave the page.
    pub fn anchor_id(&self) -> Option<&'static str> {
        self.href.strip_prefix('#')
    }
}

/// Header navigation, in display order.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink::new("Home", "#hero"),
    NavLink::new("About", "#about"),
    NavLink::new("Flavours", "#flavours"),
    NavLink::new("Reviews", "#reviews"),
    NavLink::new("Contact", "#contact"),
];

/// Footer "Quick Links" column.
pub const QUICK_LINKS: [NavLink; 4] = [
    NavLink::new("Home", "#hero"),
    NavLink::new("About Us", "#about"),
    NavLink::new("Our Teas", "#flavours"),
    NavLink::new("Reviews", "#reviews"),
];

/// Footer "Our Teas" column. All of them land on the catalog.
pub const TEA_CATEGORY_LINKS: [NavLink; 4] = [
    NavLink::new("Classic Black", "#flavours"),
    NavLink::new("Premium Blends", "#flavours"),
    NavLink::new("Masala Chai", "#flavours"),
    NavLink::new("Herbal & Green", "#flavours"),
];

pub const LEGAL_LINKS: [NavLink; 4] = [
    NavLink::new("Privacy Policy", "/privacy"),
    NavLink::new("Terms of Service", "/terms"),
    NavLink::new("Shipping Info", "/shipping"),
    NavLink::new("Returns", "/returns"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id() {
        assert_eq!(NAV_LINKS[0].anchor_id(), Some("hero"));
        assert_eq!(NAV_LINKS[2].anchor_id(), Some("flavours"));
        assert!(TEA_CATEGORY_LINKS.iter().all(|l| l.anchor_id() == Some("flavours")));
        assert_eq!(LEGAL_LINKS[0].anchor_id(), None);
    }

    #[test]
    fn test_nav_order() {
        let names: Vec<_> = NAV_LINKS.iter().map(|l| l.name).collect();
        assert_eq!(names, ["Home", "About", "Flavours", "Reviews", "Contact"]);
    }

    #[test]
    fn test_mobile_menu() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}

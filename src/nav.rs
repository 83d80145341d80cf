use crate::sink::Element;

const EXPANDED: &str = "aria-expanded";
const SHOW: &str = "show";

/// Hamburger button plus the navigation it opens.
pub struct MobileNav<'a> {
    button: &'a mut Element,
    nav: &'a mut Element,
}

impl<'a> MobileNav<'a> {
    /// Both parts have to be on the page for the toggle to do anything.
    pub fn new(button: Option<&'a mut Element>, nav: Option<&'a mut Element>) -> Option<Self> {
        Some(Self {
            button: button?,
            nav: nav?,
        })
    }

    pub fn is_expanded(&self) -> bool {
        self.button.attribute(EXPANDED) == Some("true")
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.button.set_attribute(EXPANDED, expanded.to_string());
        if expanded {
            self.nav.add_class(SHOW);
        } else {
            self.nav.remove_class(SHOW);
        }
    }

    pub fn click_button(&mut self) {
        let expanded = self.is_expanded();
        self.set_expanded(!expanded);
    }

    /// Following a nav link closes the menu.
    pub fn click_link(&mut self) {
        self.set_expanded(false);
    }
}

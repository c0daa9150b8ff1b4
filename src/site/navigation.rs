#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Portfolio,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Home,
        Self::Services,
        Self::Portfolio,
        Self::About,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Portfolio => "Portfolio",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    // Accepts both `contact` and `#contact`.
}

/// Something that can bring a section into view. `locate` must not move
/// anything; `scroll_into_view` starts the smooth scroll.
pub trait SectionScroller {
    type Target;

    fn locate(&self, section: Section) -> Option<Self::Target>;
    fn scroll_into_view(&self, target: &Self::Target);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }
}

/// Scrolls to `section` if it exists. A missing anchor is a silent no-op.
/// Returns whether a scroll was started.
pub fn navigate<S: SectionScroller>(scroller: &S, section: Section) -> bool {
    navigate_then(scroller, section, || ())
}

/// Like [`navigate`], but runs `before_scroll` once the target is known to
/// exist and before the scroll starts. The header passes its menu-closing
/// callback here; a missing anchor leaves the menu alone.
pub fn navigate_then<S, F>(scroller: &S, section: Section, before_scroll: F) -> bool
where
    S: SectionScroller,
    F: FnOnce(),
{
    let Some(target) = scroller.locate(section) else {
        return false;
    };

    before_scroll();
    scroller.scroll_into_view(&target);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeDocument {
        present: Vec<Section>,
        scrolled: RefCell<Vec<Section>>,
    }

    impl FakeDocument {
        fn with(present: &[Section]) -> Self {
            Self {
                present: present.to_vec(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionScroller for FakeDocument {
        type Target = Section;

        fn locate(&self, section: Section) -> Option<Section> {
            self.present.contains(&section).then_some(section)
        }

        fn scroll_into_view(&self, target: &Section) {
            self.scrolled.borrow_mut().push(*target);
        }
    }

    #[test]
    fn section_ids_are_the_fixed_anchor_set() {
        let ids: Vec<_> = Section::ALL.into_iter().map(Section::id).collect();
        assert_eq!(ids, ["home", "services", "portfolio", "about", "contact"]);
    }

    #[test]
    fn navigate_scrolls_to_existing_section() {
        let document = FakeDocument::with(&Section::ALL);

        assert!(navigate(&document, Section::Services));
        assert_eq!(*document.scrolled.borrow(), vec![Section::Services]);
    }

    #[test]
    fn missing_section_is_a_silent_no_op() {
        let document = FakeDocument::with(&[Section::Home]);
        let menu = RefCell::new(MobileMenu::default().toggled());

        assert!(!navigate(&document, Section::Contact));
        assert!(!navigate_then(&document, Section::Contact, || {
            *menu.borrow_mut() = MobileMenu::closed();
        }));
        assert!(document.scrolled.borrow().is_empty());
        assert!(menu.borrow().is_open());
    }

    #[test]
    fn menu_is_closed_before_scroll_starts() {
        let document = FakeDocument::with(&Section::ALL);
        let events = RefCell::new(Vec::new());

        let scrolled = navigate_then(&document, Section::About, || {
            events.borrow_mut().push(format!("close with {} scrolls", document.scrolled.borrow().len()));
        });

        assert!(scrolled);
        assert_eq!(*events.borrow(), vec!["close with 0 scrolls".to_string()]);
        assert_eq!(*document.scrolled.borrow(), vec![Section::About]);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert!(menu.toggled().is_open());
        assert!(!menu.toggled().toggled().is_open());
        assert!(!MobileMenu::closed().is_open());
    }
}

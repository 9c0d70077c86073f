use log::debug;

/// The anchored regions of the page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

/// Moves the viewport so a region's top edge meets the viewport's top edge.
pub trait ScrollSurface {
    /// Returns `false` when no region carries `id`.
    fn scroll_to_top_of(&self, id: &str) -> bool;
}

/// Which nav entry is highlighted. Only explicit navigation changes it;
/// manual scrolling does not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSection {
    current: String,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self {
            current: Section::Home.id().to_string(),
        }
    }
}

impl ActiveSection {
    #[cfg(test)]
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.current == id
    }

    /// Sets the active id, then scrolls to it. The id is updated even when
    /// the surface has no such region. Returns whether a scroll happened.
    pub fn navigate_to(&mut self, id: &str, surface: &impl ScrollSurface) -> bool {
        self.current = id.to_string();

        let scrolled = surface.scroll_to_top_of(id);
        if scrolled {
            debug!("navigated to section {id}");
        } else {
            debug!("navigation target {id} not found; scroll skipped");
        }
        scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSurface {
        present: Vec<&'static str>,
        scrolls: RefCell<Vec<String>>,
    }

    impl RecordingSurface {
        fn with_all_sections() -> Self {
            Self {
                present: Section::ALL.iter().map(|section| section.id()).collect(),
                scrolls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollSurface for RecordingSurface {
        fn scroll_to_top_of(&self, id: &str) -> bool {
            if !self.present.iter().any(|present| *present == id) {
                return false;
            }
            self.scrolls.borrow_mut().push(id.to_string());
            true
        }
    }

    #[test]
    fn starts_on_home() {
        let active = ActiveSection::default();

        assert_eq!(active.current(), "home");
        assert!(active.is_active("home"));
    }

    #[test]
    fn clicking_skills_activates_and_scrolls() {
        let surface = RecordingSurface::with_all_sections();
        let mut active = ActiveSection::default();

        assert!(active.navigate_to("skills", &surface));

        assert_eq!(active.current(), "skills");
        assert!(active.is_active("skills"));
        assert!(!active.is_active("home"));
        assert_eq!(*surface.scrolls.borrow(), vec!["skills".to_string()]);
    }

    #[test]
    fn repeated_navigation_scrolls_each_time() {
        let surface = RecordingSurface::with_all_sections();
        let mut active = ActiveSection::default();

        active.navigate_to("projects", &surface);
        active.navigate_to("projects", &surface);

        assert_eq!(active.current(), "projects");
        assert_eq!(surface.scrolls.borrow().len(), 2);
    }

    #[test]
    fn unknown_target_updates_id_without_scrolling() {
        let surface = RecordingSurface::with_all_sections();
        let mut active = ActiveSection::default();

        assert!(!active.navigate_to("blog", &surface));

        assert_eq!(active.current(), "blog");
        assert!(surface.scrolls.borrow().is_empty());
    }

    #[test]
    fn stylesheet_keeps_scroll_target_flush_with_viewport_top() {
        let stylesheet = include_str!("../styles.css");

        assert!(!stylesheet.contains("scroll-padding"));
        assert!(!stylesheet.contains("scroll-margin"));
    }

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("blog"), None);
        assert_eq!(Section::Contact.anchor(), "#contact");
    }
}

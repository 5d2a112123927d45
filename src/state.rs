use crate::portfolio::Section;

/// Scroll offset past which the navigation bar gets its backdrop.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Choose between the dark and light variant of a class string.
    pub fn pick<T>(self, dark: T, light: T) -> T {
        match self {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// Transient page state. Lives for one page load and is only changed through
/// the methods below.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayState {
    menu_open: bool,
    theme: Theme,
    scroll_y: f64,
    pointer: Pointer,
    overlay_open: bool,
    active_prototype: String,
}

impl DisplayState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll_y > SCROLL_THRESHOLD
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn active_prototype(&self) -> &str {
        &self.active_prototype
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn set_scroll(&mut self, y: f64) {
        self.scroll_y = y;
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Pointer { x, y };
    }

    pub fn open_prototype(&mut self, url: &str) {
        self.active_prototype = url.to_string();
        self.overlay_open = true;
    }

    /// Hides the overlay. The last prototype URL is kept.
    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    /// Bookkeeping for a section jump; scrolling itself happens in the view.
    pub fn navigate(&mut self, _section: Section) {
        self.close_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = DisplayState::default();
        assert!(!state.menu_open());
        assert_eq!(state.theme(), Theme::Dark);
        assert!(!state.is_scrolled());
        assert_eq!(state.pointer(), Pointer { x: 0.0, y: 0.0 });
        assert!(!state.overlay_open());
        assert!(state.active_prototype().is_empty());
    }

    #[test]
    fn test_theme_toggle_twice_is_identity() {
        let mut state = DisplayState::default();
        let initial = state.clone();
        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Light);
        state.toggle_theme();
        assert_eq!(state, initial);

        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_theme_pick() {
        assert_eq!(Theme::Dark.pick("bg-slate-950", "bg-slate-50"), "bg-slate-950");
        assert_eq!(Theme::Light.pick("bg-slate-950", "bg-slate-50"), "bg-slate-50");
        assert_eq!(Theme::Light.as_str(), "light");
    }

    #[test]
    fn test_scroll_threshold() {
        let mut state = DisplayState::default();
        state.set_scroll(50.0);
        assert!(!state.is_scrolled());
        state.set_scroll(50.5);
        assert!(state.is_scrolled());
        state.set_scroll(0.0);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_open_and_close_prototype() {
        let url = "https://www.figma.com/proto/XXXXXXXX/Banking-UI?node-id=0-1&scaling=scale-down-width";
        let mut state = DisplayState::default();

        state.open_prototype(url);
        assert!(state.overlay_open());
        assert_eq!(state.active_prototype(), url);

        state.close_overlay();
        assert!(!state.overlay_open());
        assert_eq!(state.active_prototype(), url);

        // closing twice is harmless
        state.close_overlay();
        assert!(!state.overlay_open());
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut state = DisplayState::default();
        state.toggle_menu();
        assert!(state.menu_open());
        state.navigate(Section::Work);
        assert!(!state.menu_open());
        state.navigate(Section::About);
        assert!(!state.menu_open());
    }

    #[test]
    fn test_pointer_tracking() {
        let mut state = DisplayState::default();
        state.set_pointer(320.0, 240.5);
        assert_eq!(state.pointer(), Pointer { x: 320.0, y: 240.5 });
    }
}

use balcony_solar_core::DashboardView;
use crossterm::event::KeyCode;

pub struct DashboardApp {
    pub view: DashboardView,
    pub should_quit: bool,
}

impl DashboardApp {
    pub fn new(view: DashboardView) -> Self {
        Self {
            view,
            should_quit: false,
        }
    }

    /// The page is static; the only thing a key can do is close it.
    pub fn handle_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
        }
    }
}

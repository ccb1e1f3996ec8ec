#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Puzzle,
    TeacherDashboard,
}

/// Which top-level screen is showing. The chosen view is never persisted.
#[derive(Debug, Default)]
pub struct Router {
    current: View,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn start_quest(&mut self) {
        self.go(View::Puzzle);
    }

    pub fn open_dashboard(&mut self) {
        self.go(View::TeacherDashboard);
    }

    pub fn back(&mut self) {
        self.go(View::Home);
    }

    fn go(&mut self, view: View) {
        tracing::debug!(from = ?self.current, to = ?view, "switching view");
        self.current = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_home() {
        assert_eq!(Router::new().current(), View::Home);
    }

    #[test]
    fn test_quest_round_trip() {
        let mut router = Router::new();
        router.start_quest();
        assert_eq!(router.current(), View::Puzzle);
        router.back();
        assert_eq!(router.current(), View::Home);
    }

    #[test]
    fn test_dashboard_and_back() {
        let mut router = Router::new();
        router.open_dashboard();
        assert_eq!(router.current(), View::TeacherDashboard);
        router.back();
        assert_eq!(router.current(), View::Home);
        router.back();
        assert_eq!(router.current(), View::Home);
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Style};
use std::time::{Duration, Instant};

use crate::circuit::{Celebration, CircuitPuzzle, COMPONENTS, SLOTS};
use crate::config::Settings;
use crate::data::Dataset;
use crate::i18n::Language;
use crate::quest::{QuestAction, Subject};
use crate::router::{Router, View};

/// Everything the circuit screen owns. Created when the view is entered
/// and dropped when the student leaves it.
#[derive(Debug, Default)]
pub struct PuzzleScreen {
    pub puzzle: CircuitPuzzle,
    pub palette_cursor: usize,
    pub slot_cursor: usize,
    pub show_hint: bool,
    pub celebration: Option<Celebration>,
}

pub struct App {
    pub data: Dataset,
    pub settings: Settings,
    pub router: Router,
    pub language: Language,
    pub selected_subject: Option<Subject>,
    pub quest_cursor: usize,
    pub puzzle: Option<PuzzleScreen>,
    pub message: String,
    pub message_style: Style,
    pub command_mode: bool,
    pub command_buffer: String,
    pub should_quit: bool,
}

const HOME_MESSAGE: &str = "Pick a region (1-4) to see its quests. t: teacher view  l: language  :q quit";
const PUZZLE_MESSAGE: &str = "Enter picks up a component, ←/→ choose a slot, Enter places it.";

impl App {
    pub fn new(data: Dataset, settings: Settings) -> Self {
        App {
            data,
            language: settings.language,
            settings,
            router: Router::new(),
            selected_subject: None,
            quest_cursor: 0,
            puzzle: None,
            message: HOME_MESSAGE.to_string(),
            message_style: Style::default().fg(Color::Yellow),
            command_mode: false,
            command_buffer: String::new(),
            should_quit: false,
        }
    }

    pub fn view(&self) -> View {
        self.router.current()
    }

    fn say(&mut self, message: impl Into<String>, color: Color) {
        self.message = message.into();
        self.message_style = Style::default().fg(color);
    }

    pub fn enter_puzzle(&mut self) {
        self.puzzle = Some(PuzzleScreen::default());
        self.router.start_quest();
        self.say(PUZZLE_MESSAGE, Color::Yellow);
    }

    pub fn open_dashboard(&mut self) {
        self.router.open_dashboard();
        self.say("Class overview. Esc or b to return.", Color::Yellow);
    }

    pub fn back_home(&mut self) {
        self.puzzle = None;
        self.router.back();
        self.say(HOME_MESSAGE, Color::Yellow);
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        tracing::debug!(language = ?self.language, "language toggled");
    }

    pub fn select_subject(&mut self, subject: Subject) {
        self.selected_subject = Some(subject);
        self.quest_cursor = 0;
        self.say(
            format!("{} {} quests in {}", subject.icon(), subject.name(), subject.region()),
            Color::Cyan,
        );
    }

    pub fn activate_selected_quest(&mut self) {
        let Some(subject) = self.selected_subject else {
            return;
        };
        let Some(quest) = self.data.quests_for(subject).nth(self.quest_cursor) else {
            return;
        };
        let title = quest.title.clone();
        match quest.activate() {
            QuestAction::OpenCircuitPuzzle => self.enter_puzzle(),
            QuestAction::Started => {
                self.say(format!("{} has no interactive lesson yet.", title), Color::Cyan)
            }
            QuestAction::Locked => self.say(
                format!("{} is locked. Complete the previous quest first.", title),
                Color::DarkGray,
            ),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.command_mode {
            self.handle_command_key(key);
            return;
        }
        if key.code == KeyCode::Char(':') && !key.modifiers.contains(KeyModifiers::CONTROL) {
            self.command_mode = true;
            self.command_buffer.clear();
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.view() {
            View::Home => self.handle_home_key(key),
            View::Puzzle => self.handle_puzzle_key(key),
            View::TeacherDashboard => self.handle_dashboard_key(key),
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.command_mode = false;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let command = std::mem::take(&mut self.command_buffer);
                self.command_mode = false;
                self.run_command(&command);
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
                if self.command_buffer.is_empty() {
                    self.command_mode = false;
                }
            }
            KeyCode::Char(c) => self.command_buffer.push(c),
            _ => {}
        }
    }

    fn run_command(&mut self, command: &str) {
        match command {
            "q" | "quit" => self.should_quit = true,
            "home" => self.back_home(),
            "lang" => self.toggle_language(),
            "teacher" => self.open_dashboard(),
            "help" => self.say(
                "Commands: :q (quit), :home, :teacher, :lang (toggle Odia/English)",
                Color::Cyan,
            ),
            "" => {}
            other => self.say(format!("Unknown command: {}", other), Color::Red),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.select_subject(Subject::ALL[index]);
            }
            KeyCode::Left | KeyCode::Right => {
                let len = Subject::ALL.len();
                let current = self
                    .selected_subject
                    .and_then(|s| Subject::ALL.iter().position(|x| *x == s));
                let next = match (current, key.code) {
                    (None, _) => 0,
                    (Some(i), KeyCode::Right) => (i + 1) % len,
                    (Some(i), _) => (i + len - 1) % len,
                };
                self.select_subject(Subject::ALL[next]);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.quest_cursor = self.quest_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self
                    .selected_subject
                    .map(|s| self.data.quests_for(s).count())
                    .unwrap_or(0);
                if self.quest_cursor + 1 < count {
                    self.quest_cursor += 1;
                }
            }
            KeyCode::Enter => self.activate_selected_quest(),
            KeyCode::Char('c') => self.enter_puzzle(),
            KeyCode::Char('t') => self.open_dashboard(),
            KeyCode::Char('l') => self.toggle_language(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_puzzle_key(&mut self, key: KeyEvent) {
        let delay = Duration::from_millis(self.settings.celebration_delay_ms);
        let Some(screen) = self.puzzle.as_mut() else {
            self.back_home();
            return;
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                screen.palette_cursor = screen.palette_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                screen.palette_cursor = (screen.palette_cursor + 1).min(COMPONENTS.len() - 1);
            }
            KeyCode::Left => screen.slot_cursor = screen.slot_cursor.saturating_sub(1),
            KeyCode::Right => screen.slot_cursor = (screen.slot_cursor + 1).min(SLOTS.len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if screen.puzzle.dragged().is_some() {
                    let slot = SLOTS[screen.slot_cursor];
                    screen.puzzle.drop_on_slot(slot.id);
                    if screen.puzzle.take_celebration() {
                        screen.celebration = Some(Celebration::start(Instant::now(), delay));
                    }
                    let (text, color) = if screen.puzzle.is_complete() {
                        (
                            "Circuit Complete! The LED lights up. You've earned 15 EduGems!".to_string(),
                            Color::Green,
                        )
                    } else if screen.puzzle.is_slot_correct(slot.id) {
                        (format!("Correct! {} is in place.", slot.label), Color::Green)
                    } else {
                        (
                            format!("That piece doesn't belong in {}.", slot.label),
                            Color::Red,
                        )
                    };
                    self.say(text, color);
                } else {
                    let component = COMPONENTS[screen.palette_cursor];
                    if screen.puzzle.is_component_placed(component.id) {
                        self.say(format!("{} is already placed.", component.name), Color::DarkGray);
                    } else {
                        screen.puzzle.begin_drag(component.id);
                        self.say(
                            format!("Carrying {} {}. Choose a slot and press Enter.", component.symbol, component.name),
                            Color::Cyan,
                        );
                    }
                }
            }
            KeyCode::Char('h') => screen.show_hint = !screen.show_hint,
            KeyCode::Char('r') => {
                screen.puzzle.reset();
                screen.celebration = None;
                self.say("Board cleared. Start again!", Color::Yellow);
            }
            KeyCode::Esc if screen.puzzle.dragged().is_some() => {
                screen.puzzle.cancel_drag();
                self.say(PUZZLE_MESSAGE, Color::Yellow);
            }
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => self.back_home(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => self.back_home(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// True while an animation needs the screen redrawn without input.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.puzzle
            .as_ref()
            .and_then(|screen| screen.celebration)
            .is_some_and(|c| !c.is_finished(now))
    }
}

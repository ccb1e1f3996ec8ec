mod dashboard;
mod home;
mod puzzle;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::rewards::GemKind;
use crate::router::View;

pub fn draw_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(f.area());

    match app.view() {
        View::Home => home::draw(f, app, chunks[0]),
        View::Puzzle => puzzle::draw(f, app, chunks[0]),
        View::TeacherDashboard => dashboard::draw(f, app, chunks[0]),
    }

    draw_message(f, app, chunks[1]);
}

fn draw_message(f: &mut Frame, app: &App, area: Rect) {
    let (content, style, title) = if app.command_mode {
        (
            format!(":{}", app.command_buffer),
            Style::default().fg(Color::White).bg(Color::DarkGray),
            " Command ",
        )
    } else {
        (app.message.clone(), app.message_style, " Guide ")
    };
    let message = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .style(style);
    f.render_widget(message, area);
}

fn gem_span(kind: GemKind, count: u32) -> Span<'static> {
    Span::styled(format!("◆ {} ", count), Style::default().fg(kind.color()))
}

fn title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Text for a percentage bar drawn with block characters.
fn bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
pub(crate) fn render_to_string(app: &App, width: u16, height: u16) -> String {
    use ratatui::{backend::TestBackend, Terminal};

    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| draw_ui(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer.content.iter().map(|c| c.symbol()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::data::builtin_dataset;

    #[test]
    fn test_bar_widths() {
        assert_eq!(bar(0, 4), "░░░░");
        assert_eq!(bar(50, 4), "██░░");
        assert_eq!(bar(100, 4), "████");
        assert_eq!(bar(250, 4), "████");
    }

    #[test]
    fn test_command_mode_shows_buffer() {
        let mut app = App::new(builtin_dataset().unwrap(), Settings::default());
        app.command_mode = true;
        app.command_buffer = "help".to_string();
        let content = render_to_string(&app, 100, 40);
        assert!(content.contains(":help"));
        assert!(content.contains("Command"));
    }
}

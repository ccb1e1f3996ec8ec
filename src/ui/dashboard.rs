use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{bar, title_style};
use crate::app::App;
use crate::dashboard::{recommendation, StudentRecord, TopicDifficulty};

pub(super) fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" Teacher Dashboard ", title_style()),
        Span::styled(
            "  Class 10 Science · Odisha Board",
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("   "),
        Span::styled("[b] ← Back to Student View", Style::default().fg(Color::Cyan)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, chunks[0]);

    draw_stat_cards(f, app, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);
    draw_students(f, &app.data.students, body[0]);
    draw_topics(f, &app.data.topics, body[1]);

    let advice = recommendation(&app.data.topics).unwrap_or_default();
    let insight = Paragraph::new(advice)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" 💡 Teaching Insight "));
    f.render_widget(insight, chunks[3]);
}

fn draw_stat_cards(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.data.class;
    let cards = [
        ("Total Students", stats.total_students.to_string(), Color::Blue),
        ("Active Today", stats.active_today.to_string(), Color::Green),
        ("Avg Progress", format!("{}%", stats.average_progress), Color::Yellow),
        ("Need Help", stats.struggling_students.to_string(), Color::Red),
    ];
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value, color), card_area) in cards.into_iter().zip(areas.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
        ])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(card, *card_area);
    }
}

fn draw_students(f: &mut Frame, students: &[StudentRecord], area: Rect) {
    let lines: Vec<Line> = students
        .iter()
        .map(|student| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", student.initial()),
                    Style::default().fg(Color::Black).bg(Color::Yellow),
                ),
                Span::raw(format!(" {:<15}", student.name)),
                Span::styled(
                    format!(" {:<10}", student.status.label()),
                    Style::default().fg(student.status.color()),
                ),
                Span::raw(format!(" {:>3}% ", student.progress)),
                Span::styled(bar(student.progress, 10), Style::default().fg(Color::Cyan)),
                Span::raw(format!("  ◆ {:<4}", student.gems)),
                Span::styled(
                    student.last_active.clone(),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Student Progress ({} students) ", students.len())),
    );
    f.render_widget(list, area);
}

fn draw_topics(f: &mut Frame, topics: &[TopicDifficulty], area: Rect) {
    let mut lines = Vec::new();
    for topic in topics {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", topic.topic),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({})", topic.subject.name()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!("  {}%", topic.difficulty)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(bar(topic.difficulty, 24), Style::default().fg(topic.band().color())),
            Span::styled(
                format!("  {} students struggling", topic.struggling_count),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let block = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Topic Difficulty (Most Challenging) "),
    );
    f.render_widget(block, area);
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::Settings;
    use crate::data::builtin_dataset;
    use crate::ui::render_to_string;

    #[test]
    fn test_dashboard_renders_class_data() {
        let mut app = App::new(builtin_dataset().unwrap(), Settings::default());
        app.open_dashboard();
        let content = render_to_string(&app, 160, 40);
        assert!(content.contains("Teacher Dashboard"));
        assert!(content.contains("Total Students"));
        assert!(content.contains("73%"));
        assert!(content.contains("6 students"));
        assert!(content.contains("Priya Singh"));
        assert!(content.contains("needs help"));
        assert!(content.contains("12 students struggling"));
        assert!(content.contains("Electric Circuits and Organic Chemistry"));
    }
}

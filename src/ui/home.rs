use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::{bar, gem_span, title_style};
use crate::app::App;
use crate::progress::MonumentProgress;
use crate::quest::{Quest, Subject};

pub(super) fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(10)])
        .split(area);

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(5)])
        .split(body[0]);

    draw_map(f, app, main[0]);
    draw_quests(f, app, main[1]);
    draw_sidebar(f, app, body[1]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let student = &app.data.student;
    let lang = app.language;
    let (toggle_main, toggle_alt) = lang.toggle_label();

    let mut spans = vec![
        Span::styled(
            " KONARK QUEST ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} {} ", lang.t("Level", Some("ସ୍ତର")), student.level),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!("🔥 {} day streak  ", student.streak_days),
            Style::default().fg(Color::LightRed),
        ),
    ];
    spans.extend(student.gems.iter().map(|(kind, count)| gem_span(kind, count)));
    spans.push(Span::styled(
        format!("Total: {}  ", student.gems.total()),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let toggle_style = if lang.is_odia() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    spans.push(Span::styled(
        format!("[l] {} {} ", toggle_main, toggle_alt),
        toggle_style,
    ));
    spans.push(Span::styled(
        "[t] Teacher View",
        Style::default().fg(Color::DarkGray),
    ));

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn draw_map(f: &mut Frame, app: &App, area: Rect) {
    let lang = app.language;
    let welcome = format!(
        "{}, {}! Complete quests, collect EduGems, and rebuild magnificent monuments!",
        lang.t("Welcome back", Some("ପୁଣି ସ୍ୱାଗତ")),
        app.data.student.name
    );

    let mut lines = vec![Line::from(welcome), Line::from("")];
    let regions: Vec<Span> = Subject::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, subject)| {
            let selected = app.selected_subject == Some(*subject);
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(subject.gem().color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(subject.gem().color())
            };
            [
                Span::styled(
                    format!(" {} {} {} ", i + 1, subject.icon(), subject.name()),
                    style,
                ),
                Span::raw("  "),
            ]
        })
        .collect();
    lines.push(Line::from(regions));
    let region_names: Vec<Span> = Subject::ALL
        .iter()
        .map(|subject| {
            Span::styled(
                format!("   {:<17}", subject.region()),
                Style::default().fg(Color::DarkGray),
            )
        })
        .collect();
    lines.push(Line::from(region_names));

    let map = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 🗺  Your Adventure Map "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(map, area);
}

fn draw_quests(f: &mut Frame, app: &App, area: Rect) {
    let Some(subject) = app.selected_subject else {
        let empty = Paragraph::new("Select a region on the map to see its quests.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Quests "));
        f.render_widget(empty, area);
        return;
    };

    let mut lines = Vec::new();
    for (i, quest) in app.data.quests_for(subject).enumerate() {
        lines.extend(quest_card(quest, subject, i == app.quest_cursor));
        lines.push(Line::from(""));
    }

    let quests = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} {} Quests [↑/↓ Enter] ", subject.icon(), subject.name())),
    );
    f.render_widget(quests, area);
}

fn quest_card(quest: &Quest, subject: Subject, selected: bool) -> Vec<Line<'static>> {
    let status = if quest.completed {
        Span::styled("✔ ", Style::default().fg(Color::Green))
    } else if !quest.unlocked {
        Span::styled("🔒 ", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw("  ")
    };
    let title_style = match (selected, quest.unlocked) {
        (true, _) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let stars: String = quest
        .difficulty_stars()
        .iter()
        .map(|filled| if *filled { '★' } else { '☆' })
        .collect();

    let mut lines = vec![Line::from(vec![
        status,
        Span::styled(format!(" {} ", quest.title), title_style),
        Span::raw("  "),
        Span::styled(stars, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("  {}", quest.chapter),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    if quest.shows_progress_bar() {
        lines.push(Line::from(vec![
            Span::raw("    Progress "),
            Span::styled(bar(quest.progress, 20), Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {}%", quest.progress)),
        ]));
    }

    lines.push(Line::from(vec![
        Span::raw("    "),
        gem_span(subject.gem(), quest.gem_reward),
        Span::styled(
            format!("⏱ {}   ", quest.estimated_time),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("[{}]", quest.action_label()),
            if quest.unlocked {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ),
    ]));
    lines
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let student = &app.data.student;
    let monument_rows = (student.monuments.len() as u16 * 6).max(3);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(monument_rows),
            Constraint::Length(11),
            Constraint::Min(3),
        ])
        .split(area);

    let monument_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(6); student.monuments.len()])
        .split(chunks[0]);
    for (monument, area) in student.monuments.iter().zip(monument_areas.iter()) {
        draw_monument(f, monument, *area);
    }

    let completed = app.data.quests.iter().filter(|q| q.quest.completed).count();
    let mut stat_lines = vec![
        Line::from(format!("Level          {}", student.level)),
        Line::from(format!("Streak         {} days 🔥", student.streak_days)),
        Line::from(format!("Quests done    {}/{}", completed, app.data.quests.len())),
        Line::from(format!("EduGems        {}", student.gems.total())),
    ];
    stat_lines.extend(student.gems.iter().map(|(kind, count)| {
        Line::from(vec![
            Span::raw(format!("  {:<13}", kind.label())),
            gem_span(kind, count),
        ])
    }));
    let stats = Paragraph::new(stat_lines)
        .block(Block::default().borders(Borders::ALL).title(" 📊 Your Stats "));
    f.render_widget(stats, chunks[1]);

    let cont = Paragraph::new(vec![
        Line::from("You're making great progress! Keep up the momentum."),
        Line::from(Span::styled(
            "[c] Continue Physics Quest",
            Style::default().fg(Color::Cyan),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(cont, chunks[2]);
}

fn draw_monument(f: &mut Frame, monument: &MonumentProgress, area: Rect) {
    let stage = monument.stage();
    let earned = monument.is_earned();
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        format!(" 🏛  {} Badge {}", monument.name, if earned { "⭐ " } else { "" }),
        if earned {
            title_style()
        } else {
            Style::default().fg(Color::Gray)
        },
    ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let detail = if earned {
        monument.status_text()
    } else {
        format!(
            "{}  ·  {}/{} gems",
            monument.status_text(),
            monument.current_gems,
            monument.total_gems
        )
    };
    f.render_widget(Paragraph::new(detail), rows[0]);
    f.render_widget(
        Paragraph::new(format!("Stage: {}", stage.label))
            .style(Style::default().fg(stage_color(stage.intensity))),
        rows[1],
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(monument.progress.clamp(0.0, 100.0).round() as u16);
    f.render_widget(gauge, rows[2]);
}

fn stage_color(intensity: u8) -> Color {
    match intensity {
        0..=20 => Color::DarkGray,
        21..=40 => Color::Gray,
        41..=60 => Color::White,
        61..=80 => Color::LightYellow,
        _ => Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::Settings;
    use crate::data::builtin_dataset;
    use crate::quest::Subject;
    use crate::ui::render_to_string;

    fn app() -> App {
        App::new(builtin_dataset().unwrap(), Settings::default())
    }

    #[test]
    fn test_home_shows_profile_and_monument() {
        let content = render_to_string(&app(), 140, 45);
        assert!(content.contains("Aarav Kumar"));
        assert!(content.contains("Level 12"));
        assert!(content.contains("Konark Sun Temple Badge"));
        assert!(content.contains("65% Complete"));
        assert!(content.contains("98/150 gems"));
        assert!(content.contains("Walls Rising"));
        assert!(content.contains("Select a region"));
    }

    #[test]
    fn test_selected_subject_lists_quest_cards() {
        let mut app = app();
        app.select_subject(Subject::Physics);
        let content = render_to_string(&app, 140, 45);
        assert!(content.contains("Electric Circuits"));
        assert!(content.contains("Review Quest"));
        assert!(content.contains("Continue Quest"));
        assert!(content.contains("Complete Previous Quest"));
        assert!(content.contains("60%"));
    }

    #[test]
    fn test_language_toggle_changes_labels() {
        let mut app = app();
        let english = render_to_string(&app, 140, 45);
        assert!(english.contains("Welcome back"));
        app.toggle_language();
        let odia = render_to_string(&app, 140, 45);
        assert!(!odia.contains("Welcome back"));
        assert!(odia.contains("English"));
    }
}

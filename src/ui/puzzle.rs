use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

use super::title_style;
use crate::app::{App, PuzzleScreen};
use crate::circuit::{celebration::CELEBRATION_GEMS, CIRCUIT_REWARD, COMPONENTS, HINT, SLOTS};
use crate::rewards::GemKind;

pub(super) fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(screen) = app.puzzle.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if screen.show_hint { 9 } else { 6 }),
            Constraint::Min(12),
        ])
        .split(area);

    draw_header(f, screen, chunks[0]);
    draw_objective(f, screen, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);

    draw_board(f, screen, body[0]);
    draw_palette(f, screen, body[1]);
}

fn draw_header(f: &mut Frame, screen: &PuzzleScreen, area: Rect) {
    let puzzle = &screen.puzzle;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(12), Constraint::Length(30)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" ← [b] Back to Map ", Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled("Electric Circuits", title_style()),
        Span::styled(
            "  Physics Quest • Chapter 3",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, cols[0]);

    let gems = Paragraph::new(Line::from(vec![
        Span::styled("◆ ", Style::default().fg(GemKind::Ruby.color())),
        Span::styled(
            format!("{}/{}", puzzle.reward_granted(), CIRCUIT_REWARD),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(gems, cols[1]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::BOTTOM))
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .percent(puzzle.completion() as u16)
        .label(format!("{}%", puzzle.completion()));
    f.render_widget(gauge, cols[2]);
}

fn draw_objective(f: &mut Frame, screen: &PuzzleScreen, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("⚡ Build a Complete Circuit", title_style())),
        Line::from(
            "Pick up the components and place them to create a working electric circuit. \
             Connect the battery, resistor, and LED in the correct order to light up the bulb!",
        ),
        Line::from(Span::styled(
            format!(
                "[h] {}   [r] Reset",
                if screen.show_hint { "Hide Hint" } else { "Show Hint" }
            ),
            Style::default().fg(Color::Cyan),
        )),
    ];
    if screen.show_hint {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("💡 Hint: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(HINT),
        ]));
    }

    let objective = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(objective, area);
}

fn draw_board(f: &mut Frame, screen: &PuzzleScreen, area: Rect) {
    let puzzle = &screen.puzzle;
    let block = Block::default().borders(Borders::ALL).title(format!(
        " 🔌 Circuit Builder  {}/{} placed [←/→ choose slot] ",
        puzzle.placements().len(),
        SLOTS.len()
    ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let slot_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, SLOTS.len() as u32); SLOTS.len()])
        .split(rows[0]);

    for (i, (slot, slot_area)) in SLOTS.iter().zip(slot_areas.iter()).enumerate() {
        let component = puzzle.component_in_slot(slot.id);
        let correct = puzzle.is_slot_correct(slot.id);
        let border = match (component, correct) {
            (None, _) => Color::DarkGray,
            (Some(_), true) => Color::Green,
            (Some(_), false) => Color::Red,
        };
        let mut block_style = Style::default().fg(border);
        if i == screen.slot_cursor {
            block_style = block_style.add_modifier(Modifier::BOLD);
        }
        let marker = if i == screen.slot_cursor { "▼" } else { " " };
        let body = match component {
            Some(c) if correct => format!("{} ✔", c.symbol),
            Some(c) => c.symbol.to_string(),
            None => slot.label.to_string(),
        };
        let cell = Paragraph::new(vec![Line::from(""), Line::from(body)])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(block_style)
                    .title(format!("{}{}", marker, i + 1)),
            );
        f.render_widget(cell, *slot_area);
    }

    let wire = Paragraph::new("╌".repeat(rows[1].width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(wire, rows[1]);

    if puzzle.is_complete() {
        draw_success(f, screen, rows[2]);
    }
}

fn draw_success(f: &mut Frame, screen: &PuzzleScreen, area: Rect) {
    let lit = screen
        .celebration
        .map(|c| c.lit_gems(Instant::now()))
        .unwrap_or(CELEBRATION_GEMS);
    let gems: Vec<Span> = (0..CELEBRATION_GEMS)
        .map(|i| {
            if i < lit {
                Span::styled(" ◆ ", Style::default().fg(GemKind::Ruby.color()))
            } else {
                Span::styled(" ◇ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let success = Paragraph::new(vec![
        Line::from(Span::styled(
            "🎉 Circuit Complete!",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Excellent work! The current flows perfectly through your circuit, \
             lighting up the LED. You've earned {} EduGems!",
            CIRCUIT_REWARD
        )),
        Line::from(gems),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(success, area);
}

fn draw_palette(f: &mut Frame, screen: &PuzzleScreen, area: Rect) {
    let puzzle = &screen.puzzle;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6)])
        .split(area);

    let items: Vec<ListItem> = COMPONENTS
        .iter()
        .enumerate()
        .map(|(i, component)| {
            let placed = puzzle.is_component_placed(component.id);
            let carrying = puzzle.dragged() == Some(component.id);
            let status = if carrying {
                "Carrying"
            } else if placed {
                "Placed"
            } else {
                "Pick up to place"
            };
            let mut style = if placed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            if i == screen.palette_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {} ", component.symbol)),
                Span::styled(format!("{:<10}", component.name), style),
                Span::styled(status, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let palette = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 🔧 Components [↑/↓ Enter] "),
    );
    f.render_widget(palette, chunks[0]);

    let note = Paragraph::new(
        "In a series circuit, current flows through each component one after another. \
         If one component fails, the entire circuit stops working!",
    )
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(Color::Gray))
    .block(Block::default().borders(Borders::ALL).title(" 📚 Did you know? "));
    f.render_widget(note, chunks[1]);
}

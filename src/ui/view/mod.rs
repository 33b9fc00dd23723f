//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::input::preset_key_name;
use super::state::{App, AppMode, Field};
use components::{render_dialog_framework, render_input_widget, result_line};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(12),   // 表单 + 结果
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_form(frame, app, body[0]);
    render_result(frame, app, body[1]);
    render_help(frame, app, chunks[2]);

    if app.mode == AppMode::Help {
        render_help_dialog(frame);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Simple Interest Calculator",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Formula: (P × R × T) / 100",
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("Input").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    for (i, field) in Field::ALL.into_iter().enumerate() {
        render_input_widget(
            frame,
            chunks[i],
            field.label(),
            app.field(field),
            app.mode == AppMode::Editing && app.focus == field,
            Color::Yellow,
        );
    }

    frame.render_widget(
        Paragraph::new("All fields auto-calc as you type").style(Style::default().fg(Color::Gray)),
        chunks[3],
    );
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let result = app.result();

    let mut lines = vec![
        result_line(
            "Interest (Simple)",
            app.formatter.format(result.interest_amount),
            result.interest_amount < 0.0,
        ),
        result_line(
            "Total Amount (P + Interest)",
            app.formatter.format(result.total_amount),
            result.total_amount < 0.0,
        ),
        Line::default(),
        Line::styled(
            "Note: this is simple interest, not compound interest.",
            Style::default().fg(Color::Gray),
        ),
        Line::styled(
            "For compound interest, use P × (1 + R/100)^T − P.",
            Style::default().fg(Color::Gray),
        ),
        Line::default(),
        Line::from(vec![
            Span::styled("[F5] ", Style::default().fg(Color::Cyan)),
            Span::raw(format!(
                "Reset to Example: {}",
                app.preset_label(&app.config.example)
            )),
        ]),
    ];

    for (i, preset) in app.config.presets.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", preset_key_name(i)),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!("Try: {}", app.preset_label(preset))),
        ]));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().title("Result").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::Editing => "[Tab/↑/↓] Field  [Del] Clear  [F5] Example  [F6+] Presets  [F1] Help  [Esc] Quit",
        AppMode::Help => "[any key] Close help",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_help_dialog(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    let inner = render_dialog_framework(frame, area, "Help");

    let bindings = [
        ("Type", "Edit the focused field"),
        ("Backspace", "Delete last character"),
        ("Delete", "Clear the focused field"),
        ("Tab / ↓ / Enter", "Next field"),
        ("Shift-Tab / ↑", "Previous field"),
        ("F5", "Reset to example"),
        ("F6 … F12", "Apply preset"),
        ("F1", "Toggle this help"),
        ("Esc / Ctrl-C", "Quit"),
    ];

    let mut lines: Vec<Line> = bindings
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{:<18}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*desc),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(
        "Empty or non-numeric input counts as 0.",
        Style::default().fg(Color::Gray),
    ));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

//! 通用 UI 组件
//!
//! 弹窗框架、输入框、结果行

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带有标题和样式的输入框，聚焦时显示光标
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let (style, border_style) = if is_focused {
        (
            Style::default()
                .fg(active_color)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(active_color),
        )
    } else {
        (Style::default().fg(Color::Gray), Style::default())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);

    frame.render_widget(Paragraph::new(value).style(style).block(block), area);

    if is_focused && inner.width > 0 {
        frame.set_cursor_position((inner.x + cursor_offset(value, inner.width), inner.y));
    }
}

/// 光标相对输入框内侧的列偏移，按显示宽度计算，不超出输入框
pub fn cursor_offset(value: &str, inner_width: u16) -> u16 {
    let width = u16::try_from(Span::raw(value).width()).unwrap_or(u16::MAX);
    width.min(inner_width.saturating_sub(1))
}

/// [组件] 结果行: 左侧说明，右侧金额
pub fn result_line(label: &str, amount: String, negative: bool) -> Line<'static> {
    let amount_style = if negative {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::styled(format!("{:<30}", label), Style::default().fg(Color::Gray)),
        Span::styled(amount, amount_style),
    ])
}

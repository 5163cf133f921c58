use lengthener_core::{AppViewModel, ResultView};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout;

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let areas = layout::split(frame.area());

    render_header(frame, areas.header);
    render_input(frame, areas.input, view);
    render_submit(frame, areas.submit, view);

    if let Some(message) = &view.error {
        render_error(frame, areas.body, message);
    } else if let Some(result) = &view.result {
        render_result(frame, areas.body, result);
    }

    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        areas.footer,
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ]);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn render_input(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let visible = visible_tail(&view.input, inner_width.saturating_sub(1));

    let content = if view.input.is_empty() {
        Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(visible)
    };
    let border_style = if view.input_enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    frame.render_widget(
        Paragraph::new(Line::from(content)).block(
            Block::bordered()
                .title(INPUT_TITLE)
                .border_style(border_style),
        ),
        area,
    );

    if view.input_enabled && area.width > 2 && area.height > 2 {
        let offset = u16::try_from(visible.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(offset);
        frame.set_cursor_position(Position::new(x.min(area.right() - 2), area.y + 1));
    }
}

fn render_submit(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let line = if view.submit_enabled {
        Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(Color::DarkGray)),
            Span::styled(SUBMIT_LABEL, Style::default().add_modifier(Modifier::BOLD)),
        ])
    } else {
        Line::from(Span::styled(
            PENDING_LABEL,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let red = Style::default().fg(Color::LightRed);
    let line = Line::from(vec![
        Span::styled("Error: ", red.add_modifier(Modifier::BOLD)),
        Span::styled(message, red),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().border_style(red)),
        area,
    );
}

fn render_result(frame: &mut Frame, area: Rect, result: &ResultView) {
    let areas = layout::split_result(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            result.url.as_str(),
            Style::default().fg(Color::LightBlue),
        ))
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title(RESULT_TITLE)),
        areas.url,
    );

    let copy = if result.copied {
        Span::styled(COPIED_LABEL, Style::default().fg(Color::LightGreen))
    } else {
        Span::raw(COPY_LABEL)
    };
    let hint = Style::default().fg(Color::DarkGray);
    let actions = Line::from(vec![
        Span::styled("[Ctrl+Y] ", hint),
        copy,
        Span::raw("   "),
        Span::styled("[Ctrl+O] ", hint),
        Span::raw(VISIT_LABEL),
    ]);
    frame.render_widget(Paragraph::new(actions), areas.actions);

    frame.render_widget(
        Paragraph::new(format!("Length: {} characters", result.char_count))
            .style(Style::default().fg(Color::Gray)),
        areas.length,
    );
}

/// The last `width` characters of `text`, so the cursor end stays visible.
fn visible_tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let skip = count - width;
    match text.char_indices().nth(skip) {
        Some((index, _)) => &text[index..],
        None => "",
    }
}

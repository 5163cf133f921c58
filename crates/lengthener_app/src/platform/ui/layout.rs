use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub input: Rect,
    pub submit: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Regions inside `ScreenLayout::body` while a result is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLayout {
    pub url: Rect,
    pub actions: Rect,
    pub length: Rect,
}

pub fn split(area: Rect) -> ScreenLayout {
    let [header, input, submit, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenLayout {
        header,
        input,
        submit,
        body,
        footer,
    }
}

pub fn split_result(body: Rect) -> ResultLayout {
    let [url, actions, length] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(body);

    ResultLayout {
        url,
        actions,
        length,
    }
}

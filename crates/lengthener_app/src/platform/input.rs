use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lengthener_core::{AppViewModel, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

/// Maps a key press to a message, honoring the controls the view has enabled.
pub fn translate_key(key: KeyEvent, view: &AppViewModel) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('y') if ctrl => match &view.result {
            Some(_) => KeyAction::Dispatch(Msg::CopyClicked),
            None => KeyAction::Ignore,
        },
        KeyCode::Char('o') if ctrl => match &view.result {
            Some(_) => KeyAction::Dispatch(Msg::VisitClicked),
            None => KeyAction::Ignore,
        },
        KeyCode::Char('u') if ctrl => edit(view, |_| String::new()),
        KeyCode::Enter if view.submit_enabled => KeyAction::Dispatch(Msg::SubmitClicked),
        KeyCode::Backspace => edit(view, |text| {
            let mut next = text.to_owned();
            next.pop();
            next
        }),
        KeyCode::Char(ch) if !ctrl => edit(view, |text| format!("{text}{ch}")),
        _ => KeyAction::Ignore,
    }
}

fn edit(view: &AppViewModel, apply: impl FnOnce(&str) -> String) -> KeyAction {
    if !view.input_enabled {
        return KeyAction::Ignore;
    }
    let next = apply(&view.input);
    if next == view.input {
        KeyAction::Ignore
    } else {
        KeyAction::Dispatch(Msg::InputChanged(next))
    }
}

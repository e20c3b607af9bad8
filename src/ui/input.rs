use crate::ui::app::App;
use crate::ui::controls::ControlsIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 's') {
        app.start();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.stop();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reset();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_controls(ControlsIntent::focus_step(true)),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_controls(ControlsIntent::focus_step(false)),
        KeyCode::Enter => app.activate_focused(),
        KeyCode::Backspace => app.dispatch_controls(ControlsIntent::Backspace),
        KeyCode::Char(' ') if !app.controls().focus.is_field() => app.activate_focused(),
        KeyCode::Char(ch) if !has_command_modifier(key.modifiers) => {
            app.dispatch_controls(ControlsIntent::Insert(ch));
        }
        _ => {}
    }
}

fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, target: char) -> bool {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&target))
}

//! Control panel rendering: the three buttons and the two forms.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::timer::selectors::ControlAvailability;
use crate::ui::controls::{Control, ControlsState};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};

/// Width the form labels are padded to.
const LABEL_WIDTH: usize = 16;

pub fn is_enabled(control: Control, gates: &ControlAvailability) -> bool {
    match control {
        Control::Stop => gates.stop,
        Control::Reset => gates.reset,
        Control::Start => gates.start,
        Control::Duration | Control::StartTime => gates.configure,
    }
}

pub fn panel_lines(controls: &ControlsState, gates: &ControlAvailability) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for control in Control::ALL {
        if control == Control::Duration {
            lines.push(Line::from(""));
        }
        lines.push(control_line(controls, control, gates));
    }

    if let Some(notice) = &controls.notice {
        let color = if notice.is_error() {
            STATUS_ERROR
        } else {
            STATUS_OK
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            notice.text().to_string(),
            Style::default().fg(color),
        )));
    }
    lines
}

fn control_line(
    controls: &ControlsState,
    control: Control,
    gates: &ControlAvailability,
) -> Line<'static> {
    let enabled = is_enabled(control, gates);
    let focused = controls.focus == control;

    let mut style = Style::default().fg(HEADER_TEXT);
    if !enabled {
        style = style.add_modifier(Modifier::DIM);
    }

    let line = match controls.field_text(control) {
        None => Line::from(Span::styled(format!("[ {} ]", control.label()), style)),
        Some(text) => {
            let cursor = if focused { "_" } else { "" };
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", control.label(), width = LABEL_WIDTH),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(
                    format!("{text}{cursor}"),
                    Style::default()
                        .fg(HEADER_TEXT)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::raw("  "),
                Span::styled("[ Set ]", style),
            ])
        }
    };

    if focused {
        line.style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
    } else {
        line
    }
}

pub fn panel_widget(controls: &ControlsState, gates: &ControlAvailability) -> Paragraph<'static> {
    Paragraph::new(panel_lines(controls, gates)).block(
        Block::default()
            .title(" Controls ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

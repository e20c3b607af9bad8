use crate::config::DemoVariant;
use crate::timer::CountdownPhase;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_IDLE, STATUS_OK,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    variant: DemoVariant,
    phase: CountdownPhase,
    duration_ms: u64,
}

impl Header {
    pub fn new(variant: DemoVariant, phase: CountdownPhase, duration_ms: u64) -> Self {
        Self {
            variant,
            phase,
            duration_ms,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_color = match self.phase {
            CountdownPhase::Running => STATUS_OK,
            CountdownPhase::Idle | CountdownPhase::Stopped => STATUS_IDLE,
            CountdownPhase::Done => STATUS_ERROR,
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(status_color)),
            Span::styled("  ", text_style),
            Span::styled(self.phase.label(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} variant", self.variant.label()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("tick every {}ms", self.duration_ms), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

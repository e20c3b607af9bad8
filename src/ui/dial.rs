//! Circular countdown display.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::Widget;

use crate::timer::TimerState;
use crate::ui::theme::{faded, palette_color};

/// Share of the available radius the ring occupies.
const RING_FILL: f64 = 0.9;

/// Ring in the palette color for the current value, with the value printed
/// in the middle. Dimmed while the countdown is not running.
pub struct Dial {
    current_time: i64,
    stopped: bool,
}

impl Dial {
    pub fn new(state: &TimerState) -> Self {
        Self {
            current_time: state.current_time,
            stopped: !state.is_running,
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        let color = palette_color(self.current_time);
        if self.stopped {
            faded(color)
        } else {
            color
        }
    }
}

impl Widget for Dial {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Terminal cells are roughly twice as tall as they are wide; scale
        // the y axis so the ring comes out round.
        let half_width = f64::from(area.width) / 2.0;
        let half_height = f64::from(area.height);
        let radius = half_width.min(half_height) * RING_FILL;

        let color = self.color();
        let label = self.current_time.to_string();
        let label_x = -(label.chars().count() as f64) / 2.0;
        let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if self.stopped {
            style = style.add_modifier(Modifier::DIM);
        }

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-half_width, half_width])
            .y_bounds([-half_height, half_height])
            .paint(move |ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius,
                    color,
                });
                ctx.print(label_x, 0.0, Line::styled(label.clone(), style));
            })
            .render(area, buf);
    }
}

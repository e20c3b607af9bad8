use crate::ui::app::App;
use crate::ui::dial::Dial;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::panel::panel_widget;
use crate::ui::theme::GLOBAL_BORDER;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let timer = app.timer();

    let header_widget = Header::new(app.variant(), timer.phase(), timer.duration);
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let (dial_area, panel_area) = body_columns(body);

    let dial_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let dial_inner = dial_block.inner(dial_area);
    frame.render_widget(dial_block, dial_area);
    frame.render_widget(Dial::new(&timer), dial_inner);

    frame.render_widget(panel_widget(app.controls(), &app.availability()), panel_area);

    frame.render_widget(Footer::new().widget(footer), footer);
}

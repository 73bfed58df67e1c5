//! TUI rendering
//!
//! Probar: Visual feedback makes state visible

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Window title
pub const TITLE: &str = " desk-calc ";

/// Key bindings listed in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter number"),
    ("+-*/", "Operator"),
    ("Enter =", "Equals"),
    ("%", "Percent"),
    ("n", "Negate"),
    ("Bksp", "Backspace"),
    ("Esc c", "Clear"),
    ("Mouse", "Click keys"),
    ("q", "Quit"),
];

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Display panel
    pub display: Rect,
    /// Pending-operation line under the display
    pub status: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Help sidebar
    pub help: Rect,
}

impl AppLayout {
    /// Splits the frame area into calculator column and help sidebar
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Min(26), Constraint::Length(24)])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Length(1), // Pending operation
                Constraint::Min(7),    // Keypad
            ])
            .split(columns[0]);

        Self {
            display: rows[0],
            status: rows[1],
            keypad: rows[2],
            help: columns[1],
        }
    }
}

/// Renders the calculator UI and records the keypad area for mouse clicks
pub fn render(app: &mut CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    let layout = AppLayout::new(area);
    app.set_keypad_area(layout.keypad);
    frame.render_widget(CalculatorUI::new(app, layout), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    layout: AppLayout,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp, layout: AppLayout) -> Self {
        Self { app, layout }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.pending_display(),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Right)
        .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        self.render_display(self.layout.display, buf);
        self.render_status(self.layout.status, buf);
        KeypadWidget::new(self.app.keypad()).render(self.layout.keypad, buf);
        self.render_help(self.layout.help, buf);
    }
}

//! Use the tui crate to draw the map directly on the terminal
use super::MapRenderer;
use crate::config::ServiceConfig;
use crate::geo::Bounds;
use crate::map::MapView;
use crate::Error;
use log::warn;
use tui::backend::TestBackend;
use tui::buffer::Buffer;
use tui::style::Color;
use tui::widgets::canvas::{Canvas, Line};
use tui::widgets::{Block, Borders};
use tui::Terminal;

const DEFAULT_WIDTH: u16 = 100;
const DEFAULT_HEIGHT: u16 = 40;

/// Draws the route line and endpoint markers on a terminal canvas
///
/// A zero width or height means "size from the attached terminal".
#[derive(Debug)]
pub struct TerminalMap {
    width: u16,
    height: u16,
}

impl TerminalMap {
    /// Create a renderer with a fixed character cell size
    pub fn new(width: u16, height: u16) -> Self {
        TerminalMap { width, height }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, Error> {
        let mut base = Self::default();
        for key in config.parameters() {
            match key.as_ref() {
                "width" => {
                    if let Some(val) = config.get_parameter_as_i64(key) {
                        base.width = val? as u16
                    };
                }
                "height" => {
                    if let Some(val) = config.get_parameter_as_i64(key) {
                        base.height = val? as u16
                    };
                }
                _ => warn!(
                    "unknown configuration parameter for TerminalMap: {}={:?}",
                    key,
                    config.get_parameter(key)
                ),
            }
        }
        Ok(base)
    }

    fn dimensions(&self) -> (u16, u16) {
        if self.width > 0 && self.height > 0 {
            return (self.width, self.height);
        }
        crossterm::terminal::size().unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
    }
}

impl Default for TerminalMap {
    fn default() -> Self {
        TerminalMap {
            width: 0,
            height: 0,
        }
    }
}

impl MapRenderer for TerminalMap {
    fn render(&self, view: &MapView) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let (width, height) = self.dimensions();
        // pad the frame so markers sitting on the fitted bounds stay visible
        let bounds = view
            .bounds()
            .unwrap_or_else(|| Bounds::around(view.center(), 0.005))
            .padded(0.15);

        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend)?;
        terminal.draw(|f| {
            let canvas = Canvas::default()
                .block(Block::default().borders(Borders::ALL).title("Campus Map"))
                .x_bounds([bounds.west(), bounds.east()])
                .y_bounds([bounds.south(), bounds.north()])
                .paint(|ctx| {
                    if let Some(route) = view.route_line() {
                        for pair in route.windows(2) {
                            ctx.draw(&Line {
                                x1: pair[0].longitude(),
                                y1: pair[0].latitude(),
                                x2: pair[1].longitude(),
                                y2: pair[1].latitude(),
                                color: Color::Blue,
                            });
                        }
                    }
                    // canvas labels must be 'static so the popup text is a
                    // fixed legend rather than the marker's own label
                    if let Some(marker) = view.start_marker() {
                        let text = if marker.popup_open() { "S: Start Point" } else { "S" };
                        ctx.print(
                            marker.location().longitude(),
                            marker.location().latitude(),
                            text,
                            Color::Green,
                        );
                    }
                    if let Some(marker) = view.end_marker() {
                        let text = if marker.popup_open() { "E: End Point" } else { "E" };
                        ctx.print(
                            marker.location().longitude(),
                            marker.location().latitude(),
                            text,
                            Color::Red,
                        );
                    }
                });
            f.render_widget(canvas, f.size());
        })?;

        Ok(buffer_to_text(terminal.backend().buffer()))
    }
}

/// Flatten the drawn cell buffer into newline separated text
fn buffer_to_text(buffer: &Buffer) -> Vec<u8> {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(&buffer.get(x, y).symbol);
        }
        text.push('\n');
    }
    text.into_bytes()
}

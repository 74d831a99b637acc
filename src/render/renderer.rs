use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Cell, EpisodeState, Position, GRID_SIZE};
use crate::metrics::GameMetrics;

/// Read-only renderer for episode state
///
/// Draws a snapshot of the environment and never mutates it; all pacing is
/// handled by the mode event loops.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &EpisodeState,
        metrics: &GameMetrics,
        episode_return: f32,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Grid area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], state, metrics, episode_return);
        frame.render_widget(stats, chunks[0]);

        // Center the grid horizontally
        let grid_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.is_over() {
            let summary = self.render_episode_over(grid_area, state, episode_return);
            frame.render_widget(summary, grid_area);
        } else {
            let grid = self.render_grid(grid_area, state);
            frame.render_widget(grid, grid_area);
        }

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, state: &EpisodeState) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for row in 0..GRID_SIZE {
            let mut spans = Vec::new();

            for col in 0..GRID_SIZE {
                let pos = Position::new(row as i32, col as i32);

                let cell = if pos == state.agent_pos {
                    // Agent, drawn on top of whatever it stands on
                    Span::styled(
                        "■ ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if state.level.cell(row, col) == Cell::Obstacle {
                    Span::styled("█ ", Style::default().fg(Color::DarkGray))
                } else if state.level.targets().contains(&pos) {
                    if state.visited.contains(&pos) {
                        // Covered target, dimmed
                        Span::styled("T ", Style::default().fg(Color::Green).add_modifier(Modifier::DIM))
                    } else {
                        Span::styled(
                            "T ",
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        )
                    }
                } else if state.visited.contains(&pos) {
                    // Visited marker over free space
                    Span::styled("░ ", Style::default().fg(Color::Gray))
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Coverage "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        state: &EpisodeState,
        metrics: &GameMetrics,
        episode_return: f32,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Steps: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}/{}", state.steps, state.max_steps),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Targets: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}/{}", state.covered_targets(), state.level.targets().len()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Return: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{episode_return:.0}"),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_episode_over(
        &self,
        _area: Rect,
        state: &EpisodeState,
        episode_return: f32,
    ) -> Paragraph<'_> {
        let (title, color) = if state.coverage_complete() {
            ("COVERAGE COMPLETE", Color::Green)
        } else {
            ("OUT OF STEPS", Color::Red)
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Episode return: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{episode_return:.0}"),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   in "),
                Span::styled(
                    format!("{} steps", state.steps),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text snapshot of the grid
///
/// One character per cell: `#` obstacle, `T` target, `A` agent, `.` free.
/// The agent is drawn on top of the cell it occupies.
pub fn ascii_snapshot(state: &EpisodeState) -> String {
    let mut lines = Vec::with_capacity(GRID_SIZE);

    for row in 0..GRID_SIZE {
        let mut line = String::with_capacity(GRID_SIZE);

        for col in 0..GRID_SIZE {
            let pos = Position::new(row as i32, col as i32);

            let symbol = if pos == state.agent_pos {
                'A'
            } else if state.level.cell(row, col) == Cell::Obstacle {
                '#'
            } else if state.level.targets().contains(&pos) {
                'T'
            } else {
                '.'
            };

            line.push(symbol);
        }

        lines.push(line);
    }

    lines.join("\n")
}

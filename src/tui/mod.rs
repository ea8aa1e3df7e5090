//! Ratatui-based terminal UI.
//!
//! The TUI provides the single-form estimator: a settings panel for the six
//! employee attributes, a predict action, and the illustrative salary-growth
//! chart. The model and feature list are loaded once before the terminal is
//! taken over; a load failure stops the session from starting at all.

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::{self, Estimate, Outcome};
use crate::cli::TuiArgs;
use crate::curve;
use crate::domain::{FeatureSchema, UserInput, AGE_MAX, AGE_MIN};
use crate::domain::{CompanyTier, Education, Location, Role};
use crate::error::{AppError, EXIT_RUNTIME};
use crate::model::LinearModel;
use crate::report;

mod plotters_chart;

use plotters_chart::SalaryChart;

const FIELD_COUNT: usize = 6;

/// Start the TUI.
///
/// Loading happens before the terminal guard so a missing model or feature
/// list is reported as a normal fatal error, not inside the alternate screen.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    let (model_path, features_path) = crate::io::load::resolve_paths(args.model, args.features);
    let (model, schema) = crate::io::load::load_bundle(&model_path, &features_path)?;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(model, schema);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(EXIT_RUNTIME, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    model: LinearModel,
    schema: FeatureSchema,
    input: UserInput,
    selected_field: usize,
    status: String,
    estimate: Option<Estimate>,
}

impl App {
    fn new(model: LinearModel, schema: FeatureSchema) -> Self {
        Self {
            model,
            schema,
            input: default_input(),
            selected_field: 0,
            status: "Adjust the form, then press Enter to predict.".to_string(),
            estimate: None,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(EXIT_RUNTIME, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < FIELD_COUNT - 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Enter | KeyCode::Char('p') => self.predict(),
            KeyCode::Char('e') => self.export_estimate(),
            _ => {}
        }
        false
    }

    fn adjust_field(&mut self, delta: i32) {
        match self.selected_field {
            0 => {
                let next = if delta >= 0 {
                    self.input.age.saturating_add(1)
                } else {
                    self.input.age.saturating_sub(1)
                };
                self.input.age = next.clamp(AGE_MIN, AGE_MAX);
                self.status = format!("age: {}", self.input.age);
            }
            1 => {
                let next = if delta >= 0 {
                    self.input
                        .experience
                        .saturating_add(1)
                        .min(self.input.max_experience())
                } else {
                    self.input.experience.saturating_sub(1)
                };
                self.input.experience = next;
                self.status = format!("experience: {}y", self.input.experience);
            }
            2 => {
                self.input.education = if delta >= 0 {
                    self.input.education.next()
                } else {
                    self.input.education.prev()
                };
                self.status = format!("education: {}", self.input.education.label());
            }
            3 => {
                self.input.role = if delta >= 0 {
                    self.input.role.next()
                } else {
                    self.input.role.prev()
                };
                self.status = format!("role: {}", self.input.role.label());
            }
            4 => {
                self.input.location = if delta >= 0 {
                    self.input.location.next()
                } else {
                    self.input.location.prev()
                };
                self.status = format!("location: {}", self.input.location.label());
            }
            5 => {
                self.input.company_tier = if delta >= 0 {
                    self.input.company_tier.next()
                } else {
                    self.input.company_tier.prev()
                };
                self.status = format!("company tier: {}", self.input.company_tier.label());
            }
            _ => {}
        }

        // Lowering the age can strand experience above the invariant; surface
        // that immediately instead of waiting for the predict action.
        if let Err(warning) = self.input.validate() {
            self.status = warning.to_string();
        }
    }

    /// Run one predict request. A failure only ends this request, never the
    /// session.
    fn predict(&mut self) {
        match pipeline::run_predict(&self.model, &self.schema, &self.input) {
            Ok(Outcome::Estimate(estimate)) => {
                self.status = format!(
                    "Estimated monthly salary: {}",
                    report::format_currency(estimate.final_salary())
                );
                self.estimate = Some(estimate);
            }
            Ok(Outcome::Invalid(warning)) => {
                self.status = warning.to_string();
            }
            Err(err) => {
                self.status = err.to_string();
            }
        }
    }

    fn export_estimate(&mut self) {
        let Some(estimate) = &self.estimate else {
            self.status = "Nothing to export yet. Predict first.".to_string();
            return;
        };

        let path = Path::new("estimate.json");
        match crate::io::export::write_estimate_json(path, estimate) {
            Ok(()) => self.status = format!("Wrote estimate JSON: {}", path.display()),
            Err(err) => self.status = format!("Export failed: {err}"),
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("pay", Style::default().fg(Color::Cyan)),
            Span::raw(" — employee salary estimator"),
        ]));

        lines.push(Line::from(Span::styled(
            report::format_input_line(&self.input),
            Style::default().fg(Color::Gray),
        )));

        let result = self
            .estimate
            .as_ref()
            .map(|e| {
                format!(
                    "last estimate: {} (raw {:.2}, model {})",
                    report::format_currency(e.final_salary()),
                    e.breakdown.raw_prediction,
                    self.model.name,
                )
            })
            .unwrap_or_else(|| "last estimate: -".to_string());
        lines.push(Line::from(Span::styled(
            result,
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(8)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_settings(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title("Salary growth with experience (illustrative)")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let (curve, marker, x_bounds, y_bounds) = chart_series(self.estimate.as_ref());

        let widget = SalaryChart {
            curve: &curve,
            marker: &marker,
            x_bounds,
            y_bounds,
            x_label: "experience (yrs)",
            y_label: "monthly salary",
            fmt_x: fmt_axis_x,
            fmt_y: fmt_axis_y,
        };

        frame.render_widget(widget, inner);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items = vec![
            ListItem::new(format!("Age: {}", self.input.age)),
            ListItem::new(format!("Experience: {}y", self.input.experience)),
            ListItem::new(format!("Education: {}", self.input.education.label())),
            ListItem::new(format!("Role: {}", self.input.role.label())),
            ListItem::new(format!("Location: {}", self.input.location.label())),
            ListItem::new(format!("Company tier: {}", self.input.company_tier.label())),
        ];

        let list = List::new(items)
            .block(Block::default().title("Inputs").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Enter/p predict  e export  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn default_input() -> UserInput {
    UserInput {
        age: 24,
        experience: 2,
        education: Education::HighSchool,
        role: Role::Developer,
        location: Location::Urban,
        company_tier: CompanyTier::TopTier,
    }
}

/// Build chart series for Plotters.
///
/// The curve is always the static illustrative one; the marker carries the
/// latest estimate when there is one. Bounds cover both so an estimate far
/// above the curve stays visible.
fn chart_series(
    estimate: Option<&Estimate>,
) -> (Vec<(f64, f64)>, Vec<(f64, f64)>, [f64; 2], [f64; 2]) {
    let curve = curve::curve_grid(curve::MAX_EXPERIENCE_YEARS, 200);

    let marker: Vec<(f64, f64)> = estimate
        .map(|e| {
            vec![(
                f64::from(e.input.experience),
                e.breakdown.final_salary as f64,
            )]
        })
        .unwrap_or_default();

    let mut x_max = f64::from(curve::MAX_EXPERIENCE_YEARS);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in &curve {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    for &(x, y) in &marker {
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    let y_bounds = [y_min - pad, y_max + pad];

    (curve, marker, [0.0, x_max], y_bounds)
}

fn fmt_axis_x(v: f64) -> String {
    format!("{v:.0}")
}

fn fmt_axis_y(v: f64) -> String {
    format!("{v:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust;

    #[test]
    fn chart_bounds_cover_an_estimate_above_the_curve() {
        let input = UserInput {
            age: 60,
            experience: 30,
            education: Education::PhD,
            role: Role::Manager,
            location: Location::Urban,
            company_tier: CompanyTier::TopTier,
        };
        let estimate = Estimate {
            input,
            breakdown: adjust::adjust(6000.0, &input),
        };

        let (curve, marker, x_bounds, y_bounds) = chart_series(Some(&estimate));
        assert!(!curve.is_empty());
        assert_eq!(marker.len(), 1);
        // experience 30 stretches the x range past the default 20.
        assert_eq!(x_bounds, [0.0, 30.0]);
        // the adjusted salary (well above the curve) stays inside the y range.
        assert!(y_bounds[1] >= marker[0].1);
        assert!(y_bounds[0] <= 15_000.0);
    }

    #[test]
    fn chart_series_without_estimate_has_no_marker() {
        let (_, marker, x_bounds, _) = chart_series(None);
        assert!(marker.is_empty());
        assert_eq!(x_bounds, [0.0, 20.0]);
    }
}

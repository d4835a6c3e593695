use anyhow::Result;
use chrono::{Datelike, Local};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io;

use crate::records::RecordSet;
use crate::status::{DayStatus, ThresholdPolicy};
use crate::summary::{summarize, EmployeeWeekSummary};
use crate::timefmt::to_hhmm;
use crate::utils::truncate_string;
use crate::week::WeekCursor;

/// Application state
struct App {
    cursor: WeekCursor,
    records: RecordSet,
    policy: ThresholdPolicy,
    summaries: Vec<EmployeeWeekSummary>,
    loading: bool,
    error_message: Option<String>,
}

impl App {
    fn new(records: RecordSet, policy: ThresholdPolicy) -> Self {
        Self {
            cursor: WeekCursor::today(),
            records,
            policy,
            summaries: Vec::new(),
            loading: true,
            error_message: None,
        }
    }

    fn previous_week(&mut self) {
        self.cursor.previous_week();
        self.loading = true;
        self.error_message = None;
    }

    fn next_week(&mut self) {
        self.cursor.next_week();
        self.loading = true;
        self.error_message = None;
    }

    fn go_to_today(&mut self) {
        self.cursor.reset_to_today();
        self.loading = true;
        self.error_message = None;
    }

    /// Rebuild the summaries for the week under the cursor
    fn refresh(&mut self) {
        let window = self.cursor.window();
        match summarize(&window, &self.records, &self.policy) {
            Ok(summaries) => {
                self.summaries = summaries;
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to build summaries: {}", e));
            }
        }
        self.loading = false;
    }
}

/// Render the UI
fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Table
            Constraint::Length(3), // Footer
        ])
        .split(f.size());

    let window = app.cursor.window();

    // Header
    let header_text = if app.loading {
        format!("Loading week: {} ...", window.period_string())
    } else {
        format!("Weekly Working Time - Period: {}", window.period_string())
    };

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Worktime"));
    f.render_widget(header, chunks[0]);

    // Table
    if let Some(error) = &app.error_message {
        let error_widget = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .block(Block::default().borders(Borders::ALL).title("Error"));
        f.render_widget(error_widget, chunks[1]);
    } else if app.loading {
        let loading_widget = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(loading_widget, chunks[1]);
    } else if app.records.is_empty() {
        let empty_widget = Paragraph::new("No records loaded. Pass a records file with -f.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty_widget, chunks[1]);
    } else {
        render_summary_table(f, chunks[1], app);
    }

    // Footer
    let footer = Paragraph::new("← Previous Week | → Next Week | t Today | q Quit")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    f.render_widget(footer, chunks[2]);
}

/// Render the per-employee summary table
fn render_summary_table(f: &mut Frame, area: Rect, app: &App) {
    let window = app.cursor.window();
    let today = Local::now().date_naive();

    // Header: name column, one column per day, total
    let mut header_cells = vec![Cell::from("Name")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))];

    for date in &window.dates {
        let label = crate::utils::day_label(date.weekday());
        let mut style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        if *date == today {
            style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        header_cells.push(Cell::from(format!("{} {:02}", label, date.day())).style(style));
    }

    header_cells.push(
        Cell::from("Total").style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
    );

    let header = Row::new(header_cells).height(1).bottom_margin(1);

    // One row per employee
    let mut rows = Vec::new();
    for summary in &app.summaries {
        let mut cells = vec![Cell::from(truncate_string(&summary.employee_name, 20))];

        for day in &summary.days {
            let style = match day.status {
                DayStatus::MetThreshold => Style::default().fg(Color::Green),
                DayStatus::BelowThreshold => Style::default().fg(Color::Yellow),
                DayStatus::Missing => Style::default().fg(Color::DarkGray),
            };
            cells.push(Cell::from(day.display.clone()).style(style));
        }

        let total_text = to_hhmm(summary.total_hours).unwrap_or_else(|_| "-".to_string());
        cells.push(
            Cell::from(total_text).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        );

        rows.push(Row::new(cells));
    }

    let mut widths = vec![Constraint::Length(22)]; // Name
    widths.extend(std::iter::repeat(Constraint::Length(8)).take(7)); // Days
    widths.push(Constraint::Length(8)); // Total

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Week {} ", window.week_number)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

/// Run the TUI application
pub fn run_tui(records: RecordSet, policy: ThresholdPolicy) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(records, policy);
    app.refresh();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Left => {
                        app.previous_week();
                        app.refresh();
                    }
                    KeyCode::Right => {
                        app.next_week();
                        app.refresh();
                    }
                    KeyCode::Char('t') => {
                        app.go_to_today();
                        app.refresh();
                    }
                    _ => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

// Made with Bob

use std::time::Duration;

use chrono::{Local, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use cubeclock_config::Config;
use cubeclock_core::{CubeView, TimeSample};
use cubeclock_engine::{ClockStateEngine, FrameMotion, MinuteChangeDetector};
use cubeclock_render::{Renderer, Scene, renderer_for};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    text::Line,
    widgets::Paragraph,
};

mod logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    logging::init(&config.log);

    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Precomputed cube states for the day.
    engine: ClockStateEngine,
    /// Tracks which minute was last logged.
    minutes: MinuteChangeDetector,
    /// Current cube view.
    view: CubeView,
    /// Renderer for the current view.
    renderer: Box<dyn Renderer>,
    /// Sweep a highlight across the stickers.
    scan_highlight: bool,
    /// Tilt the cube with the minute.
    rotation: bool,
    /// Read the clock in UTC.
    utc: bool,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> Self {
        Self {
            running: false,
            engine: ClockStateEngine::new(),
            minutes: MinuteChangeDetector::new(),
            view: config.view,
            renderer: renderer_for(config.view),
            scan_highlight: config.scan_highlight,
            rotation: config.rotation,
            utc: config.utc,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(view = self.view.name(), utc = self.utc, "cubeclock started");
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        tracing::info!("cubeclock stopped");
        Ok(())
    }

    /// Read the wall clock once for this frame.
    fn sample_time(&self) -> TimeSample {
        if self.utc {
            TimeSample::from_time(&Utc::now())
        } else {
            TimeSample::from_time(&Local::now())
        }
    }

    /// Log the minute once each time it changes. Returns whether a line was written.
    fn log_minute_change(&mut self, sample: &TimeSample) -> bool {
        let changed = self.minutes.observe(sample.minute);
        if changed {
            tracing::info!(target: "cubeclock::minute", minute = sample.minute, "{}", sample.minute);
        }
        changed
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let sample = self.sample_time();
        self.log_minute_change(&sample);

        let scene = Scene {
            state: self.engine.state_at(sample.hour, sample.minute),
            motion: FrameMotion::from_sample(&sample),
            scan_highlight: self.scan_highlight,
            rotation: self.rotation,
        };

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Cube
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let cube_area = chunks[0];
        let lines = self
            .renderer
            .render(&scene, cube_area.width, cube_area.height);
        frame.render_widget(Paragraph::new(lines), cube_area);

        let key = Color::White;
        let help = Line::from(vec![
            "q".bold().fg(key),
            " quit  ".dark_gray(),
            "v".bold().fg(key),
            " cycle view  ".dark_gray(),
            "g".bold().fg(key),
            " highlight  ".dark_gray(),
            "r".bold().fg(key),
            " rotation".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so the scan keeps moving between key presses.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('v')) => self.cycle_view(),
            (_, KeyCode::Char('g')) => self.toggle_scan_highlight(),
            (_, KeyCode::Char('r')) => self.toggle_rotation(),
            _ => {}
        }
    }

    /// Switch to the next cube view.
    fn cycle_view(&mut self) {
        self.view = self.view.next();
        self.renderer = renderer_for(self.view);
        tracing::debug!(view = self.view.name(), "view changed");
    }

    fn toggle_scan_highlight(&mut self) {
        self.scan_highlight = !self.scan_highlight;
        tracing::debug!(enabled = self.scan_highlight, "scan highlight toggled");
    }

    fn toggle_rotation(&mut self) {
        self.rotation = !self.rotation;
        tracing::debug!(enabled = self.rotation, "rotation toggled");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_keys_update_state() {
        let mut app = App::new(&Config::default());
        app.running = true;

        app.on_key_event(press(KeyCode::Char('v')));
        assert_eq!(app.view, CubeView::Flat);
        app.on_key_event(press(KeyCode::Char('g')));
        assert!(!app.scan_highlight);
        app.on_key_event(press(KeyCode::Char('r')));
        assert!(!app.rotation);

        app.on_key_event(press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new(&Config::default());
        app.running = true;
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_minute_logged_once_across_rollover() {
        let mut app = App::new(&Config::default());
        let frames = [
            TimeSample::new(9, 14, 59, 0.8),
            TimeSample::new(9, 14, 59, 0.9),
            TimeSample::new(9, 15, 0, 0.0),
            TimeSample::new(9, 15, 0, 0.1),
        ];
        let logged: Vec<u32> = frames
            .iter()
            .filter(|sample| app.log_minute_change(sample))
            .map(|sample| sample.minute)
            .collect();
        assert_eq!(logged, vec![14, 15]);
    }
}

// Event handling and main UI loop

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::nav::{Action, Controller, ScreenId};
use crate::ui::state::{AppState, HitTarget};

mod buttons;
mod form;

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub start_screen: ScreenId,
    pub mouse_capture: bool,
    pub tick_rate: Duration,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            start_screen: ScreenId::Welcome,
            mouse_capture: true,
            tick_rate: Duration::from_millis(100),
        }
    }
}

impl UiOptions {
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            mouse_capture: config.ui.mouse_capture,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms.max(10)),
            ..Self::default()
        }
    }
}

// Event types sent from dedicated event thread to main loop
enum UiEvent {
    Input(Event), // Keyboard, mouse, or other terminal events
    Tick,         // Periodic redraw
}

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: mpsc::Sender<UiEvent>, tick_rate: Duration) {
    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break; // Main thread dropped the receiver
                }
                last_tick = Instant::now();
            }
        }
    });
}

pub fn run_ui_with_options(options: UiOptions) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    if options.mouse_capture {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(Controller::starting_at(options.start_screen));
    tracing::info!(screen = %options.start_screen, mouse = options.mouse_capture, "ui started");

    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx, options.tick_rate);

    let result = run_app(&mut terminal, &mut app_state, event_rx);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    if options.mouse_capture {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    tracing::info!(screen = %app_state.current_screen(), "ui stopped");
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    terminal.draw(|frame| crate::ui::render(frame, state))?;

    loop {
        let mut pending_inputs: Vec<Event> = Vec::new();

        // Block for one event, then drain whatever else is queued
        match event_rx.recv() {
            Ok(UiEvent::Input(ev)) => pending_inputs.push(ev),
            Ok(UiEvent::Tick) => {}
            Err(_) => return Ok(()), // Channel closed
        }
        while let Ok(evt) = event_rx.try_recv() {
            if let UiEvent::Input(ev) = evt {
                pending_inputs.push(ev);
            }
        }

        for input in pending_inputs {
            match input {
                Event::Key(key) => {
                    if handle_key(key, state) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(mouse, state),
                _ => {} // Resize just needs the redraw below
            }
        }

        terminal.draw(|frame| crate::ui::render(frame, state))?;
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Apply one key press. Returns true when the app should exit.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if is_ctrl_c(&key) {
        return true;
    }

    if state.quit_confirmation.is_some() {
        return handle_quit_confirmation_key(key, state);
    }

    match state.current_screen() {
        ScreenId::Form => form::handle_form_key(key, state),
        _ => buttons::handle_button_key(key, state),
    }
}

fn handle_quit_confirmation_key(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            tracing::info!("quit confirmed with unsubmitted form");
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.quit_confirmation = None;
            false
        }
        _ => false,
    }
}

pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState) {
    if state.quit_confirmation.is_some() {
        return;
    }

    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        match state.hit_test(mouse.column, mouse.row) {
            Some(HitTarget::Action(action)) => activate(state, action),
            Some(HitTarget::Field(field)) => state.form.focus_field(field),
            None => {}
        }
    }
}

fn activate(state: &mut AppState, action: Action) {
    match state.perform(action) {
        Ok(to) => tracing::info!(%action, screen = %to, "screen changed"),
        Err(e) => tracing::warn!(error = %e, "ignored action"),
    }
}

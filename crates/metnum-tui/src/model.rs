//! TUI application model (Elm architecture).

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, Event, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use metnum_core::form::FieldKind;
use metnum_core::{Feature, FormState};
use metnum_orchestration::{ChartData, ConfigManager, Controllers};

use crate::chart::render_chart;
use crate::fields::{cycle_method, is_editable, FieldValidator, FocusState};
use crate::footer::render_footer;
use crate::form_panel::render_form;
use crate::header::render_header;
use crate::home::render_home;
use crate::keymap::{keyboard_enhancement_flags, map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::navigation::{Navigator, View};
use crate::overlay::render_busy;
use crate::results::{render_results, ResultPanel};
use crate::styles::ColorTheme;
use crate::toast::{render_toasts, ToastQueue};

const PAGE_SIZE: usize = 10;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    pub navigator: Navigator,
    /// Current value of every input.
    pub form: FormState,
    pub focus: FocusState,
    pub validator: FieldValidator,
    /// Result panel per feature view.
    pub results: BTreeMap<Feature, ResultPanel>,
    /// Last interpolation chart.
    pub chart: Option<ChartData>,
    pub toasts: ToastQueue,
    /// Nesting depth of busy show/hide pairs.
    pub busy_depth: usize,
    pub busy_message: String,
    /// Features with a worker still running.
    in_flight: HashSet<Feature>,
    rx: Receiver<TuiMessage>,
    tx: Sender<TuiMessage>,
    controllers: Arc<Controllers>,
    config: Option<ConfigManager>,
    workers: Vec<JoinHandle<()>>,
    tick: u64,
    theme: ColorTheme,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
}

impl TuiApp {
    /// Create a new TUI app.
    ///
    /// `controllers` must report through handles that send to `tx`
    /// (see [`crate::bridge::ui_handles`]).
    #[must_use]
    pub fn new(controllers: Controllers, tx: Sender<TuiMessage>, rx: Receiver<TuiMessage>) -> Self {
        Self {
            should_quit: false,
            navigator: Navigator::new(),
            form: FormState::new(),
            focus: FocusState::default(),
            validator: FieldValidator::new(),
            results: Feature::ALL
                .into_iter()
                .map(|f| (f, ResultPanel::new()))
                .collect(),
            chart: None,
            toasts: ToastQueue::new(),
            busy_depth: 0,
            busy_message: String::new(),
            in_flight: HashSet::new(),
            rx,
            tx,
            controllers: Arc::new(controllers),
            config: None,
            workers: Vec::new(),
            tick: 0,
            theme: ColorTheme::default(),
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Restore saved inputs and save every later edit.
    ///
    /// A store that cannot be read leaves the defaults in place.
    #[must_use]
    pub fn with_config(mut self, config: ConfigManager) -> Self {
        if let Err(err) = config.load_into(&mut self.form) {
            tracing::warn!(error = %err, "could not restore saved inputs");
        }
        self.config = Some(config);
        self
    }

    /// Whether a calculate or compare is running for `feature`.
    #[must_use]
    pub fn is_in_flight(&self, feature: Feature) -> bool {
        self.in_flight.contains(&feature)
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy_depth > 0
    }

    /// Result panel of a feature.
    #[must_use]
    pub fn result(&self, feature: Feature) -> Option<&ResultPanel> {
        self.results.get(&feature)
    }

    /// Block until every worker thread has finished.
    pub fn wait_for_workers(&mut self) {
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                tracing::error!("calculation worker panicked");
            }
        }
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
        self.workers.retain(|h| !h.is_finished());
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Result { feature, text } | TuiMessage::Comparison { feature, text } => {
                if feature == Feature::Interpolation {
                    self.chart = None;
                }
                self.results.entry(feature).or_default().show(&text);
            }
            TuiMessage::Error { feature, message } => {
                if feature == Feature::Interpolation {
                    self.chart = None;
                }
                self.results.entry(feature).or_default().show_error(&message);
            }
            TuiMessage::Chart(chart) => {
                self.chart = Some(chart);
            }
            TuiMessage::Notify { level, message } => {
                self.toasts.push(level, message);
            }
            TuiMessage::BusyShow(message) => {
                self.busy_depth += 1;
                self.busy_message = message;
            }
            TuiMessage::BusyHide => {
                self.busy_depth = self.busy_depth.saturating_sub(1);
            }
            TuiMessage::Finished(feature) => {
                self.in_flight.remove(&feature);
            }
            TuiMessage::Tick => {
                self.tick = self.tick.wrapping_add(1);
                self.toasts.expire(Instant::now());
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        let feature = self.navigator.active().feature();
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::SwitchView(view) => {
                self.blur_focused();
                self.navigator.switch_to(view);
            }
            KeyAction::Calculate | KeyAction::Compare => {
                if let Some(feature) = feature {
                    self.blur_focused();
                    self.spawn(feature, action == KeyAction::Compare);
                }
            }
            KeyAction::FocusNext | KeyAction::FocusPrev => {
                if let Some(feature) = feature {
                    self.blur_focused();
                    self.focus.advance(feature, action == KeyAction::FocusNext);
                }
            }
            KeyAction::Left | KeyAction::Right => {
                self.cycle_focused_method(action == KeyAction::Right);
            }
            KeyAction::Input(c) => match feature {
                None => {
                    if let Some(view) = c
                        .to_digit(10)
                        .and_then(|d| View::ALL.get(d as usize))
                        .filter(|v| **v != View::Home)
                    {
                        self.navigator.switch_to(*view);
                    }
                }
                Some(_) => self.edit_focused(|value| value.push(c)),
            },
            KeyAction::Backspace => self.edit_focused(|value| {
                value.pop();
            }),
            KeyAction::ClearField => self.edit_focused(String::clear),
            KeyAction::PageUp => {
                if let Some(panel) = feature.and_then(|f| self.results.get_mut(&f)) {
                    panel.page_up(PAGE_SIZE);
                }
            }
            KeyAction::PageDown => {
                if let Some(panel) = feature.and_then(|f| self.results.get_mut(&f)) {
                    panel.page_down(PAGE_SIZE);
                }
            }
            KeyAction::None => {}
        }
    }

    /// Run a calculate or compare on a worker thread.
    ///
    /// Ignored while the same feature still has a worker running.
    fn spawn(&mut self, feature: Feature, compare: bool) {
        if !self.in_flight.insert(feature) {
            tracing::debug!(%feature, "operation already running, ignoring");
            return;
        }
        let controllers = Arc::clone(&self.controllers);
        let form = self.form.clone();
        let tx = self.tx.clone();
        let handle = thread::spawn(move || {
            run_operation(&controllers, feature, compare, &form);
            let _ = tx.send(TuiMessage::Finished(feature));
        });
        self.workers.push(handle);
    }

    /// Check the focused field of the active view as it loses focus.
    fn blur_focused(&mut self) {
        let Some(feature) = self.navigator.active().feature() else {
            return;
        };
        if let Some(field) = self.focus.focused(feature) {
            self.validator.on_blur(field, self.form.get(field.id));
        }
    }

    fn cycle_focused_method(&mut self, forward: bool) {
        let Some(feature) = self.navigator.active().feature() else {
            return;
        };
        let Some(field) = self.focus.focused(feature) else {
            return;
        };
        if field.kind != FieldKind::Method {
            return;
        }
        let next = cycle_method(feature, self.form.get(field.id), forward);
        self.form.set(field.id, next);
        self.validator.clear(field.id);
        self.persist();
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(feature) = self.navigator.active().feature() else {
            return;
        };
        let Some(field) = self.focus.focused(feature) else {
            return;
        };
        if !is_editable(field) {
            return;
        }
        let mut value = self.form.get(field.id).to_string();
        edit(&mut value);
        self.form.set(field.id, value);
        self.validator.clear(field.id);
        self.persist();
    }

    /// Save every input; failures only get logged.
    fn persist(&self) {
        if let Some(config) = &self.config {
            if let Err(err) = config.save(&self.form) {
                tracing::warn!(error = %err, "could not save inputs");
            }
        }
    }

    /// Compute the layout.
    ///
    /// Returns (header, body, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // body
                Constraint::Length(2), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2])
    }

    /// Split a feature view body into (form, results) columns.
    #[must_use]
    pub fn compute_feature_layout(body: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(body);

        (chunks[0], chunks[1])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let (header_area, body_area, footer_area) = Self::compute_layout(area);
        let view = self.navigator.active();

        render_header(frame, header_area, view, &self.theme);

        match view.feature() {
            None => render_home(frame, body_area, &self.theme),
            Some(feature) => {
                let (form_area, results_area) = Self::compute_feature_layout(body_area);
                let focused = self.focus.focused(feature).map(|f| f.id);
                render_form(
                    frame,
                    form_area,
                    feature,
                    &self.form,
                    focused,
                    &self.validator,
                    &self.theme,
                );

                let empty = ResultPanel::new();
                let panel = self.results.get(&feature).unwrap_or(&empty);
                match (&self.chart, feature) {
                    (Some(chart), Feature::Interpolation) => {
                        let split = Layout::default()
                            .direction(Direction::Vertical)
                            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                            .split(results_area);
                        render_results(frame, split[0], panel, &self.theme);
                        render_chart(frame, split[1], chart, &self.theme);
                    }
                    _ => render_results(frame, results_area, panel, &self.theme),
                }
            }
        }

        render_footer(frame, footer_area, view, &self.theme);

        if self.is_busy() {
            render_busy(frame, body_area, &self.busy_message, self.tick, &self.theme);
        }
        render_toasts(frame, area, &self.toasts, &self.theme);
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(stdout, PushKeyboardEnhancementFlags(keyboard_enhancement_flags()))?;
        }
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
        }
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update, render),
    /// and tears down on exit. Workers still running at exit are detached.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        let action = map_key(key_event);
                        self.handle_key_action(action);
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }

            self.handle_message(TuiMessage::Tick);
            self.update();
        }
    }
}

/// Body of a worker thread. Outcomes reach the UI through the presenter.
fn run_operation(controllers: &Controllers, feature: Feature, compare: bool, form: &FormState) {
    let outcome = match (feature, compare) {
        (Feature::Interpolation, false) => controllers
            .interpolation
            .calculate(&form.interpolation_form())
            .map(drop),
        (Feature::Interpolation, true) => controllers
            .interpolation
            .compare(&form.interpolation_form())
            .map(drop),
        (Feature::Integration, false) => controllers
            .integration
            .calculate(&form.integration_form())
            .map(drop),
        (Feature::Integration, true) => controllers
            .integration
            .compare(&form.integration_form())
            .map(drop),
        (Feature::Differentiation, false) => controllers
            .differentiation
            .calculate(&form.differentiation_form())
            .map(drop),
        (Feature::Differentiation, true) => controllers
            .differentiation
            .compare(&form.differentiation_form())
            .map(drop),
    };
    if let Err(err) = outcome {
        tracing::debug!(%feature, compare, error = %err, "operation ended with error");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use metnum_client::{ApiClient, HttpMethod, Transport};
    use metnum_core::form::ids;
    use metnum_core::{FormatOptions, RemoteError};
    use metnum_orchestration::{MemoryStore, NotificationLevel, UiHandles};
    use parking_lot::Mutex;
    use ratatui::backend::TestBackend;
    use serde_json::{json, Value};

    use crate::bridge::ui_handles;

    /// Answers every call with a scalar after the gate opens.
    struct Gated {
        gate: Receiver<()>,
        calls: Mutex<usize>,
    }

    impl Transport for Gated {
        fn send(&self, _: &str, _: &Value, _: HttpMethod) -> Result<Value, RemoteError> {
            *self.calls.lock() += 1;
            let _ = self.gate.recv();
            Ok(json!({"success": true, "result": 0.5}))
        }
    }

    struct Refuses;

    impl Transport for Refuses {
        fn send(&self, _: &str, _: &Value, _: HttpMethod) -> Result<Value, RemoteError> {
            Err(RemoteError::Transport("connection refused".into()))
        }
    }

    fn make_app(transport: Arc<dyn Transport>) -> TuiApp {
        let (tx, rx) = unbounded();
        let controllers = Controllers::new(
            ApiClient::new(transport),
            ui_handles(&tx, 6),
            FormatOptions::default(),
        );
        TuiApp::new(controllers, tx, rx)
    }

    fn null_app() -> TuiApp {
        let (tx, rx) = unbounded();
        let controllers = Controllers::new(
            ApiClient::new(Arc::new(Refuses)),
            UiHandles::null(),
            FormatOptions::default(),
        );
        TuiApp::new(controllers, tx, rx)
    }

    fn focus_on(app: &mut TuiApp, feature: Feature, id: &str) {
        for _ in 0..10 {
            if app.focus.focused(feature).map(|f| f.id) == Some(id) {
                return;
            }
            app.handle_key_action(KeyAction::FocusNext);
        }
        panic!("field {id} not reachable");
    }

    #[test]
    fn initial_state() {
        let app = null_app();
        assert!(!app.should_quit);
        assert_eq!(app.navigator.active(), View::Home);
        assert!(!app.is_busy());
        assert!(app.toasts.is_empty());
        assert!(app.result(Feature::Integration).unwrap().is_empty());
    }

    #[test]
    fn home_digits_open_views() {
        let mut app = null_app();
        app.handle_key_action(KeyAction::Input('2'));
        assert_eq!(app.navigator.active(), View::Integration);

        // Digits are input once a feature view is active.
        app.handle_key_action(KeyAction::Input('3'));
        assert_eq!(app.navigator.active(), View::Integration);
    }

    #[test]
    fn home_ignores_other_input() {
        let mut app = null_app();
        app.handle_key_action(KeyAction::Input('0'));
        app.handle_key_action(KeyAction::Input('9'));
        app.handle_key_action(KeyAction::Calculate);
        assert_eq!(app.navigator.active(), View::Home);
        assert!(app.workers.is_empty());
    }

    #[test]
    fn second_calculate_ignored_while_running() {
        let (release, gate) = unbounded();
        let transport = Arc::new(Gated {
            gate,
            calls: Mutex::new(0),
        });
        let mut app = make_app(transport.clone());
        app.handle_key_action(KeyAction::SwitchView(View::Integration));

        app.handle_key_action(KeyAction::Calculate);
        app.handle_key_action(KeyAction::Calculate);
        app.handle_key_action(KeyAction::Compare);
        assert!(app.is_in_flight(Feature::Integration));
        assert_eq!(app.workers.len(), 1);

        release.send(()).unwrap();
        app.wait_for_workers();
        app.update();
        assert!(!app.is_in_flight(Feature::Integration));
        assert_eq!(*transport.calls.lock(), 1);
        assert!(!app.is_busy());
        assert!(app
            .result(Feature::Integration)
            .unwrap()
            .lines()
            .iter()
            .any(|l| l == "Resultado: 0.5"));
        assert!(app
            .toasts
            .iter()
            .any(|t| t.level == NotificationLevel::Success));

        release.send(()).unwrap();
        app.handle_key_action(KeyAction::Calculate);
        app.wait_for_workers();
        assert_eq!(*transport.calls.lock(), 2);
    }

    #[test]
    fn remote_failure_lands_in_panel() {
        let mut app = make_app(Arc::new(Refuses));
        app.handle_key_action(KeyAction::SwitchView(View::Differentiation));
        app.handle_key_action(KeyAction::Calculate);
        app.wait_for_workers();
        app.update();

        let panel = app.result(Feature::Differentiation).unwrap();
        assert!(panel.is_error());
        assert!(panel.lines()[0].contains("connection refused"));
        assert!(app.toasts.iter().any(|t| t.level == NotificationLevel::Error));
    }

    #[test]
    fn leaving_a_field_validates_it() {
        let mut app = null_app();
        app.handle_key_action(KeyAction::SwitchView(View::Integration));
        focus_on(&mut app, Feature::Integration, ids::INTEG_A);
        app.handle_key_action(KeyAction::ClearField);
        app.handle_key_action(KeyAction::Input('x'));
        app.handle_key_action(KeyAction::FocusNext);
        assert!(app.validator.has_error(ids::INTEG_A));

        app.handle_key_action(KeyAction::FocusPrev);
        app.handle_key_action(KeyAction::Backspace);
        app.handle_key_action(KeyAction::Input('2'));
        assert!(!app.validator.has_error(ids::INTEG_A));
        app.handle_key_action(KeyAction::SwitchView(View::Home));
        assert!(!app.validator.has_error(ids::INTEG_A));
        assert_eq!(app.form.get(ids::INTEG_A), "2");
    }

    #[test]
    fn arrows_cycle_methods_only_on_method_fields() {
        let mut app = null_app();
        app.handle_key_action(KeyAction::SwitchView(View::Integration));
        app.handle_key_action(KeyAction::Right);
        assert_eq!(app.form.get(ids::INTEG_METHOD), "simpson13");
        app.handle_key_action(KeyAction::Left);
        app.handle_key_action(KeyAction::Left);
        assert_eq!(app.form.get(ids::INTEG_METHOD), "gauss");

        // Typing into a method field changes nothing.
        app.handle_key_action(KeyAction::Input('z'));
        assert_eq!(app.form.get(ids::INTEG_METHOD), "gauss");

        focus_on(&mut app, Feature::Integration, ids::INTEG_FUNCTION);
        app.handle_key_action(KeyAction::Right);
        assert_eq!(app.form.get(ids::INTEG_FUNCTION), "x^2");
    }

    #[test]
    fn edits_are_saved() {
        let store = Arc::new(MemoryStore::default());
        let mut app = null_app().with_config(ConfigManager::new(store.clone()));
        app.handle_key_action(KeyAction::SwitchView(View::Differentiation));
        focus_on(&mut app, Feature::Differentiation, ids::DERIV_X);
        app.handle_key_action(KeyAction::ClearField);
        app.handle_key_action(KeyAction::Input('3'));

        let mut restored = FormState::new();
        ConfigManager::new(store).load_into(&mut restored).unwrap();
        assert_eq!(restored.get(ids::DERIV_X), "3");
    }

    #[test]
    fn saved_inputs_are_restored() {
        let store = Arc::new(MemoryStore::default());
        let mut form = FormState::new();
        form.set(ids::INTERP_XQ, "1.25");
        ConfigManager::new(store.clone()).save(&form).unwrap();

        let app = null_app().with_config(ConfigManager::new(store));
        assert_eq!(app.form.get(ids::INTERP_XQ), "1.25");
    }

    #[test]
    fn busy_depth_nests() {
        let mut app = null_app();
        app.handle_message(TuiMessage::BusyShow("a".into()));
        app.handle_message(TuiMessage::BusyShow("b".into()));
        app.handle_message(TuiMessage::BusyHide);
        assert!(app.is_busy());
        assert_eq!(app.busy_message, "b");
        app.handle_message(TuiMessage::BusyHide);
        app.handle_message(TuiMessage::BusyHide);
        assert!(!app.is_busy());
    }

    #[test]
    fn new_interpolation_result_drops_old_chart() {
        let mut app = null_app();
        app.handle_message(TuiMessage::Chart(ChartData {
            method: "Lineal".into(),
            points: vec![(0.0, 0.0)],
            curve: vec![(0.5, 0.5)],
        }));
        assert!(app.chart.is_some());
        app.handle_message(TuiMessage::Error {
            feature: Feature::Interpolation,
            message: "x e y deben tener la misma longitud".into(),
        });
        assert!(app.chart.is_none());
    }

    #[test]
    fn page_keys_scroll_active_panel() {
        let mut app = null_app();
        app.handle_key_action(KeyAction::SwitchView(View::Integration));
        let text = (0..40).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        app.handle_message(TuiMessage::Comparison {
            feature: Feature::Integration,
            text,
        });
        app.handle_key_action(KeyAction::PageDown);
        assert_eq!(app.result(Feature::Integration).unwrap().offset, PAGE_SIZE);
        app.handle_key_action(KeyAction::PageUp);
        assert_eq!(app.result(Feature::Integration).unwrap().offset, 0);
    }

    #[test]
    fn handle_quit() {
        let mut app = null_app();
        app.handle_message(TuiMessage::Quit);
        assert!(app.should_quit);

        let mut app = null_app();
        app.handle_key_action(KeyAction::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn handle_resize() {
        let mut app = null_app();
        app.handle_message(TuiMessage::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!(app.terminal_width, 120);
        assert_eq!(app.terminal_height, 40);
    }

    #[test]
    fn layout_computation() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = TuiApp::compute_layout(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(footer.y + footer.height, area.height);
        assert_eq!(header.height + body.height + footer.height, area.height);

        let (form, results) = TuiApp::compute_feature_layout(body);
        assert_eq!(form.width + results.width, body.width);
    }

    #[test]
    fn renders_every_view() {
        let mut app = null_app();
        app.handle_message(TuiMessage::BusyShow("Calculando...".into()));
        app.handle_message(TuiMessage::Notify {
            level: NotificationLevel::Info,
            message: "hola".into(),
        });
        app.handle_message(TuiMessage::Chart(ChartData {
            method: "Lineal".into(),
            points: vec![(0.0, 0.0), (1.0, 1.0)],
            curve: vec![(0.5, 0.5)],
        }));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        for view in View::ALL {
            app.handle_key_action(KeyAction::SwitchView(view));
            terminal.draw(|frame| app.render(frame)).unwrap();
        }
    }
}

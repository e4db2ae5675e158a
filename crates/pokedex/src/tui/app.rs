//! Main application state and event loop

use super::input::TextInput;
use super::ui;
use super::worker::{
    spawn_load_worker, spawn_search_worker, LoadRequest, SearchRequest, WorkerMessage,
};
use anyhow::{Context, Result};
use crossterm::{
    cursor::SetCursorStyle,
    event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokedex_api::{ClientConfig, Effect, Event, LoadProgress, PokeClient, Record, ViewState};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Toast notification state
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
    pub is_error: bool,
}

impl Toast {
    pub fn new(message: String, duration: Duration) -> Self {
        Self {
            message,
            expires_at: Instant::now() + duration,
            is_error: false,
        }
    }

    pub fn error(message: String, duration: Duration) -> Self {
        Self {
            is_error: true,
            ..Self::new(message, duration)
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Highlight position within the visible grid
#[derive(Debug, Default, Clone, Copy)]
pub struct GridCursor {
    pub index: usize,
    /// Columns in the last rendered grid; row moves step by this
    pub columns: usize,
    /// First rendered row
    pub scroll_row: usize,
}

impl GridCursor {
    fn step(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        let max = len as isize - 1;
        self.index = (self.index as isize + delta).clamp(0, max) as usize;
    }

    fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    fn row_step(&self) -> isize {
        self.columns.max(1) as isize
    }
}

pub struct App {
    pub state: ViewState,
    pub search_input: TextInput,
    /// Catalog positions matching the current query
    pub visible: Vec<usize>,
    pub cursor: GridCursor,
    pub load_progress: Option<LoadProgress>,
    /// When the in-flight load started (drives the spinner)
    pub load_started: Option<Instant>,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    page_limit: usize,
    load_tx: Sender<LoadRequest>,
    search_tx: Sender<SearchRequest>,
    message_rx: Receiver<WorkerMessage>,
    /// Whether the current load replaces an existing catalog
    reloading: bool,
}

impl App {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client =
            Arc::new(PokeClient::from_config(config).context("Failed to create HTTP client")?);
        let (load_tx, load_rx) = mpsc::channel::<LoadRequest>();
        let (search_tx, search_rx) = mpsc::channel::<SearchRequest>();
        let (message_tx, message_rx) = mpsc::channel::<WorkerMessage>();

        spawn_load_worker(client.clone(), config.concurrency, load_rx, message_tx.clone());
        spawn_search_worker(client, search_rx, message_tx);

        Ok(Self {
            state: ViewState::new(),
            search_input: TextInput::new(),
            visible: Vec::new(),
            cursor: GridCursor::default(),
            load_progress: None,
            load_started: None,
            toast: None,
            should_quit: false,
            page_limit: config.page_limit,
            load_tx,
            search_tx,
            message_rx,
            reloading: false,
        })
    }

    /// Feed an event through the state machine and start whatever it asks for
    fn dispatch(&mut self, event: Event) {
        let effect = self.state.update(event);
        self.refresh_visible();

        match effect {
            Some(Effect::LoadCatalog { request }) => {
                self.reloading = !self.state.catalog().is_empty();
                self.load_progress = None;
                self.load_started = Some(Instant::now());
                let _ = self.load_tx.send(LoadRequest {
                    request,
                    page_limit: self.page_limit,
                });
            }
            Some(Effect::Search { request, name }) => {
                let _ = self.search_tx.send(SearchRequest { request, name });
            }
            None => {}
        }
    }

    fn refresh_visible(&mut self) {
        self.visible = self.state.visible_indices();
        self.cursor.clamp(self.visible.len());
    }

    /// Record under the grid highlight
    pub fn highlighted(&self) -> Option<&Record> {
        let idx = *self.visible.get(self.cursor.index)?;
        self.state.catalog().get(idx)
    }

    /// Poll for worker messages (non-blocking)
    fn poll_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                WorkerMessage::Progress { progress, .. } => {
                    if self.state.is_loading() {
                        self.load_progress = Some(progress);
                    }
                }
                WorkerMessage::CatalogLoaded { request, result } => {
                    self.load_started = None;
                    self.load_progress = None;
                    match result {
                        Ok(catalog) => {
                            if self.reloading {
                                self.toast = Some(Toast::new(
                                    format!("Reloaded {} Pokémon", catalog.len()),
                                    Duration::from_secs(2),
                                ));
                            }
                            self.dispatch(Event::CatalogLoaded { request, catalog });
                        }
                        Err(error) => {
                            self.toast = Some(Toast::error(
                                format!("Load failed ({}): {}", error.kind().describe(), error),
                                Duration::from_secs(5),
                            ));
                            self.dispatch(Event::CatalogFailed { request, error });
                        }
                    }
                }
                WorkerMessage::SearchDone { request, result } => {
                    let event = match result {
                        Ok(record) => Event::SearchSucceeded { request, record },
                        Err(error) => Event::SearchFailed { request, error },
                    };
                    self.dispatch(event);
                }
            }
        }
    }

    fn select_highlighted(&mut self) {
        if let Some(id) = self.highlighted().map(|r| r.id) {
            self.dispatch(Event::Select { id });
        }
    }

    fn update_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    fn handle_event(&mut self, event: TermEvent) {
        let TermEvent::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        let len = self.visible.len();
        let page = self.cursor.row_step() * 5;
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => self.dispatch(Event::Reload),
            (KeyCode::Enter, _) => self.dispatch(Event::SearchCommitted),
            (KeyCode::Tab, _) => self.select_highlighted(),
            (KeyCode::Left, _) => self.cursor.step(-1, len),
            (KeyCode::Right, _) => self.cursor.step(1, len),
            (KeyCode::Up, _) => self.cursor.step(-self.cursor.row_step(), len),
            (KeyCode::Down, _) => self.cursor.step(self.cursor.row_step(), len),
            (KeyCode::PageUp, _) => self.cursor.step(-page, len),
            (KeyCode::PageDown, _) => self.cursor.step(page, len),
            _ => {
                if self.search_input.handle_key(key.code, key.modifiers) {
                    self.dispatch(Event::QueryChanged(self.search_input.text.clone()));
                }
            }
        }
    }
}

/// Run the TUI application
pub fn run(config: ClientConfig) -> Result<()> {
    let mut app = App::new(&config)?;
    app.dispatch(Event::Start);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetCursorStyle::BlinkingBar)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        SetCursorStyle::DefaultUserShape
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.update_toast();
        app.poll_messages();

        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(16))? {
            let event = event::read()?;
            app.handle_event(event);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use pokedex_api::{Catalog, Sprites};
    use ratatui::backend::TestBackend;

    fn record(id: u32, name: &str, types: &[&str]) -> Record {
        Record {
            id,
            name: name.to_string(),
            height: 6,
            weight: 85,
            sprites: Sprites::default(),
            types: types.iter().map(|t| t.to_string()).collect(),
            abilities: vec!["blaze".to_string()],
        }
    }

    fn loaded_app() -> App {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9");
        let mut app = App::new(&config).unwrap();
        // Drive the state directly so no worker is asked to fetch anything
        let Some(Effect::LoadCatalog { request }) = app.state.update(Event::Start) else {
            panic!("expected load effect");
        };
        let catalog = Catalog::new(vec![
            record(1, "bulbasaur", &["grass", "poison"]),
            record(4, "charmander", &["fire"]),
            record(25, "pikachu", &["electric"]),
        ])
        .unwrap();
        app.state.update(Event::CatalogLoaded { request, catalog });
        app.refresh_visible();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(TermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui::render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_filters_grid() {
        let mut app = loaded_app();
        for c in "CHAR".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.state.query(), "CHAR");
        assert_eq!(app.visible, vec![1]);

        let text = screen(&mut app);
        assert!(text.contains("charmander"));
        assert!(!text.contains("bulbasaur"));
        assert!(text.contains("[1/3]"));
    }

    #[test]
    fn test_tab_shows_highlighted_record() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.state.focused().map(|r| r.id), Some(4));
        let text = screen(&mut app);
        assert!(text.contains("CHARMANDER"));
        assert!(text.contains("85 hectograms"));
    }

    #[test]
    fn test_selection_survives_filtering() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Tab);
        for c in "pika".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.state.focused().map(|r| r.name.as_str()), Some("bulbasaur"));
        assert_eq!(app.highlighted().map(|r| r.id), Some(25));
    }

    #[test]
    fn test_grid_cursor_clamps() {
        let mut cursor = GridCursor {
            index: 0,
            columns: 4,
            scroll_row: 0,
        };
        cursor.step(-1, 10);
        assert_eq!(cursor.index, 0);
        cursor.step(cursor.row_step(), 10);
        assert_eq!(cursor.index, 4);
        cursor.step(cursor.row_step() * 5, 10);
        assert_eq!(cursor.index, 9);
        cursor.clamp(3);
        assert_eq!(cursor.index, 2);
        cursor.step(1, 0);
        assert_eq!(cursor.index, 0);
    }

    #[test]
    fn test_row_step_never_zero() {
        let cursor = GridCursor::default();
        assert_eq!(cursor.row_step(), 1);
    }
}

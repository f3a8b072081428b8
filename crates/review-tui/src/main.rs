use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
            MouseEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc;
use std::time::Duration;

mod actions;
mod capabilities;
mod dispatcher;
mod domain_models;
mod layout;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use dispatcher::Dispatcher;
use middleware::{KeyboardMiddleware, LoggingMiddleware, MouseMiddleware, ReviewMiddleware};
use review_config::AppConfig;
use state::AppState;
use store::Store;
use views::Ui;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init();
    log::info!("Starting review-tui (log: {})", log_file.display());

    let config = AppConfig::load();
    log::info!("Review endpoint: {}", config.endpoint);

    // Setup terminal; mouse capture doubles as the outside-click listener
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Action channel: middleware completions re-enter the store through it
    let (action_tx, action_rx) = mpsc::channel();
    let dispatcher = Dispatcher::new(action_tx);

    let mut store = Store::new(AppState::from_config(&config), dispatcher);
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(MouseMiddleware::new()));
    store.add_middleware(Box::new(ReviewMiddleware::new(&config.endpoint)));

    let mut ui = Ui::new(store.state().chrome.theme_mode);

    let result = run_app(&mut terminal, &mut store, &mut ui, &action_rx);

    // Restore terminal on every exit path, releasing the mouse capture
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting review-tui");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    ui: &mut Ui,
    action_rx: &mpsc::Receiver<Action>,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|frame| views::render(store.state(), ui, frame))?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle input; the poll timeout doubles as the animation tick
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Mouse(mouse)
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                {
                    let size = terminal.size()?;
                    store.dispatch(Action::Global(GlobalAction::MouseClick {
                        x: mouse.column,
                        y: mouse.row,
                        frame: ratatui::layout::Rect::new(0, 0, size.width, size.height),
                    }));
                }
                _ => {}
            }
        } else {
            store.dispatch(Action::Global(GlobalAction::Tick));
        }

        // Drain completions dispatched by middleware tasks
        while let Ok(action) = action_rx.try_recv() {
            store.dispatch(action);
        }
    }

    Ok(())
}

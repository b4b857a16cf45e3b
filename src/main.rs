use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use vocab_lessons::{App, Config, Speaker, draw, handle_key, logger, spawn_net_worker};

fn main() -> io::Result<()> {
    logger::init();
    let config = Config::from_env();

    let (req_tx, req_rx) = crossbeam_channel::unbounded();
    let (res_tx, res_rx) = crossbeam_channel::unbounded();
    spawn_net_worker(config, res_tx, req_rx);

    let mut speaker = Speaker::new();
    let mut app = App::new(req_tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &mut speaker, &res_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    speaker: &mut Speaker,
    res_rx: &crossbeam_channel::Receiver<vocab_lessons::NetResponse>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        // Worker responses first, then input. Polling with a timeout keeps
        // the loop turning while a fetch is in flight.
        while let Ok(response) = res_rx.try_recv() {
            app.handle_net_response(response);
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key(app, speaker, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

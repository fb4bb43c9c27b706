pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod logging;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::{
    io::{self, Stdout},
    sync::Arc,
};

use anyhow::Result;
use app::config::AppConfig;
use app::effects::EffectRunner;
use app::events::{AppEvent, spawn_input_task};
use app::state::AppState;
use cli::Cli;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use data::WeatherClient;
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::info;

pub async fn run(cli: Cli) -> Result<()> {
    logging::init(&logging::LogTarget::for_cli(&cli))?;
    let config = AppConfig::from_cli(&cli)?;
    let client = Arc::new(WeatherClient::new(&config.client)?);

    if cli.one_shot {
        let report = app::report::one_shot(&config, &client).await?;
        println!("{report}");
        return Ok(());
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &config, client).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &AppConfig,
    client: Arc<WeatherClient>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut app = AppState::new(config);
    let mut effects = EffectRunner::new(client, tx.clone(), config.debounce);
    info!(start = ?config.start, units = ?config.units, "dashboard starting");

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        let event = tokio::select! {
            maybe_input = input_stream.next() => maybe_input.map(AppEvent::Input),
            maybe_event = rx.recv() => maybe_event,
            _ = &mut ctrl_c => Some(AppEvent::Quit),
        };
        let Some(event) = event else {
            break;
        };

        effects.run(app.update(event));
        terminal.draw(|frame| ui::render(frame, &app, config.icon_mode))?;
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        existing(panic);
    }));
}

use std::env;
use std::process::ExitCode;

use bitwave_rs::{plot, Signal};
use bitwave_tui::error::BitwaveTuiResult;
use bitwave_tui::surface::ChartSurface;
use bitwave_tui::tui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "bitwave".to_string());
    let (Some(text), None) = (args.next(), args.next()) else {
        eprintln!("usage: {program} <BITS>");
        return ExitCode::FAILURE;
    };

    let signal = match Signal::parse(&text) {
        Ok(signal) => signal,
        Err(e) => {
            eprintln!("{program}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&signal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{program}: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(signal: &Signal) -> BitwaveTuiResult<()> {
    let terminal = tui::init_terminal()?;
    let mut surface = ChartSurface::new(terminal);
    let res = show_until_exit_key(signal, &mut surface);
    tui::restore_terminal()?;
    res
}

fn show_until_exit_key<B: Backend>(
    signal: &Signal,
    surface: &mut ChartSurface<B>,
) -> BitwaveTuiResult<()> {
    plot::render(signal, surface)?;
    loop {
        match event::read()? {
            Event::Key(key) if is_exit_key(&key) => return Ok(()),
            Event::Resize(_, _) => surface.redraw()?,
            _ => {}
        }
    }
}

fn is_exit_key(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('q'), _)
                | (KeyCode::Esc, _)
                | (KeyCode::Char('c'), KeyModifiers::CONTROL)
        )
}

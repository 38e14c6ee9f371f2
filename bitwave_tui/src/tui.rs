use std::io::{self, Stdout};
use std::{panic, process};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::error::BitwaveTuiResult;

pub type ChartTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn init_terminal() -> BitwaveTuiResult<ChartTerminal> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    install_restoring_panic_hook();
    Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
}

pub fn restore_terminal() -> BitwaveTuiResult<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

// A panic inside the draw loop would otherwise leave the terminal in raw
// mode on the alternate screen.
fn install_restoring_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |hook_info| {
        let _ = restore_terminal();
        original_hook(hook_info);
        process::exit(1);
    }));
}

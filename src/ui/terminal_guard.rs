//! Raw-mode terminal setup that is undone on drop and on panic.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

pub type UiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// A terminal change that has to be reverted on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    RawMode,
    AlternateScreen,
    HiddenCursor,
}

/// Steps applied so far. Undone newest first, at most once.
#[derive(Default)]
struct Applied {
    steps: Mutex<Vec<Step>>,
}

impl Applied {
    fn push(&self, step: Step) {
        self.steps.lock().push(step);
    }

    fn undo_with(&self, mut undo: impl FnMut(Step)) {
        let steps = std::mem::take(&mut *self.steps.lock());
        for step in steps.into_iter().rev() {
            undo(step);
        }
    }
}

fn undo_step(step: Step) {
    let mut stdout = io::stdout();
    let _ = match step {
        Step::RawMode => disable_raw_mode(),
        Step::AlternateScreen => stdout.execute(LeaveAlternateScreen).map(|_| ()),
        Step::HiddenCursor => stdout.execute(Show).map(|_| ()),
    };
}

/// Puts the terminal back the way it was found.
pub struct TerminalGuard {
    applied: Arc<Applied>,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.applied.undo_with(undo_step);
    }
}

/// Enter raw mode on the alternate screen.
///
/// If any step fails, the steps already taken are reverted before the error
/// is returned.
pub fn setup_terminal() -> io::Result<(UiTerminal, TerminalGuard)> {
    let guard = TerminalGuard {
        applied: Arc::default(),
    };

    enable_raw_mode()?;
    guard.applied.push(Step::RawMode);

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    guard.applied.push(Step::AlternateScreen);
    stdout.execute(Hide)?;
    guard.applied.push(Step::HiddenCursor);

    install_panic_hook(Arc::clone(&guard.applied));

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok((terminal, guard))
}

/// Restore before the default hook prints, so the message lands on the
/// normal screen.
fn install_panic_hook(applied: Arc<Applied>) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        applied.undo_with(undo_step);
        default_hook(info);
    }));
}

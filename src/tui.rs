use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::tty::IsTty;
use tracing::debug;

use crate::error::{CorniceError, Result};
use crate::event::FormEvent;
use crate::form::{Control, LoginForm};

/// How often the focused field's cursor blinks.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// Terminal session options.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub mouse: bool,
}

/// Fixed-rate blink schedule, independent of how much input arrives.
struct BlinkTimer {
    deadline: Instant,
}

impl BlinkTimer {
    fn new(now: Instant) -> Self {
        Self {
            deadline: now + BLINK_INTERVAL,
        }
    }

    /// True once per interval; re-arms itself when it fires.
    fn fire(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }
        self.deadline = now + BLINK_INTERVAL;
        true
    }

    /// How long to wait for input before the next blink is due.
    fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

fn restore(mouse: bool) {
    if mouse {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
    ratatui::restore();
}

/// Run the form until the user quits. Sets up the terminal, event loop,
/// and panic hook, then restores the terminal on exit.
pub fn run(form: &mut LoginForm, opts: SessionOptions) -> Result<()> {
    if !stdout().is_tty() {
        return Err(CorniceError::NotATerminal);
    }

    let mut terminal = match ratatui::try_init() {
        Ok(terminal) => terminal,
        Err(e) => {
            ratatui::restore();
            return Err(e.into());
        }
    };

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore(opts.mouse);
        hook(info);
    }));

    if opts.mouse {
        if let Err(e) = execute!(stdout(), EnableMouseCapture) {
            drop(terminal);
            restore(false);
            return Err(e.into());
        }
    }

    let mut blink = BlinkTimer::new(Instant::now());
    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| form.draw(frame)) {
            break Err(e.into());
        }

        let now = Instant::now();
        let next = if blink.fire(now) {
            Some(FormEvent::Tick)
        } else {
            match event::poll(blink.remaining(now)) {
                Err(e) => break Err(e.into()),
                Ok(false) => None,
                Ok(true) => match event::read() {
                    Err(e) => break Err(e.into()),
                    Ok(raw) => FormEvent::from_terminal(raw),
                },
            }
        };
        let Some(next) = next else {
            continue;
        };

        if form.dispatch(next) == Control::Quit {
            debug!("leaving event loop");
            break Ok(());
        }
    };

    drop(terminal);
    restore(opts.mouse);
    result
}

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Watches the keyboard while a sweep runs and raises the shared stop
/// flag when 'q' or Ctrl-C is pressed.
///
/// The terminal sits in raw mode while the listener is active; raw mode
/// is restored when the sweep finishes (`running` drops to false) and
/// again on drop as a backstop.
pub struct InterruptListener {
    running: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
    started: bool,
}

impl InterruptListener {
    pub fn new(running: Arc<AtomicBool>, stop: Arc<AtomicBool>) -> Self {
        Self {
            running,
            stop,
            started: false,
        }
    }

    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        let running = self.running.clone();
        let stop = self.stop.clone();

        thread::spawn(move || {
            if enable_raw_mode().is_err() {
                return;
            }

            while running.load(Ordering::Relaxed) && !stop.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(_) => break,
                }

                if let Ok(Event::Key(key_event)) = event::read() {
                    let is_q = key_event.code == KeyCode::Char('q');
                    let is_ctrl_c = key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL);

                    if (is_q || is_ctrl_c) && key_event.kind == KeyEventKind::Press {
                        stop.store(true, Ordering::Relaxed);
                        break;
                    }
                }
            }

            let _ = disable_raw_mode();
        });
    }
}

impl Drop for InterruptListener {
    fn drop(&mut self) {
        if self.started {
            let _ = disable_raw_mode();
        }
    }
}

//! Terminal renderer and stdin controller

use std::io::BufRead;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, warn};

use crate::{
    api::{TimerHandle, TimerView},
    state::{Mode, TimerSnapshot, Transition},
};
use super::InputCommand;

const BAR_WIDTH: usize = 20;

/// How snapshots are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render one view as a single line
pub fn render(view: &TimerView, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(view).unwrap_or_else(|e| {
            error!("Failed to serialize view: {}", e);
            String::new()
        }),
        OutputFormat::Text => render_text(view),
    }
}

fn render_text(view: &TimerView) -> String {
    let filled = ((view.progress_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));

    let modes: Vec<String> = Mode::ALL
        .iter()
        .map(|mode| {
            if *mode == view.mode {
                format!("[{}]", mode.selector_name())
            } else {
                mode.selector_name().to_string()
            }
        })
        .collect();

    let mut line = format!(
        "{} | {} {} [{}] {:>3.0}% | {} | {} completed, {} min",
        modes.join(" "),
        view.label,
        view.display,
        bar,
        view.progress_percent,
        view.primary_action,
        view.completed_sessions,
        view.focused_minutes,
    );
    if view.completed {
        line.push_str(" | time's up!");
    }
    line
}

/// Print every published snapshot until the timer task goes away
pub async fn render_loop(mut snapshots: watch::Receiver<TimerSnapshot>, format: OutputFormat) {
    loop {
        let view = TimerView::from_snapshot(&snapshots.borrow_and_update());
        println!("{}", render(&view, format));

        if snapshots.changed().await.is_err() {
            debug!("Snapshot channel closed, renderer exiting");
            break;
        }
    }
}

/// Forward stdin lines from a detached thread.
///
/// The thread is never joined, so a pending read does not hold up shutdown.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    break;
                }
            }
        }
        debug!("Stdin reader exiting");
    });

    rx
}

/// Apply input lines to the timer until `quit` or end of input
pub async fn input_loop(handle: TimerHandle, mut lines: mpsc::Receiver<String>) -> Result<(), String> {
    while let Some(line) = lines.recv().await {
        let command = match line.parse::<InputCommand>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        let transition = match command {
            InputCommand::SwitchMode(mode) => handle.switch_mode(mode).await?,
            InputCommand::Toggle => handle.toggle_start().await?,
            InputCommand::Reset => handle.reset().await?,
            InputCommand::Quit => return Ok(()),
        };

        if let Transition::Ignored(reason) = transition {
            debug!("Input {:?} had no effect: {:?}", command, reason);
        }
    }

    debug!("Input closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NullSound, Phase, TimerState};

    #[test]
    fn text_line_shows_mode_time_and_action() {
        let view = TimerView::from_snapshot(&TimerSnapshot::default());
        let line = render(&view, OutputFormat::Text);
        assert!(line.starts_with("[Work] Short Break Long Break"), "{}", line);
        assert!(line.contains("FOCUS TIME 25:00"), "{}", line);
        assert!(line.contains(&"-".repeat(BAR_WIDTH)), "{}", line);
        assert!(line.contains("START"), "{}", line);
        assert!(!line.contains("time's up"));
    }

    #[test]
    fn completed_line_is_flagged() {
        let mut state = TimerState::idle(Mode::ShortBreak, 0);
        state.remaining_seconds = 0;
        state.is_completed = true;
        let view = TimerView::from_snapshot(&TimerSnapshot::new(state));

        let line = render(&view, OutputFormat::Text);
        assert!(line.contains(&"#".repeat(BAR_WIDTH)), "{}", line);
        assert!(line.contains("DISMISS"));
        assert!(line.ends_with("time's up!"));
    }

    #[test]
    fn json_line_round_trips_view() {
        let view = TimerView::from_snapshot(&TimerSnapshot::default());
        let line = render(&view, OutputFormat::Json);
        let parsed: TimerView = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, view);
    }

    #[tokio::test(start_paused = true)]
    async fn input_lines_drive_the_timer() {
        let (handle, task) = TimerHandle::spawn(NullSound);
        let (tx, rx) = mpsc::channel(16);

        for line in ["l", "bogus", "", "q", "r"] {
            tx.send(line.to_string()).await.unwrap();
        }
        input_loop(handle.clone(), rx).await.unwrap();

        let snapshot = handle.snapshot();
        assert_eq!(snapshot.state.mode, Mode::LongBreak);
        assert_eq!(snapshot.phase, Phase::Running);
        assert_eq!(snapshot.state.remaining_seconds, 900);

        drop(handle);
        task.await.unwrap();
    }
}

//! Focus Timer - a pomodoro countdown timer for the terminal
//!
//! This is the main entry point for the focus-timer application.

use tracing::{info, warn};

use focus_timer::{
    config::Config,
    services::{check_player_available, CommandSound},
    state::{NullSound, SoundNotifier},
    utils::shutdown_signal,
    view::{input_loop, render_loop, spawn_stdin_reader, HELP},
    TimerHandle,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the rendered timer
    tracing_subscriber::fmt()
        .with_env_filter(format!("focus_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting focus-timer v1.0.0");

    let sound = build_sound(&config).await;
    let (handle, timer_task) = TimerHandle::spawn(sound);
    let renderer = tokio::spawn(render_loop(handle.subscribe(), config.output_format()));

    eprintln!("{}", HELP);

    tokio::select! {
        result = input_loop(handle.clone(), spawn_stdin_reader()) => {
            if let Err(e) = result {
                tracing::error!("Input error: {}", e);
            }
        }
        result = shutdown_signal() => {
            match result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => tracing::error!("{}", e),
            }
        }
    }

    // Dropping the last handle ends the timer task, which stops the ticker
    // and any playing alarm.
    drop(handle);
    timer_task.await?;
    renderer.await?;

    info!("Timer shutdown complete");
    Ok(())
}

async fn build_sound(config: &Config) -> Box<dyn SoundNotifier + Send> {
    if config.no_sound {
        info!("Completion sound disabled");
        return Box::new(NullSound);
    }

    if let Err(e) = check_player_available(&config.player).await {
        warn!("{}", e);
        return Box::new(NullSound);
    }

    info!("Completion sound: {} via {}", config.sound_file.display(), config.player);
    Box::new(CommandSound::new(config.player.clone(), config.sound_file.clone()))
}

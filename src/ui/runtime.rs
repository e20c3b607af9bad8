use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::store::TimerStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

pub async fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownHandle::new();
    // Stops the input thread and the signal listener on every exit path.
    let _stop_background = scopeguard::guard(shutdown.clone(), |shutdown| shutdown.signal());

    let poll_interval = Duration::from_millis(config.ui.poll_interval_ms);
    let mut events = EventHandler::new(poll_interval, shutdown.clone())?;
    spawn_signal_listener(shutdown.clone(), events.sender());

    let store = TimerStore::new(config.initial_state());
    let mut app = App::new(store, config.ui.variant, Handle::current());
    let redraw = events.sender();
    app.watch(move |_| {
        let _ = redraw.send(AppEvent::StateChanged);
    });
    tracing::info!(
        variant = config.ui.variant.label(),
        start_time = config.timer.start_time,
        duration_ms = config.timer.duration_ms,
        "Countdown ready"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Resize(..)) | Some(AppEvent::StateChanged) => {}
            Some(AppEvent::Shutdown) | None => break,
        }
    }

    drop(app);
    drop(guard);
    tracing::info!("Countdown closed");
    Ok(())
}

fn spawn_signal_listener(shutdown: ShutdownHandle, tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        tokio::select! {
            _ = termination_signal() => {
                shutdown.signal();
                let _ = tx.send(AppEvent::Shutdown);
            }
            _ = shutdown.wait() => {}
        }
    });
}

#[cfg(unix)]
async fn termination_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = interrupt() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "SIGTERM handler unavailable");
            interrupt().await;
        }
    }
}

#[cfg(not(unix))]
async fn termination_signal() {
    interrupt().await;
}

/// Resolves on SIGINT. Never resolves if the handler cannot be installed.
async fn interrupt() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "SIGINT handler unavailable");
        std::future::pending::<()>().await;
    }
}

//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use folio_app::config::Settings;
use folio_app::message::Message;
use folio_app::state::AppState;
use folio_app::submit::WebhookClient;
use folio_app::{handle_action, update};
use folio_core::prelude::*;
use folio_core::Profile;

use crate::{event, render, terminal};

/// Run the TUI application until the user quits.
pub async fn run(profile: Profile, settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut state = AppState::new(profile, settings);

    // Channel for messages produced by background tasks
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    let webhook = Arc::new(WebhookClient::new());

    info!("folio TUI started");
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, webhook);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    webhook: Arc<WebhookClient>,
) -> Result<()> {
    while !state.should_quit {
        // Drain messages from background tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &webhook);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &webhook);
        }
    }

    Ok(())
}

/// Run one message through update(), chasing follow-up messages and
/// dispatching any returned actions to the runtime.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    webhook: &Arc<WebhookClient>,
) {
    let mut current = Some(message);
    while let Some(msg) = current.take() {
        let result = update(state, msg);
        if let Some(action) = result.action {
            handle_action(action, webhook.clone(), msg_tx.clone());
        }
        current = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_app::InputKey;

    #[tokio::test]
    async fn test_process_message_follows_key_chain() {
        let mut state = AppState::new(Profile::sample(), Settings::default());
        let (tx, _rx) = mpsc::channel(8);
        let webhook = Arc::new(WebhookClient::new());

        // Tab key resolves to NextSection through the follow-up message.
        process_message(&mut state, Message::Key(InputKey::Tab), &tx, &webhook);
        assert_eq!(
            state.active_section,
            folio_app::state::Section::WorkHistory
        );
    }

    #[tokio::test]
    async fn test_process_message_quit() {
        let mut state = AppState::new(Profile::sample(), Settings::default());
        let (tx, _rx) = mpsc::channel(8);
        let webhook = Arc::new(WebhookClient::new());

        process_message(&mut state, Message::Key(InputKey::CharCtrl('c')), &tx, &webhook);
        assert!(state.should_quit);
    }
}

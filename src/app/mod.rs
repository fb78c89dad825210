pub mod actions;
pub mod events;
pub mod state;

use crate::client::GalleryClient;
use crate::config::Config;
use crate::input;
use crate::selection::Selection;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, NetworkEvent};
use state::{AppState, Toast};
use serde_json::{Map, Value};
use tokio::sync::mpsc;

pub struct App {
    state: AppState,
    client: GalleryClient,
}

impl App {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let client = GalleryClient::new(
            &cfg.client.endpoint,
            &cfg.auth.admin_key,
            std::time::Duration::from_secs(cfg.client.timeout_secs),
        )?;
        Ok(Self {
            state: AppState::new(cfg.client.endpoint.clone()),
            client,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone());

        tui::draw(terminal, &mut self.state)?;
        self.handle_action(Action::Reload, &tx);

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Network(ne) => self.handle_network(ne),
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Reload => self.spawn_load_gallery(tx),
            Action::Save => self.spawn_save(tx),
            other => reduce(&mut self.state, other),
        }
    }

    fn spawn_load_gallery(&mut self, tx: &mpsc::Sender<Event>) {
        if self.state.loading {
            return;
        }
        if self.state.selection.save_state().in_flight() {
            self.state.status = "Wait for the save to finish".into();
            return;
        }
        self.state.loading = true;
        self.state.status = format!("Loading gallery from {}", self.state.endpoint);

        let client = self.client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let ev = match client.fetch_gallery().await {
                Ok(page) => NetworkEvent::GalleryLoaded(page),
                Err(e) => NetworkEvent::Error(format!("{e:#}")),
            };
            let _ = tx.send(Event::Network(ev)).await;
        });
    }

    fn spawn_save(&mut self, tx: &mpsc::Sender<Event>) {
        let Some((payload, nonce)) = begin_save(&mut self.state) else {
            return;
        };
        tracing::info!(count = payload.len(), "saving gradient selection");

        let client = self.client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let ev = match client.save(payload, &nonce).await {
                Ok(()) => NetworkEvent::Saved,
                Err(e) => NetworkEvent::SaveFailed(format!("{e:#}")),
            };
            let _ = tx.send(Event::Network(ev)).await;
        });
    }

    fn handle_network(&mut self, ne: NetworkEvent) {
        apply_network(&mut self.state, ne);
    }
}

/// Snapshot the payload and enter the saving state.
///
/// Refused while a gallery load is pending.
fn begin_save(state: &mut AppState) -> Option<(Map<String, Value>, String)> {
    if state.loading {
        state.status = "Wait for the gallery to load".into();
        return None;
    }
    let Some(nonce) = state.nonce.clone() else {
        state.status = "Gallery not loaded yet".into();
        return None;
    };
    let payload = state.selection.begin_save()?;
    state.status = format!("Saving {} gradients...", payload.len());
    Some((payload, nonce))
}

/// Pure state transitions for actions that need no I/O.
fn reduce(state: &mut AppState, action: Action) {
    let page = state.viewport_height.max(1);
    match action {
        Action::Quit => state.should_quit = true,
        Action::ToggleHelp => state.show_help = !state.show_help,
        Action::ListUp => state.select_prev(1),
        Action::ListDown => state.select_next(1),
        Action::GoTop => state.select_first(),
        Action::GoBottom => state.select_last(),
        Action::PageUp => state.select_prev(page),
        Action::PageDown => state.select_next(page),
        Action::Toggle => {
            let idx = state.selected;
            if !state.selection.toggle(idx) && state.selection.save_state().in_flight() {
                state.status = "Saving... selection is locked".into();
            }
        }
        Action::SelectAll => {
            if state.selection.select_all() {
                state.status = "Selected all gradients".into();
            }
        }
        Action::DeselectAll => {
            if state.selection.deselect_all() {
                state.status = "Deselected all gradients".into();
            }
        }
        Action::Resize => {}
        Action::Save | Action::Reload => {} // handled in handle_action
    }
}

fn apply_network(state: &mut AppState, ne: NetworkEvent) {
    match ne {
        NetworkEvent::GalleryLoaded(_) if state.selection.save_state().in_flight() => {
            tracing::warn!("gallery arrived during a save; keeping the submitted selection");
            state.loading = false;
        }
        NetworkEvent::GalleryLoaded(page) => {
            let selection = Selection::new(page.gradients);
            state.status = format!(
                "{} gradients, {} selected",
                selection.len(),
                selection.checked_count()
            );
            state.set_gallery(selection, page.nonce);
        }
        NetworkEvent::Saved => {
            state.selection.finish_save(Ok(()));
            state.status = format!("Saved {} gradients", state.selection.checked_count());
            state.toast = Some(Toast::success("Gradients saved"));
        }
        NetworkEvent::SaveFailed(e) => {
            tracing::warn!("save failed: {e}");
            state.selection.finish_save(Err(e.clone()));
            state.status = format!("Save failed: {e}");
            state.toast = Some(Toast::error("Save failed"));
        }
        NetworkEvent::Error(e) => {
            tracing::warn!("{e}");
            state.loading = false;
            state.status = e.clone();
            state.toast = Some(Toast::error(e));
        }
    }
}

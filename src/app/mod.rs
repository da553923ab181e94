//! App Orchestration
//!
//! `App` owns all application state and the channels to the API service.
//! Its methods are grouped by domain:
//! - file_ops: uploads, deletes, downloads and action dispatch
//! - navigation: grid selection and scrolling
//!
//! Everything here runs on the UI loop. Network work happens in the API
//! service; results come back through `api_rx` and are applied by
//! `handlers::handle_api_response`.

pub(crate) mod file_ops;
pub(crate) mod navigation;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::config::Config;
use crate::model::{ActivityId, Model};
use crate::services::api::{ApiRequest, ApiResponse};
use crate::services::BatchId;
use crate::ui::file_grid::ActionMap;
use crate::ui::icons::{IconMode, IconRenderer, IconTheme};

pub struct App {
    pub model: Model,
    pub api_tx: mpsc::UnboundedSender<ApiRequest>,
    pub api_rx: mpsc::UnboundedReceiver<ApiResponse>,
    pub icon_renderer: IconRenderer,
    pub base_url: String,
    pub reload_delay: Duration,

    /// Button regions of the last drawn frame
    pub action_map: ActionMap,
    /// Card rows that fit in the last drawn frame
    pub visible_rows: usize,
    /// Frame counter driving the activity spinner
    pub tick: u64,
    /// First half of a vim `gg`
    pub last_key_was_g: bool,

    next_batch_id: BatchId,
    batch_activities: HashMap<BatchId, ActivityId>,
    listing_activities: HashMap<u64, ActivityId>,
    delete_activities: Vec<(String, ActivityId)>,
    download_activities: Vec<(String, ActivityId)>,
    scheduled_reloads: Vec<Instant>,
}

impl App {
    pub fn new(
        config: &Config,
        api_tx: mpsc::UnboundedSender<ApiRequest>,
        api_rx: mpsc::UnboundedReceiver<ApiResponse>,
    ) -> Self {
        let mut model = Model::new(config.vim_mode);
        model.ui.toast_duration_ms = config.toast_duration_ms;

        Self {
            model,
            api_tx,
            api_rx,
            icon_renderer: IconRenderer::new(
                IconMode::from_config(&config.icon_mode),
                IconTheme::default(),
            ),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            reload_delay: config.reload_delay(),
            action_map: ActionMap::new(),
            visible_rows: 1,
            tick: 0,
            last_key_was_g: false,
            next_batch_id: 0,
            batch_activities: HashMap::new(),
            listing_activities: HashMap::new(),
            delete_activities: Vec::new(),
            download_activities: Vec::new(),
            scheduled_reloads: Vec::new(),
        }
    }

    /// Send a request to the API service
    pub(crate) fn send(&self, request: ApiRequest) {
        if let Err(e) = self.api_tx.send(request) {
            tracing::warn!(request = ?e.0, "api service is gone, request dropped");
        }
    }

    /// Issue a listing request now, tagged with a fresh epoch
    pub fn request_reload(&mut self) -> u64 {
        let epoch = self.model.files.begin_reload();
        let activity = self.model.ui.begin_activity("Loading file list");
        self.listing_activities.insert(epoch, activity);

        tracing::debug!(epoch, "requesting file list");
        self.send(ApiRequest::ListFiles { epoch });
        epoch
    }

    /// Queue a reload to fire once `reload_delay` has passed
    pub fn schedule_reload(&mut self, now: Instant) {
        self.scheduled_reloads.push(now + self.reload_delay);
    }

    pub fn scheduled_reload_count(&self) -> usize {
        self.scheduled_reloads.len()
    }

    /// Issue every scheduled reload that is due; returns how many fired
    pub fn fire_due_reloads(&mut self, now: Instant) -> usize {
        let before = self.scheduled_reloads.len();
        self.scheduled_reloads.retain(|due| *due > now);
        let due = before - self.scheduled_reloads.len();

        for _ in 0..due {
            self.request_reload();
        }
        due
    }

    /// Stop the indicator for a finished listing
    pub(crate) fn end_listing_activity(&mut self, epoch: u64) {
        if let Some(activity) = self.listing_activities.remove(&epoch) {
            self.model.ui.end_activity(activity);
        }
    }

    /// Stop the indicator for a settled batch
    pub(crate) fn end_batch_activity(&mut self, batch_id: BatchId) {
        if let Some(activity) = self.batch_activities.remove(&batch_id) {
            self.model.ui.end_activity(activity);
        }
    }

    pub(crate) fn end_delete_activity(&mut self, name: &str) {
        if let Some(pos) = self.delete_activities.iter().position(|(n, _)| n == name) {
            let (_, activity) = self.delete_activities.remove(pos);
            self.model.ui.end_activity(activity);
        }
    }

    pub(crate) fn end_download_activity(&mut self, name: &str) {
        if let Some(pos) = self.download_activities.iter().position(|(n, _)| n == name) {
            let (_, activity) = self.download_activities.remove(pos);
            self.model.ui.end_activity(activity);
        }
    }

    /// Per-frame housekeeping: toast expiry, due reloads, spinner
    pub fn on_tick(&mut self, now: Instant) {
        if self.model.ui.should_dismiss_toast() {
            self.model.ui.dismiss_toast();
        }
        self.fire_due_reloads(now);
        self.tick = self.tick.wrapping_add(1);
    }

    /// Apply every response the API service has produced so far
    pub fn drain_responses(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(response) = self.api_rx.try_recv() {
            crate::handlers::handle_api_response(self, response);
            handled += 1;
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> (App, mpsc::UnboundedReceiver<ApiRequest>) {
        let (api_tx, api_rx) = mpsc::unbounded_channel();
        let (_response_tx, response_rx) = mpsc::unbounded_channel();
        (App::new(&Config::default(), api_tx, response_rx), api_rx)
    }

    #[test]
    fn test_request_reload_uses_fresh_epochs() {
        let (mut app, mut requests) = app();
        assert_eq!(app.request_reload(), 1);
        assert_eq!(app.request_reload(), 2);

        assert!(matches!(requests.try_recv(), Ok(ApiRequest::ListFiles { epoch: 1 })));
        assert!(matches!(requests.try_recv(), Ok(ApiRequest::ListFiles { epoch: 2 })));
        assert!(app.model.ui.is_busy());
    }

    #[test]
    fn test_scheduled_reload_waits_for_delay() {
        let (mut app, mut requests) = app();
        let now = Instant::now();
        app.schedule_reload(now);

        assert_eq!(app.fire_due_reloads(now), 0);
        assert!(requests.try_recv().is_err());

        assert_eq!(app.fire_due_reloads(now + app.reload_delay), 1);
        assert!(matches!(requests.try_recv(), Ok(ApiRequest::ListFiles { .. })));
        assert_eq!(app.scheduled_reload_count(), 0);
    }

    #[test]
    fn test_listing_activity_ends() {
        let (mut app, _requests) = app();
        let epoch = app.request_reload();
        app.end_listing_activity(epoch);
        assert!(!app.model.ui.is_busy());
    }

    #[test]
    fn test_config_applies_to_app() {
        let (api_tx, _api_rx) = mpsc::unbounded_channel();
        let (_response_tx, response_rx) = mpsc::unbounded_channel();
        let config = Config {
            base_url: "http://files.local:8080/".to_string(),
            icon_mode: "nerdfont".to_string(),
            toast_duration_ms: 1000,
            vim_mode: true,
            ..Config::default()
        };
        let app = App::new(&config, api_tx, response_rx);

        assert_eq!(app.base_url, "http://files.local:8080");
        assert_eq!(app.icon_renderer.mode(), IconMode::NerdFont);
        assert_eq!(app.model.ui.toast_duration_ms, 1000);
        assert!(app.model.ui.vim_mode);
    }
}

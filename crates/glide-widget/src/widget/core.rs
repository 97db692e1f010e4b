//! Widget struct definition, constructors, and persistence helpers.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use glide_chat::{Locale, MessageThread, ReplyScheduler, ScriptEngine, WidgetProfile};
use glide_common::{EventBus, NotificationQueue, Rect, Size, Viewport, WidgetId};
use glide_config::GlideConfig;
use glide_panel::{PanelController, PanelLayout, PanelMode, PanelSettings, SizeBounds};
use glide_platform::StateStore;

use crate::persist::{self, keys, PersistedState};

/// The assembled widget: one panel, one thread, one reply pipeline.
///
/// All methods run on the host's event task; there is no interior
/// locking. The host pumps [`Widget::tick`] so pending replies surface.
pub struct Widget {
    pub(super) id: WidgetId,
    pub(super) profile: WidgetProfile,
    pub(super) locale: Locale,
    pub(super) panel: PanelController,
    pub(super) thread: MessageThread,
    pub(super) engine: ScriptEngine,
    pub(super) scheduler: ReplyScheduler,
    pub(super) store: Box<dyn StateStore>,
    pub(super) events: EventBus,
    pub(super) notifications: NotificationQueue,
    pub(super) rng: StdRng,
    pub(super) delay_min_ms: u64,
    pub(super) delay_max_ms: u64,
    pub(super) persist_geometry: bool,
}

impl Widget {
    /// Build a widget from config, restoring any persisted state from
    /// the store.
    pub fn new(config: &GlideConfig, viewport: Viewport, store: Box<dyn StateStore>) -> Self {
        Self::build(config, viewport, store, StdRng::from_entropy())
    }

    /// Build with a fixed RNG seed so reply delays are reproducible.
    pub fn with_seed(
        config: &GlideConfig,
        viewport: Viewport,
        store: Box<dyn StateStore>,
        seed: u64,
    ) -> Self {
        Self::build(config, viewport, store, StdRng::seed_from_u64(seed))
    }

    fn build(
        config: &GlideConfig,
        viewport: Viewport,
        store: Box<dyn StateStore>,
        rng: StdRng,
    ) -> Self {
        let profile = config.chat.profile.parse().unwrap_or_else(|e| {
            warn!("{e}; falling back to the assistant profile");
            WidgetProfile::Assistant
        });
        let locale = Locale::from_code(&config.chat.locale);
        let settings = PanelSettings {
            default_size: Size::new(config.panel.default_width, config.panel.default_height),
            bounds: SizeBounds::new(
                Size::new(config.panel.min_width, config.panel.min_height),
                Size::new(config.panel.max_width, config.panel.max_height),
            ),
            margin: config.panel.margin,
            header_height: config.panel.header_height,
            launcher_diameter: config.panel.launcher_diameter,
            handle_size: config.panel.handle_size,
        };

        let persisted = PersistedState::load(store.as_ref());

        let mut panel = match (config.panel.persist_geometry, persisted.position, persisted.size) {
            (true, Some(position), Some(size)) => PanelController::with_restored(
                viewport,
                settings,
                Rect::from_origin_size(position, size),
            ),
            _ => PanelController::with_settings(viewport, settings),
        };
        if persisted.is_open == Some(true) {
            panel.open();
            // Maximized wins if a stale store carries both flags.
            if persisted.maximized == Some(true) {
                panel.maximize();
            } else if persisted.minimized == Some(true) {
                panel.minimize();
            }
        }

        let engine = ScriptEngine::new(profile);
        let mut thread = MessageThread::with_history_limit(config.chat.history_limit as usize);
        let restored_thread = match persisted.messages {
            Some(messages) if !messages.is_empty() => {
                thread.restore(messages, persisted.history.unwrap_or_default());
                true
            }
            _ => {
                thread.append(engine.welcome(locale));
                false
            }
        };

        debug!(
            %profile,
            %locale,
            mode = ?panel.mode(),
            restored_thread,
            "widget assembled"
        );

        Self {
            id: WidgetId::new(),
            profile,
            locale,
            panel,
            thread,
            engine,
            scheduler: ReplyScheduler::new(),
            store,
            events: EventBus::new(64),
            notifications: NotificationQueue::default(),
            rng,
            delay_min_ms: config.chat.reply_delay_min_ms,
            delay_max_ms: config.chat.reply_delay_max_ms,
            persist_geometry: config.panel.persist_geometry,
        }
    }

    // -- Accessors --

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn profile(&self) -> WidgetProfile {
        self.profile
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch the reply language. Existing messages keep their text;
    /// only future welcomes and fallbacks change.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn mode(&self) -> PanelMode {
        self.panel.mode()
    }

    /// The authoritative open-panel rect.
    pub fn rect(&self) -> Rect {
        self.panel.rect()
    }

    /// What the host should draw this frame.
    pub fn layout(&self) -> PanelLayout {
        self.panel.layout()
    }

    pub fn thread(&self) -> &MessageThread {
        &self.thread
    }

    /// A reply is scheduled and has not surfaced yet. The composer is
    /// disabled while this holds.
    pub fn is_waiting(&self) -> bool {
        self.scheduler.is_waiting()
    }

    /// Event stream for hosts mirroring widget state.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Pending toasts for the host to render.
    pub fn notifications(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    /// Tear down the widget and hand back its store, e.g. to rebuild
    /// after a config change.
    pub fn into_store(self) -> Box<dyn StateStore> {
        self.store
    }

    // -- Persistence --

    pub(super) fn save_mode(&mut self) {
        let mode = self.panel.mode();
        persist::write_key(
            self.store.as_mut(),
            keys::IS_OPEN,
            &(mode != PanelMode::Closed),
        );
        persist::write_key(
            self.store.as_mut(),
            keys::MINIMIZED,
            &(mode == PanelMode::Minimized),
        );
        persist::write_key(
            self.store.as_mut(),
            keys::MAXIMIZED,
            &(mode == PanelMode::Maximized),
        );
    }

    pub(super) fn save_geometry(&mut self) {
        if !self.persist_geometry {
            return;
        }
        let rect = self.panel.rect();
        persist::write_key(self.store.as_mut(), keys::POSITION, &rect.origin());
        persist::write_key(self.store.as_mut(), keys::SIZE, &rect.size());
    }

    pub(super) fn save_thread(&mut self) {
        let messages = self.thread.messages().to_vec();
        let history: Vec<String> = self.thread.recent_inputs().map(str::to_string).collect();
        persist::write_key(self.store.as_mut(), keys::MESSAGES, &messages);
        persist::write_key(self.store.as_mut(), keys::HISTORY, &history);
    }
}

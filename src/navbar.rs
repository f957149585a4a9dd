//! The navbar component: configuration, clock lifecycle, rendering and
//! click routing for one bar instance.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use futures::stream::{self, Stream, StreamExt};
use serde_json::Value;
use tracing::{debug, info, instrument, trace};

use crate::{
    Result,
    actions::{ActionDispatcher, DispatchOutcome},
    clock::{ClockSettings, ClockSnapshot, ClockTicker, format_clock},
    common::Property,
    config::{self, ConfigWarning, Configuration, RawConfig},
    host::Host,
    render::{self, CARD_SIZE, RenderedBar},
    template::TemplateContext,
};

/// Recomputes the clock strings from the current configuration.
///
/// Shared between the component and its ticker task. Refreshes run one at
/// a time, so a refresh that starts after a config change always lands last.
struct ClockRefresher<H: Host> {
    host: Arc<H>,
    config: Property<Arc<Configuration>>,
    clock: Property<ClockSnapshot>,
    refreshing: Arc<Mutex<()>>,
}

impl<H: Host> Clone for ClockRefresher<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            config: self.config.clone(),
            clock: self.clock.clone(),
            refreshing: Arc::clone(&self.refreshing),
        }
    }
}

impl<H: Host> ClockRefresher<H> {
    fn settings(&self) -> ClockSettings {
        let config = self.config.get();
        ClockSettings {
            date_format: config.date_format.clone(),
            time_format: config.time_format.clone(),
            time_zone: config.time_zone.clone().or_else(|| self.host.time_zone()),
            locale: config.locale.clone().or_else(|| self.host.language()),
        }
    }

    /// Returns whether the stored strings changed.
    fn refresh(&self, now: DateTime<Utc>) -> bool {
        // Held from reading the config until the strings are stored.
        let _running = self
            .refreshing
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let changed = self.clock.set(format_clock(now, &self.settings()));
        if changed {
            trace!(clock = ?self.clock.get(), "Clock updated");
        }
        changed
    }
}

/// One navigation bar bound to a host.
///
/// Call [`connect`](Self::connect) when the host activates the bar and
/// [`disconnect`](Self::disconnect) when it goes away; the clock task only
/// runs in between. Host live-state changes need no notification, every
/// [`render`](Self::render) reads the host afresh.
pub struct Navbar<H: Host> {
    refresher: ClockRefresher<H>,
    ticker: ClockTicker,
    active: bool,
}

impl<H: Host> Navbar<H> {
    /// Creates an inactive bar with the default configuration.
    pub fn new(host: Arc<H>) -> Self {
        Self {
            refresher: ClockRefresher {
                host,
                config: Property::new(Arc::new(Configuration::default())),
                clock: Property::new(ClockSnapshot::default()),
                refreshing: Arc::new(Mutex::new(())),
            },
            ticker: ClockTicker::new(),
            active: false,
        }
    }

    /// Replaces the configuration with a host-provided value.
    ///
    /// Returns the problems that were recovered by defaulting.
    ///
    /// # Errors
    /// Returns error if the value is not a configuration object, or if the
    /// clock must be rescheduled outside a tokio runtime.
    #[instrument(skip_all)]
    pub fn set_config(&mut self, raw: &Value) -> Result<Vec<ConfigWarning>> {
        let raw = config::parse(raw)?;
        self.apply_config(raw)
    }

    /// Replaces the configuration with an already parsed one.
    ///
    /// The new configuration is fully in place, the ticker rescheduled if
    /// the interval changed, and the clock recomputed before this returns.
    /// A tick already in flight finishes first and is then overwritten.
    ///
    /// # Errors
    /// Returns error if the clock must be rescheduled outside a tokio runtime.
    pub fn apply_config(&mut self, raw: RawConfig) -> Result<Vec<ConfigWarning>> {
        let normalized = config::normalize(raw);
        let previous = self.refresher.config.get().interval;
        let interval = normalized.config.interval;

        self.refresher.config.set(Arc::new(normalized.config));

        if self.active && interval != previous {
            info!(?previous, ?interval, "Refresh interval changed");
            let refresher = self.refresher.clone();
            self.ticker
                .restart(interval, move || {
                    refresher.refresh(Utc::now());
                })?;
        }

        self.refresh_clock();
        Ok(normalized.warnings)
    }

    /// Activates the bar and starts the clock task.
    ///
    /// Connecting an already connected bar does nothing.
    ///
    /// # Errors
    /// Returns error if called outside a tokio runtime.
    pub fn connect(&mut self) -> Result<()> {
        let refresher = self.refresher.clone();
        let interval = self.refresher.config.get().interval;

        let started = self.ticker.start(interval, move || {
            refresher.refresh(Utc::now());
        })?;
        self.active = true;

        if started {
            debug!(?interval, "Navbar connected");
            self.refresh_clock();
        }
        Ok(())
    }

    /// Deactivates the bar and stops the clock task.
    ///
    /// Disconnecting an inactive bar does nothing.
    pub fn disconnect(&mut self) {
        if self.ticker.stop() {
            debug!("Navbar disconnected");
        }
        self.active = false;
    }

    /// Whether the bar is between `connect` and `disconnect`.
    pub fn is_connected(&self) -> bool {
        self.active
    }

    /// The clock task, for inspecting its state.
    pub fn ticker(&self) -> &ClockTicker {
        &self.ticker
    }

    /// Recomputes the clock strings now.
    ///
    /// Returns whether they changed; an unchanged result notifies nobody.
    pub fn refresh_clock(&self) -> bool {
        self.refresher.refresh(Utc::now())
    }

    /// Recomputes the clock strings for a given instant.
    pub fn refresh_clock_at(&self, now: DateTime<Utc>) -> bool {
        self.refresher.refresh(now)
    }

    /// Current clock strings.
    pub fn clock(&self) -> ClockSnapshot {
        self.refresher.clock.get()
    }

    /// Active configuration.
    pub fn config(&self) -> Arc<Configuration> {
        self.refresher.config.get()
    }

    /// Yields right away for each watched value, then whenever the clock
    /// strings or the configuration change. Each item means "render again".
    pub fn watch(&self) -> impl Stream<Item = ()> + Send + 'static {
        stream::select(
            self.refresher.clock.watch().map(|_| ()),
            self.refresher.config.watch().map(|_| ()),
        )
    }

    /// Renders the bar against the host's current state.
    pub fn render(&self) -> RenderedBar {
        let config = self.refresher.config.get();
        let clock = self.refresher.clock.get();
        let ctx = TemplateContext::new(self.refresher.host.as_ref(), &clock);
        render::render_bar(&config, &ctx)
    }

    /// Runs the action of the item at `index` in the configured list.
    #[instrument(skip(self))]
    pub fn click(&self, index: usize) -> DispatchOutcome {
        let config = self.refresher.config.get();
        let Some(item) = config.items.get(index) else {
            debug!("Click on unknown item");
            return DispatchOutcome::Idle;
        };

        ActionDispatcher::new(self.refresher.host.as_ref()).dispatch(item)
    }

    /// Layout size hint for the host.
    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }

    /// Example configuration for card pickers.
    pub fn stub_config() -> Value {
        config::stub_config()
    }
}

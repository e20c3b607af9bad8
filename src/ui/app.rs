use crate::config::DemoVariant;
use crate::error::TimerError;
use crate::mvi::Reducer;
use crate::scheduler::TickScheduler;
use crate::store::{Subscription, TimerStore};
use crate::timer::input::{parse_duration, parse_start_time};
use crate::timer::selectors::{self, ControlAvailability};
use crate::timer::{raw, TimerIntent, TimerState};
use crate::ui::controls::{Control, ControlsIntent, ControlsReducer, ControlsState, Notice};
use tokio::runtime::Handle;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The counter view: reads the store, owns the control panel state and the
/// tick scheduler, and turns user actions into store dispatches.
///
/// Dropping the app tears down its subscriptions and cancels any pending
/// tick.
pub struct App {
    should_quit: bool,
    variant: DemoVariant,
    store: TimerStore,
    controls: ControlsState,
    scheduler: TickScheduler,
    _redraw: Option<Subscription>,
}

impl App {
    pub fn new(store: TimerStore, variant: DemoVariant, runtime: Handle) -> Self {
        let scheduler = TickScheduler::attach(&store, runtime);
        let mut app = Self {
            should_quit: false,
            variant,
            store,
            controls: ControlsState::default(),
            scheduler,
            _redraw: None,
        };
        app.prefill_fields();
        app
    }

    /// Call `on_change` after every store transition, for as long as the app
    /// lives. Replaces any previous watcher.
    pub fn watch<F>(&mut self, on_change: F)
    where
        F: Fn(&TimerState) + Send + Sync + 'static,
    {
        self._redraw = Some(self.store.subscribe(on_change));
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn variant(&self) -> DemoVariant {
        self.variant
    }

    pub fn timer(&self) -> TimerState {
        self.store.state()
    }

    pub fn controls(&self) -> &ControlsState {
        &self.controls
    }

    pub fn availability(&self) -> ControlAvailability {
        selectors::availability(&self.timer())
    }

    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_armed()
    }

    pub fn dispatch_controls(&mut self, intent: ControlsIntent) {
        dispatch_mvi!(self, controls, ControlsReducer, intent);
    }

    /// Activate the focused control: press a button or submit a form.
    pub fn activate_focused(&mut self) {
        self.activate(self.controls.focus);
    }

    /// Activate `control`. Disabled controls ignore activation.
    pub fn activate(&mut self, control: Control) {
        match control {
            Control::Stop => self.stop(),
            Control::Reset => self.reset(),
            Control::Start => self.start(),
            Control::Duration => self.submit_duration(),
            Control::StartTime => self.submit_start_time(),
        }
    }

    pub fn start(&mut self) {
        if self.availability().start {
            self.send(TimerIntent::Start);
        }
    }

    pub fn stop(&mut self) {
        if self.availability().stop {
            self.send(TimerIntent::Stop);
        }
    }

    pub fn reset(&mut self) {
        if self.availability().reset {
            self.send(TimerIntent::Reset);
        }
    }

    pub fn submit_duration(&mut self) {
        if !self.availability().configure {
            return;
        }
        match parse_duration(&self.controls.duration_input) {
            Ok(duration) => {
                self.configure(TimerIntent::SetDuration { duration });
                self.notify(Notice::Info(format!("Duration set to {duration}ms")));
            }
            Err(err) => self.reject(err),
        }
    }

    pub fn submit_start_time(&mut self) {
        if !self.availability().configure {
            return;
        }
        match parse_start_time(&self.controls.start_time_input) {
            Ok(start_time) => {
                self.configure(TimerIntent::SetStartTime { start_time });
                self.notify(Notice::Info(format!("Start time set to {start_time}s")));
            }
            Err(err) => self.reject(err),
        }
    }

    /// Configuration changes rewind the countdown in the slice variant.
    fn configure(&mut self, intent: TimerIntent) {
        self.send(intent);
        if self.variant == DemoVariant::Slice {
            self.send(TimerIntent::Reset);
        }
        self.prefill_fields();
    }

    /// Dispatch through the style this view demonstrates.
    fn send(&mut self, intent: TimerIntent) {
        let result = match self.variant {
            DemoVariant::Store => self.store.dispatch_raw(raw::RawAction::from(intent)),
            DemoVariant::Slice => self.store.dispatch(intent),
        };
        if let Err(err) = result {
            self.reject(err);
        }
    }

    fn reject(&mut self, err: TimerError) {
        tracing::warn!(field = %err.field(), error = %err, "Configuration rejected");
        self.notify(Notice::Error(err.to_string()));
    }

    fn notify(&mut self, notice: Notice) {
        self.dispatch_controls(ControlsIntent::Notify(notice));
    }

    fn prefill_fields(&mut self) {
        let state = self.timer();
        self.dispatch_controls(ControlsIntent::Prefill {
            duration: selectors::duration(&state),
            start_time: selectors::start_time(&state),
        });
    }
}

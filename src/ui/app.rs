use crate::clipboard::copy_text;
use crate::link::open_link;
use crate::submission::SubmissionController;
use crate::ui::events::AppEvent;
use crate::ui::form::{check_input, FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::ui::view::FormView;
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

/// How long a transient hint stays under the trigger.
pub const HINT_TTL: Duration = Duration::from_secs(4);

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Hint {
    text: String,
    shown_at: Instant,
}

/// One running form. Owns its state; nothing is shared between instances.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Form state (MVI pattern).
    form: FormState,
    /// Notice outside the form state: blocked submits and link actions.
    hint: Option<Hint>,
    controller: SubmissionController,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(
        controller: SubmissionController,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            size: None,
            form: FormState::default(),
            hint: None,
            controller,
            runtime,
            events,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_ref().map(|hint| hint.text.as_str())
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn view(&self) -> FormView<'_> {
        FormView::project(&self.form, self.hint())
    }

    /// Dispatch an intent to the form reducer.
    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn on_tick(&mut self) {
        if self
            .hint
            .as_ref()
            .is_some_and(|hint| hint.shown_at.elapsed() >= HINT_TTL)
        {
            self.hint = None;
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    // -- Input editing ----------------------------------------------------------

    pub fn set_input_url(&mut self, value: String) {
        self.hint = None;
        self.dispatch_form(FormIntent::SetInputUrl { value });
    }

    pub fn push_char(&mut self, ch: char) {
        let mut value = self.form.input_url().to_string();
        value.push(ch);
        self.set_input_url(value);
    }

    pub fn backspace(&mut self) {
        let mut value = self.form.input_url().to_string();
        if value.pop().is_some() {
            self.set_input_url(value);
        }
    }

    pub fn clear_input(&mut self) {
        if !self.form.input_url().is_empty() {
            self.set_input_url(String::new());
        }
    }

    /// Inserts pasted text; line breaks are dropped as a single-line field would.
    pub fn on_paste(&mut self, text: &str) {
        let pasted: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if pasted.is_empty() {
            return;
        }
        let mut value = self.form.input_url().to_string();
        value.push_str(&pasted);
        self.set_input_url(value);
    }

    // -- Submission -------------------------------------------------------------

    /// Starts a cycle for the current input.
    ///
    /// Returns false when nothing was started: a cycle is already in flight
    /// (the trigger is disabled) or the input control rejected the value.
    pub fn submit(&mut self) -> bool {
        if self.form.is_in_flight() {
            tracing::debug!(target: "shortener::ui", "Submit ignored while in flight");
            return false;
        }

        if let Err(issue) = check_input(self.form.input_url()) {
            self.show_hint(issue.hint());
            return false;
        }

        self.hint = None;
        let input = self.form.input_url().to_string();
        let (form, request) = SubmissionController::begin(std::mem::take(&mut self.form), &input);
        self.form = form;

        tracing::debug!(
            target: "shortener::ui",
            endpoint = self.controller.client().endpoint(),
            "Submitting URL"
        );

        let events = self.events.clone();
        self.controller
            .spawn(&self.runtime, request, move |intent| {
                if events.send(AppEvent::SubmissionSettled(intent)).is_err() {
                    tracing::debug!(
                        target: "shortener::ui",
                        "View closed before the request settled; dropping result"
                    );
                }
            });
        true
    }

    /// Applies the completion of the running cycle.
    pub fn on_submission_settled(&mut self, intent: FormIntent) {
        if !intent.is_completion() {
            tracing::warn!(target: "shortener::ui", ?intent, "Ignoring non-completion intent");
            return;
        }
        self.dispatch_form(intent);
    }

    // -- Link actions -----------------------------------------------------------

    pub fn open_result(&mut self) {
        let Some(url) = self.form.result().map(str::to_string) else {
            return;
        };
        match open_link(&url) {
            Ok(()) => self.show_hint("Opened in browser"),
            Err(err) => {
                tracing::warn!(target: "shortener::ui", error = %err, "Failed to open link");
                self.show_hint("Could not open the link");
            }
        }
    }

    pub fn copy_result(&mut self) {
        let Some(url) = self.form.result().map(str::to_string) else {
            return;
        };
        match copy_text(&url) {
            Ok(()) => self.show_hint("Copied to clipboard"),
            Err(err) => {
                tracing::warn!(target: "shortener::ui", error = %err, "Failed to copy link");
                self.show_hint("Could not copy the link");
            }
        }
    }

    fn show_hint(&mut self, text: &str) {
        self.hint = Some(Hint {
            text: text.to_string(),
            shown_at: Instant::now(),
        });
    }
}

//! Editor widget controller
//!
//! Headless model of one embedded code block: the editable text, the
//! highlighted overlay rendered behind it, the language selector, the run
//! button and its output panel. The host owns the actual UI and forwards
//! user events to the methods here, stopping their propagation to any
//! enclosing editor itself.
//!
//! Output panel state:
//!
//! ```text
//! Idle --run--> OutputVisible --clear--> Idle
//! ```

mod clipboard;
mod debounce;

use std::time::Instant;

pub use clipboard::{Clipboard, CopyFeedback, COPIED_LABEL, COPY_LABEL};
pub use debounce::Debouncer;

use crate::config::Config;
use crate::exec::{self, LogEntry};
use crate::fence;
use crate::syntax::registry::{self, Registry};

/// Callback receiving the current fenced text to persist
pub type PersistFn = Box<dyn FnMut(&str)>;

/// Label of the selector entry for unhighlighted text
pub const PLAIN_TEXT_LABEL: &str = "Plain Text";

/// Whether the output panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputState {
    Idle,
    OutputVisible,
}

/// One rendered line of the output panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// Level name, used as the line's class
    pub class: &'static str,
    /// Plain text; the host must insert it as text, not markup
    pub text: String,
}

/// One entry of the language selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Overlay scroll position, mirrored from the editable layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOffset {
    pub top: u32,
    pub left: u32,
}

#[derive(Debug, Clone)]
struct OutputPanel {
    state: OutputState,
    entries: Vec<LogEntry>,
}

impl OutputPanel {
    fn hidden() -> Self {
        Self {
            state: OutputState::Idle,
            entries: Vec::new(),
        }
    }

    fn hide(&mut self) {
        self.state = OutputState::Idle;
        self.entries.clear();
    }
}

/// One code block editor instance
pub struct EditorWidget<'r> {
    registry: &'r Registry,
    config: Config,
    /// Fenced serialization exposed to the host (`data-raw`)
    raw: String,
    alias: String,
    text: String,
    overlay: String,
    overlay_scroll: ScrollOffset,
    height: u32,
    /// Run button present
    can_run: bool,
    /// Created on first need, kept when the run button goes away
    output: Option<OutputPanel>,
    persist: Option<PersistFn>,
    pending_save: Debouncer<String>,
    copy_feedback: CopyFeedback,
}

impl EditorWidget<'static> {
    /// Create a widget backed by the process-wide registry
    pub fn new(raw: &str, persist: Option<PersistFn>, config: Config) -> Self {
        Self::with_registry(registry::global(), raw, persist, config)
    }
}

impl<'r> EditorWidget<'r> {
    /// Create a widget resolving languages in `registry`
    pub fn with_registry(
        registry: &'r Registry,
        raw: &str,
        persist: Option<PersistFn>,
        config: Config,
    ) -> Self {
        let fence::Fence { alias, body } = fence::parse(raw);
        let overlay = registry.highlight(&body, &alias);
        let height = config.initial_height(body.split('\n').count());
        let can_run = registry.is_runnable(&alias);
        // Runnable blocks get their (hidden) output panel up front
        let output = can_run.then(OutputPanel::hidden);

        Self {
            registry,
            raw: raw.to_string(),
            alias,
            text: body,
            overlay,
            overlay_scroll: ScrollOffset::default(),
            height,
            can_run,
            output,
            persist,
            pending_save: Debouncer::new(config.debounce),
            copy_feedback: CopyFeedback::new(config.copied_feedback),
            config,
        }
    }

    /// Current fenced text
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Current language alias as selected
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Current editable text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Highlighted markup for the overlay layer
    pub fn overlay(&self) -> &str {
        &self.overlay
    }

    pub fn overlay_scroll(&self) -> ScrollOffset {
        self.overlay_scroll
    }

    /// Editor height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the run button is shown
    pub fn can_run(&self) -> bool {
        self.can_run
    }

    pub fn output_state(&self) -> OutputState {
        self.output
            .as_ref()
            .map_or(OutputState::Idle, |panel| panel.state)
    }

    /// Log entries currently in the output panel
    pub fn output_entries(&self) -> &[LogEntry] {
        self.output
            .as_ref()
            .map(|panel| panel.entries.as_slice())
            .unwrap_or_default()
    }

    /// Output panel contents as text lines
    pub fn output_lines(&self) -> Vec<OutputLine> {
        self.output_entries()
            .iter()
            .map(|entry| OutputLine {
                class: entry.level.name(),
                text: entry.to_string(),
            })
            .collect()
    }

    /// The user changed the text
    pub fn edit(&mut self, text: &str, now: Instant) {
        self.text = text.to_string();
        self.overlay = self.registry.highlight(&self.text, &self.alias);
        self.height = self.config.initial_height(self.text.split('\n').count());
        self.update_raw();
        if self.persist.is_some() {
            self.pending_save.schedule(self.raw.clone(), now);
        }
    }

    /// Fire the debounced persistence callback if it is due.
    ///
    /// Returns whether the callback ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(raw) = self.pending_save.poll(now) else {
            return false;
        };
        if let Some(persist) = self.persist.as_mut() {
            persist(&raw);
        }
        true
    }

    /// When the pending save becomes due, for scheduling the next `poll`
    pub fn save_deadline(&self) -> Option<Instant> {
        self.pending_save.deadline()
    }

    /// The editable layer scrolled
    pub fn scroll(&mut self, top: u32, left: u32) {
        self.overlay_scroll = ScrollOffset { top, left };
    }

    /// The user picked another language. Saves immediately.
    pub fn set_language(&mut self, alias: &str) {
        self.alias = alias.to_string();
        self.overlay = self.registry.highlight(&self.text, &self.alias);
        self.update_raw();
        self.update_run_button();

        // The immediate save carries the latest text, superseding any
        // pending debounced one.
        self.pending_save.cancel();
        if let Some(persist) = self.persist.as_mut() {
            persist(&self.raw);
        }
    }

    /// Run the block, replacing the output panel's contents.
    ///
    /// Does nothing when the language is not runnable.
    pub fn run(&mut self) -> &[LogEntry] {
        if !self.can_run {
            return &[];
        }
        let entries = exec::execute_with(self.registry, &self.text, &self.alias);
        let panel = self.output.get_or_insert_with(OutputPanel::hidden);
        panel.state = OutputState::OutputVisible;
        panel.entries = entries;
        &panel.entries
    }

    /// Hide the output panel and discard its entries
    pub fn clear_output(&mut self) {
        if let Some(panel) = self.output.as_mut() {
            panel.hide();
        }
    }

    /// Copy the current text. Failures are logged, not returned.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        self.copy_feedback.copy(clipboard, &self.text, now)
    }

    /// Copy button label at `now`
    pub fn copy_label(&self, now: Instant) -> &'static str {
        self.copy_feedback.label(now)
    }

    /// Entries for the language selector, current language selected
    pub fn language_options(&self) -> Vec<LanguageOption> {
        let current = self.registry.resolve(&self.alias);
        let mut options = vec![LanguageOption {
            value: String::new(),
            label: PLAIN_TEXT_LABEL.to_string(),
            selected: current.is_none(),
        }];
        options.extend(self.registry.languages().iter().map(|lang| LanguageOption {
            value: lang.primary_alias().to_string(),
            label: lang.name.clone(),
            selected: lang.has_alias(&self.alias),
        }));
        options
    }

    fn update_raw(&mut self) {
        self.raw = fence::serialize(&self.alias, &self.text);
    }

    fn update_run_button(&mut self) {
        self.can_run = self.registry.is_runnable(&self.alias);
        if !self.can_run {
            if let Some(panel) = self.output.as_mut() {
                panel.state = OutputState::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::clipboard::tests::MemoryClipboard;
    use super::*;
    use crate::exec::{LogLevel, LogValue, NO_OUTPUT_MESSAGE};

    fn recording() -> (Rc<RefCell<Vec<String>>>, PersistFn) {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&saved);
        let persist: PersistFn = Box::new(move |raw: &str| sink.borrow_mut().push(raw.to_string()));
        (saved, persist)
    }

    #[test]
    fn test_new_highlights_and_keeps_raw() {
        let raw = "```js\nfoo(1)\n```";
        let widget = EditorWidget::new(raw, None, Config::default());
        assert_eq!(widget.raw(), raw);
        assert_eq!(widget.alias(), "js");
        assert_eq!(widget.text(), "foo(1)");
        assert!(widget.overlay().starts_with("<span class=\"ce-function\">foo</span>"));
        assert!(widget.can_run());
        assert_eq!(widget.output_state(), OutputState::Idle);
        assert_eq!(widget.height(), 80);
    }

    #[test]
    fn test_edit_rehighlights_and_serializes() {
        let now = Instant::now();
        let mut widget = EditorWidget::new("```py\nx\n```", None, Config::default());
        widget.edit("def f():\n    return 1", now);
        assert_eq!(widget.raw(), "```py\ndef f():\n    return 1\n```");
        assert!(widget.overlay().contains("<span class=\"ce-keyword\">def</span>"));
        // Without a persistence hook nothing is scheduled
        assert_eq!(widget.save_deadline(), None);
    }

    #[test]
    fn test_edits_debounced_to_single_save() {
        let start = Instant::now();
        let (saved, persist) = recording();
        let mut widget = EditorWidget::new("```js\n\n```", Some(persist), Config::default());

        widget.edit("a", start);
        widget.edit("ab", start + Duration::from_millis(200));
        widget.edit("abc", start + Duration::from_millis(400));

        assert!(!widget.poll(start + Duration::from_millis(800)));
        assert!(saved.borrow().is_empty());

        assert!(widget.poll(start + Duration::from_millis(900)));
        assert_eq!(*saved.borrow(), vec!["```js\nabc\n```".to_string()]);
        assert!(!widget.poll(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_set_language_saves_immediately() {
        let now = Instant::now();
        let (saved, persist) = recording();
        let mut widget = EditorWidget::new("```js\nx\n```", Some(persist), Config::default());

        widget.edit("echo hi", now);
        widget.set_language("sh");

        assert_eq!(*saved.borrow(), vec!["```sh\necho hi\n```".to_string()]);
        assert_eq!(widget.save_deadline(), None);
        assert!(widget.overlay().contains("ce-builtin"));
        assert!(!widget.can_run());
    }

    #[test]
    fn test_run_and_clear() {
        let mut widget = EditorWidget::new("```js\nconsole.log('hi', 2)\n```", None, Config::default());
        let entries = widget.run().to_vec();
        assert_eq!(
            entries,
            vec![LogEntry::new(
                LogLevel::Log,
                vec![LogValue::Scalar("hi".into()), LogValue::Scalar("2".into())]
            )]
        );
        assert_eq!(widget.output_state(), OutputState::OutputVisible);
        assert_eq!(
            widget.output_lines(),
            vec![OutputLine {
                class: "log",
                text: "hi 2".to_string()
            }]
        );

        widget.clear_output();
        assert_eq!(widget.output_state(), OutputState::Idle);
        assert!(widget.output_entries().is_empty());
    }

    #[test]
    fn test_run_replaces_previous_output() {
        let now = Instant::now();
        let mut widget = EditorWidget::new("```js\nconsole.log(1)\n```", None, Config::default());
        widget.run();
        widget.edit("let x = 1", now);
        let entries = widget.run();
        assert_eq!(entries, [LogEntry::message(LogLevel::Info, NO_OUTPUT_MESSAGE)]);
    }

    #[test]
    fn test_run_not_offered_for_plain_languages() {
        let mut widget = EditorWidget::new("```python\nprint(1)\n```", None, Config::default());
        assert!(!widget.can_run());
        assert!(widget.run().is_empty());
        assert_eq!(widget.output_state(), OutputState::Idle);
    }

    #[test]
    fn test_switching_to_runnable_adds_run() {
        let mut widget = EditorWidget::new("```\nthrow new Error('x')\n```", None, Config::default());
        assert!(!widget.can_run());
        widget.set_language("TS");
        assert!(widget.can_run());

        let entries = widget.run();
        assert_eq!(entries, [LogEntry::message(LogLevel::Error, "Error: x")]);

        widget.set_language("md");
        assert!(!widget.can_run());
        assert_eq!(widget.output_state(), OutputState::Idle);
    }

    #[test]
    fn test_scroll_mirrors_editable_layer() {
        let mut widget = EditorWidget::new("```js\nx\n```", None, Config::default());
        widget.scroll(120, 8);
        assert_eq!(widget.overlay_scroll(), ScrollOffset { top: 120, left: 8 });
    }

    #[test]
    fn test_copy() {
        let now = Instant::now();
        let mut widget = EditorWidget::new("```sh\nls -la\n```", None, Config::default());
        let mut clipboard = MemoryClipboard::default();

        assert!(widget.copy(&mut clipboard, now));
        assert_eq!(clipboard.contents.as_deref(), Some("ls -la"));
        assert_eq!(widget.copy_label(now), COPIED_LABEL);
        assert_eq!(widget.copy_label(now + Duration::from_secs(3)), COPY_LABEL);
    }

    #[test]
    fn test_language_options() {
        let widget = EditorWidget::new("```JSON\n{}\n```", None, Config::default());
        let options = widget.language_options();
        assert_eq!(options.len(), 10);
        assert_eq!(options[0].label, PLAIN_TEXT_LABEL);
        assert!(!options[0].selected);

        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, "json");

        let plain = EditorWidget::new("```\nx\n```", None, Config::default());
        assert!(plain.language_options()[0].selected);
    }

    #[test]
    fn test_custom_registry() {
        let registry = Registry::with_languages(Vec::new()).unwrap();
        let widget = EditorWidget::with_registry(&registry, "```js\n<b>\n```", None, Config::default());
        assert_eq!(widget.overlay(), "&lt;b&gt;");
        assert!(!widget.can_run());
    }
}

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use codeblock::exec::{self, LogLevel};
use codeblock::fence::{self, Fence};
use codeblock::syntax::{escape_html, highlight, registry, tokenize};
use codeblock::widget::{EditorWidget, PersistFn};
use codeblock::Config;
use proptest::prelude::*;
use regex::Regex;

// Strategies

fn arb_alias() -> impl Strategy<Value = String> {
    let aliases: Vec<String> = registry::global()
        .languages()
        .iter()
        .flat_map(|lang| lang.aliases.clone())
        .collect();
    prop::sample::select(aliases)
}

fn arb_source() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~\n\t]{0,80}",
        prop::collection::vec(
            prop_oneof![
                Just("let"),
                Just("def"),
                Just("SELECT"),
                Just("console.log("),
                Just("\"str\""),
                Just("'x'"),
                Just("// c\n"),
                Just("# h\n"),
                Just("/* b */"),
                Just("<div>"),
                Just("$HOME"),
                Just("3.14"),
                Just(" / "),
                Just("&&"),
                Just("\n"),
                Just("é"),
            ],
            0..24
        )
        .prop_map(|parts| parts.concat()),
    ]
}

fn arb_case(alias: String) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), alias.len()).prop_map(move |upper| {
        alias
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

/// Undo rendering: drop span tags, then unescape
fn plain_text(markup: &str) -> String {
    let tags = Regex::new(r#"<span class="[a-z-]+">|</span>"#).unwrap();
    tags.replace_all(markup, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

proptest! {
    #[test]
    fn resolve_ignores_case(cased in arb_alias().prop_flat_map(arb_case)) {
        let lower = cased.to_ascii_lowercase();
        let a = registry::resolve(&cased).map(|lang| lang.name.clone());
        let b = registry::resolve(&lower).map(|lang| lang.name.clone());
        prop_assert!(a.is_some());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn unknown_alias_is_escaped_text(text in arb_source(), suffix in "[a-z]{0,6}") {
        let alias = format!("nolang{suffix}");
        prop_assert_eq!(highlight(&text, &alias), escape_html(&text));
    }

    #[test]
    fn highlight_is_deterministic(text in arb_source(), alias in arb_alias()) {
        prop_assert_eq!(highlight(&text, &alias), highlight(&text, &alias));
    }

    #[test]
    fn highlight_preserves_text(text in arb_source(), alias in arb_alias()) {
        prop_assert_eq!(plain_text(&highlight(&text, &alias)), text);
    }

    #[test]
    fn tokens_make_progress(text in arb_source(), alias in arb_alias()) {
        let Some(lang) = registry::resolve(&alias) else {
            return Err(TestCaseError::fail("builtin alias did not resolve"));
        };
        let tokens = tokenize(&text, lang);
        prop_assert!(tokens.len() <= text.chars().count());
        prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
        let joined: String = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn fence_round_trip(alias in "[a-z0-9_]{0,8}", body in "[a-z0-9 ;(){}=\n]{0,40}") {
        let body = body.trim().to_string();
        let raw = fence::serialize(&alias, &body);
        prop_assert!(fence::should_use(&raw));
        prop_assert_eq!(fence::parse(&raw), Fence::new(&alias, &body));
    }

    #[test]
    fn edits_in_window_save_once(gaps in prop::collection::vec(0u64..500, 1..8)) {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&saved);
        let persist: PersistFn = Box::new(move |raw: &str| sink.borrow_mut().push(raw.to_string()));
        let config = Config::default();
        let delay = config.debounce;
        let mut widget = EditorWidget::new("```js\n\n```", Some(persist), config);

        let mut now = Instant::now();
        for (i, gap) in gaps.iter().enumerate() {
            now += Duration::from_millis(*gap);
            widget.edit(&format!("let x = {i};"), now);
            prop_assert!(!widget.poll(now));
        }
        prop_assert!(widget.poll(now + delay));

        let last = format!("```js\nlet x = {};\n```", gaps.len() - 1);
        prop_assert_eq!(saved.borrow().clone(), vec![last]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn thrown_errors_are_single_entries(message in "[a-z ]{0,16}") {
        let entries = exec::execute(&format!("throw new Error('{message}')"), "js");
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(entries[0].level, LogLevel::Error);
    }

    #[test]
    fn silent_runs_report_success(n in 0i32..1000) {
        let entries = exec::execute(&format!("const n = {n}; n * 2;"), "javascript");
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(entries[0].level, LogLevel::Info);
        prop_assert_eq!(entries[0].to_string(), exec::NO_OUTPUT_MESSAGE);
    }
}

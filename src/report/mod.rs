//! report
//!
//! Failure classification and the bug-report submission flow.
//!
//! # Flow
//!
//! Every dispatched handler is wrapped by [`guard`]. On failure the
//! reporter always displays the message, then decides whether to offer
//! a bug report:
//!
//! - user-facing errors stop after display, CI or not;
//! - reportable errors under a `CI` marker stop after display;
//! - otherwise a yes/no prompt (default no) offers to open a pre-filled
//!   issue URL in the browser.
//!
//! The original error is returned in every branch so the process exits
//! non-zero. Opening the browser is best-effort and can never mask the
//! original failure.
//!
//! # Capabilities
//!
//! The prompt and the browser are injected behind traits so the
//! classification logic is pure and testable; the orchestrator wires
//! [`TerminalPrompt`] and [`SystemBrowser`].

use std::env;
use std::io;

use crate::core::{CommandError, ErrorKind};
use crate::ui;

/// Where pre-filled bug reports are submitted.
pub const ISSUE_URL: &str = "https://github.com/airlift-cli/airlift/issues/new";

/// Yes/no capability for the "file a bug?" question.
pub trait UserPrompt {
    /// Ask whether to open a bug report. Must default to "no".
    fn confirm_report(&self) -> bool;
}

/// Capability for opening a URL in the user's default browser.
pub trait BrowserOpener {
    fn open_url(&self, url: &str) -> io::Result<()>;
}

/// Real prompt: dialoguer confirmation, default no; prompt failures
/// (no terminal) count as "no".
pub struct TerminalPrompt;

impl UserPrompt for TerminalPrompt {
    fn confirm_report(&self) -> bool {
        ui::prompts::confirm("Would you like to open a pre-filled bug report?", false)
    }
}

/// Real browser opener backed by the `open` crate.
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open_url(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

/// A transient description of a command failure, used to build the
/// issue submission.
#[derive(Debug, Clone)]
pub struct FailureReport {
    pub command: String,
    pub kind: ErrorKind,
    pub message: String,
    pub detail: Option<String>,
}

impl FailureReport {
    pub fn from_error(command: &str, error: &CommandError) -> Self {
        Self {
            command: command.to_string(),
            kind: error.kind(),
            message: error.message().to_string(),
            detail: error.detail().map(str::to_string),
        }
    }

    /// Issue title, keyed by the failing command.
    pub fn issue_title(&self) -> String {
        format!("{} error", self.command)
    }

    /// Issue body: tool version, error message, and the detail blob in
    /// a fenced code block.
    pub fn issue_body(&self) -> String {
        format!(
            "\n# Status\nairlift ver {}\n\n# Error message\n{}\n\n# Detail\n```\n{}\n```\n",
            crate::VERSION,
            self.message,
            self.detail.as_deref().unwrap_or("(no further detail)")
        )
    }

    /// The pre-filled submission URL with encoded title and body.
    pub fn issue_url(&self) -> String {
        match reqwest::Url::parse_with_params(
            ISSUE_URL,
            &[("title", self.issue_title()), ("body", self.issue_body())],
        ) {
            Ok(url) => url.to_string(),
            // The base is a constant and always parses; fall back to the
            // bare issue page rather than losing the report entirely.
            Err(_) => ISSUE_URL.to_string(),
        }
    }
}

/// Whether interactive reporting is suppressed by the environment.
///
/// Any value of the `CI` marker variable counts.
pub fn ci_suppressed() -> bool {
    env::var_os("CI").is_some()
}

/// The failure classifier and reporter.
pub struct Reporter<'a> {
    prompt: &'a dyn UserPrompt,
    browser: &'a dyn BrowserOpener,
    ci: bool,
}

impl<'a> Reporter<'a> {
    pub fn new(prompt: &'a dyn UserPrompt, browser: &'a dyn BrowserOpener, ci: bool) -> Self {
        Self {
            prompt,
            browser,
            ci,
        }
    }

    /// Display and optionally report a command failure.
    pub fn handle(&self, command: &str, error: &CommandError) {
        let report = FailureReport::from_error(command, error);
        ui::output::error(format!("error: {}", report.message));

        if report.kind == ErrorKind::UserFacing {
            return;
        }
        if self.ci {
            return;
        }

        ui::output::info("");
        if self.prompt.confirm_report() {
            let url = report.issue_url();
            ui::output::info(format!("Please submit the report here: {url}"));
            // Best-effort; a browser that cannot open must not replace
            // the original error.
            let _ = self.browser.open_url(&url);
        }
        ui::output::info("");
    }
}

/// Wrap a handler result: pass successes through, run the report flow
/// on failure, and re-raise the original error either way.
pub fn guard<T>(
    reporter: &Reporter<'_>,
    command: &str,
    result: Result<T, CommandError>,
) -> Result<T, CommandError> {
    match result {
        Ok(value) => Ok(value),
        Err(error) => {
            reporter.handle(command, &error);
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakePrompt {
        answer: bool,
        asked: Cell<usize>,
    }

    impl FakePrompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Cell::new(0),
            }
        }
    }

    impl UserPrompt for FakePrompt {
        fn confirm_report(&self) -> bool {
            self.asked.set(self.asked.get() + 1);
            self.answer
        }
    }

    #[derive(Default)]
    struct FakeBrowser {
        opened: RefCell<Vec<String>>,
    }

    impl BrowserOpener for FakeBrowser {
        fn open_url(&self, url: &str) -> io::Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct FailingBrowser;

    impl BrowserOpener for FailingBrowser {
        fn open_url(&self, _url: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
        }
    }

    #[test]
    fn user_facing_errors_never_prompt() {
        let prompt = FakePrompt::answering(true);
        let browser = FakeBrowser::default();
        let reporter = Reporter::new(&prompt, &browser, false);

        reporter.handle("deploy", &CommandError::user("artifact not found"));

        assert_eq!(prompt.asked.get(), 0);
        assert!(browser.opened.borrow().is_empty());
    }

    #[test]
    fn ci_suppresses_the_prompt_for_reportable_errors() {
        let prompt = FakePrompt::answering(true);
        let browser = FakeBrowser::default();
        let reporter = Reporter::new(&prompt, &browser, true);

        reporter.handle("deploy", &CommandError::bug("boom"));

        assert_eq!(prompt.asked.get(), 0);
        assert!(browser.opened.borrow().is_empty());
    }

    #[test]
    fn declined_prompt_opens_nothing() {
        let prompt = FakePrompt::answering(false);
        let browser = FakeBrowser::default();
        let reporter = Reporter::new(&prompt, &browser, false);

        reporter.handle("deploy", &CommandError::bug("boom"));

        assert_eq!(prompt.asked.get(), 1);
        assert!(browser.opened.borrow().is_empty());
    }

    #[test]
    fn accepted_prompt_opens_the_issue_url() {
        let prompt = FakePrompt::answering(true);
        let browser = FakeBrowser::default();
        let reporter = Reporter::new(&prompt, &browser, false);

        reporter.handle("deploy", &CommandError::bug("boom").with_detail("trace"));

        let opened = browser.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with(ISSUE_URL));
        assert!(opened[0].contains("title="));
        assert!(opened[0].contains("body="));
    }

    #[test]
    fn browser_failure_does_not_panic_or_mask() {
        let prompt = FakePrompt::answering(true);
        let reporter = Reporter::new(&prompt, &FailingBrowser, false);
        reporter.handle("deploy", &CommandError::bug("boom"));
    }

    #[test]
    fn guard_passes_success_through_untouched() {
        let prompt = FakePrompt::answering(true);
        let browser = FakeBrowser::default();
        let reporter = Reporter::new(&prompt, &browser, false);

        let result = guard(&reporter, "login", Ok(42));
        assert_eq!(result.unwrap(), 42);
        assert_eq!(prompt.asked.get(), 0);
    }

    #[test]
    fn guard_reraises_the_original_error() {
        let prompt = FakePrompt::answering(false);
        let browser = FakeBrowser::default();
        let reporter = Reporter::new(&prompt, &browser, false);

        let result: Result<(), _> = guard(&reporter, "login", Err(CommandError::bug("boom")));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.kind(), ErrorKind::Reportable);
    }

    #[test]
    fn issue_body_contains_version_message_and_detail() {
        let report = FailureReport::from_error(
            "deploy",
            &CommandError::bug("upload failed").with_detail("stack trace here"),
        );
        let body = report.issue_body();
        assert!(body.contains(crate::VERSION));
        assert!(body.contains("upload failed"));
        assert!(body.contains("```\nstack trace here\n```"));
        assert_eq!(report.issue_title(), "deploy error");
    }

    #[test]
    fn issue_url_percent_encodes_parameters() {
        let report = FailureReport::from_error("deploy", &CommandError::bug("a b & c"));
        let url = report.issue_url();
        assert!(url.starts_with(ISSUE_URL));
        // Form-urlencoded query: spaces become '+', '&' is escaped.
        assert!(url.contains("title=deploy+error"));
        assert!(!url.contains("a b & c"));
    }
}

//! Test doubles shared by the installer's unit tests.

use pm_core::error::Result;
use pm_core::{CommandOutput, CommandRunner, CommandSpec};
use std::cell::RefCell;
use std::fs;
use std::path::Path;

/// Records every command and fails the ones whose rendering contains one
/// of the configured fragments. A successful `git clone` creates its
/// destination directory so later steps see the checkout.
#[derive(Default)]
pub struct FakeRunner {
    pub calls: RefCell<Vec<CommandSpec>>,
    failing: Vec<String>,
}

impl FakeRunner {
    pub fn failing_on(fragments: &[&str]) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failing: fragments.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn rendered(&self) -> Vec<String> {
        self.calls.borrow().iter().map(CommandSpec::display).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn execute(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(spec.clone());
        let rendered = spec.display();
        if self.failing.iter().any(|fragment| rendered.contains(fragment)) {
            return Ok(CommandOutput::failed(1));
        }

        if spec.program == "git" && spec.args.first().map(String::as_str) == Some("clone") {
            if let Some(dest) = spec.args.last() {
                fs::create_dir_all(Path::new(dest))?;
            }
        }
        Ok(CommandOutput::succeeded())
    }
}

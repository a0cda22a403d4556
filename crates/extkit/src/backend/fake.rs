//! In-memory backend for tests.

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::types::{ExtensionId, ExtensionSet};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
struct State {
    installed: BTreeMap<String, ExtensionSet>,
    uninstall_failures: HashMap<ExtensionId, u32>,
    install_failures: HashSet<ExtensionId>,
    list_fails: bool,
    calls: Vec<String>,
}

/// Backend that keeps installed extensions in memory and fails on request.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<State>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installed(self, profile: &str, ids: &[&str]) -> Self {
        self.state
            .lock()
            .unwrap()
            .installed
            .insert(profile.to_string(), ids.iter().copied().map(ExtensionId::from).collect());
        self
    }

    /// Make the next `times` uninstalls of `id` fail.
    pub fn failing_uninstall(self, id: &str, times: u32) -> Self {
        self.state
            .lock()
            .unwrap()
            .uninstall_failures
            .insert(ExtensionId::new(id), times);
        self
    }

    pub fn failing_install(self, id: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .install_failures
            .insert(ExtensionId::new(id));
        self
    }

    pub fn failing_list(self) -> Self {
        self.state.lock().unwrap().list_fails = true;
        self
    }

    pub fn installed(&self, profile: &str) -> ExtensionSet {
        self.state
            .lock()
            .unwrap()
            .installed
            .get(profile)
            .cloned()
            .unwrap_or_default()
    }

    /// Calls made so far, as `install:<id>` / `uninstall:<id>`.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }
}

fn failure(op: &str, id: &ExtensionId) -> Error {
    Error::CommandFailed {
        message: format!("code --{op}-extension {id}"),
        stderr: format!("Cannot {op} extension '{id}'"),
    }
}

impl Backend for FakeBackend {
    fn is_available(&self) -> bool {
        true
    }

    fn list_installed(&self, profile: &str) -> Result<ExtensionSet> {
        let state = self.state.lock().unwrap();
        if state.list_fails {
            return Err(Error::EditorNotFound {
                binary: "code".to_string(),
            });
        }
        Ok(state.installed.get(profile).cloned().unwrap_or_default())
    }

    fn install(&self, profile: &str, id: &ExtensionId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("install:{id}"));
        if state.install_failures.contains(id) {
            return Err(failure("install", id));
        }
        state
            .installed
            .entry(profile.to_string())
            .or_default()
            .insert(id.clone());
        Ok(())
    }

    fn uninstall(&self, profile: &str, id: &ExtensionId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("uninstall:{id}"));
        if let Some(remaining) = state.uninstall_failures.get_mut(id)
            && *remaining > 0
        {
            *remaining -= 1;
            return Err(failure("uninstall", id));
        }
        if let Some(installed) = state.installed.get_mut(profile) {
            installed.remove(id);
        }
        Ok(())
    }
}

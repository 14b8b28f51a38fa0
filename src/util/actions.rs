//! Executes the follow-up actions of a completed submission.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos_router::NavigateOptions;

use crate::state::submit::UiAction;
use crate::state::toast::Notifier;

/// Push toasts and perform navigation in the order `actions` lists them.
pub fn perform<F>(actions: Vec<UiAction>, notifier: Notifier, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    for action in actions {
        match action {
            UiAction::Toast(kind, text) => {
                notifier.push(text, kind);
            }
            UiAction::Navigate(path) => navigate(&path, NavigateOptions::default()),
        }
    }
}

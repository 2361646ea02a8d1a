//! Navigation commands

use asnalo_core::{Action, Store, View};
use asnalo_domain::Result;
use tracing::debug;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Switch screens. Returns whether the view changed.
pub fn navigate(ctx: &AppContext, view: View) -> Result<bool> {
    execute_command("navigation::navigate", || {
        let changed = ctx.dispatch(Action::Navigate(view));
        debug!(?view, changed, "navigate");
        Ok(changed)
    })
}

pub fn current_view(ctx: &AppContext) -> Result<View> {
    execute_command("navigation::current_view", || Ok(ctx.read(Store::view)))
}

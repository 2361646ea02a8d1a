//! Client directory commands

use asnalo_domain::{Client, Result, SfaError};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// All clients in store order
pub fn list_clients(ctx: &AppContext) -> Result<Vec<Client>> {
    execute_command("clients::list_clients", || Ok(ctx.read(|store| store.clients().to_vec())))
}

pub fn get_client(ctx: &AppContext, client_id: &str) -> Result<Client> {
    execute_command("clients::get_client", || {
        ctx.read(|store| store.client(client_id).cloned())
            .ok_or_else(|| SfaError::NotFound(format!("client {client_id}")))
    })
}

//! Command execution helpers
//!
//! Every command is timed and logged the same way; these wrappers keep that
//! boilerplate out of the command bodies.

use std::future::Future;
use std::time::Instant;

use asnalo_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_command_execution};

/// Run a synchronous command body with timing and outcome logging
///
/// # Example
///
/// ```rust,ignore
/// pub fn list_clients(ctx: &AppContext) -> Result<Vec<Client>> {
///     execute_command("clients::list_clients", || Ok(ctx.read(|store| store.clients().to_vec())))
/// }
/// ```
pub fn execute_command<T>(
    command_name: &str,
    command_fn: impl FnOnce() -> DomainResult<T>,
) -> DomainResult<T> {
    let start = Instant::now();
    let result = command_fn();
    log_outcome(command_name, start, &result);
    result
}

/// Async variant of [`execute_command`] for commands that call the assistant
pub async fn execute_command_async<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command_fn().await;
    log_outcome(command_name, start, &result);
    result
}

fn log_outcome<T>(command_name: &str, start: Instant, result: &DomainResult<T>) {
    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), result.is_ok(), error_type);
}

#[cfg(test)]
mod tests {
    use asnalo_domain::SfaError;

    use super::*;

    #[test]
    fn passes_result_through() {
        assert_eq!(execute_command("test::ok", || Ok(7)), Ok(7));
        assert_eq!(
            execute_command::<()>("test::err", || Err(SfaError::NotFound("deal".into()))),
            Err(SfaError::NotFound("deal".into()))
        );
    }

    #[tokio::test]
    async fn async_variant_passes_result_through() {
        let result = execute_command_async("test::async", || async move { Ok("done") }).await;
        assert_eq!(result, Ok("done"));
    }
}

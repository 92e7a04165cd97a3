//! Error handling utilities

use crate::error::{describe_error_code, HookError};
use tracing::error;

/// Report a fatal error and exit with its status code
///
/// `HookError`s print their user message, plus the code description and
/// developer message when `verbose >= 1`. Anything else prints its error chain in verbose mode.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    let exit_code = if let Some(hook_err) = error.downcast_ref::<HookError>() {
        eprintln!("{}", hook_err.user_message());
        if verbose >= 1 {
            let code = hook_err.code();
            eprintln!("E{:04}: {}", code, describe_error_code(code));
            eprintln!("\nContext Chain:\n{}", hook_err.developer_message());
        }
        hook_err.exit_code()
    } else {
        eprintln!("Error: {error}");
        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }
        1
    };

    std::process::exit(exit_code)
}

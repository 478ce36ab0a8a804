// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Process-wide logging initialization.
//!
//! There is no custom log record format, file rotation, or out-of-process sink here: just a
//! one-time `tracing`/`log` bridge, matched to whatever `RUST_LOG` says.

use std::{
    env,
    sync::atomic::{AtomicBool, Ordering},
};

use tracing_subscriber::EnvFilter;

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Returns whether [`logging_init`] has already run in this process.
#[must_use]
pub fn logging_is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::Relaxed)
}

/// Initializes process-wide logging from the `RUST_LOG` environment variable.
///
/// A no-op (returning `Ok(())`) if `RUST_LOG` is unset, or if logging was already
/// initialized in this process.
///
/// # Errors
///
/// Returns an error if a `tracing` subscriber is already installed by something other than
/// this function.
pub fn logging_init() -> anyhow::Result<()> {
    if logging_is_initialized() {
        return Ok(());
    }

    if let Ok(filter) = env::var("RUST_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))?;
    }

    LOGGING_INITIALIZED.store(true, Ordering::Relaxed);
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_logging_init_is_idempotent() {
        // SAFETY: tests in this module run single-threaded with respect to this flag.
        let _ = logging_init();
        let first = logging_is_initialized();
        let result = logging_init();

        assert!(first);
        assert!(result.is_ok());
    }
}

/*! Integration tests for the jotter auth core.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - storage: Tests for the StorageBackend trait and its implementations
 * - auth: Tests for the SessionManager and its persistence behavior
 * - flow: Tests for the FlowController state machine
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("jotter=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod auth;
mod storage;

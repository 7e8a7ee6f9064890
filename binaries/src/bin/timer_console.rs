// SPDX-License-Identifier: MPL-2.0

use std::time::Duration;

use collections_kit::timer::{TimerError, TimerManager};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TimerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut timer = TimerManager::new();
    let ids: Vec<_> = ["FirstListener", "SecondListener", "ThirdListener"]
        .into_iter()
        .map(|name| timer.register(move |event| println!("{name}: {}", event.message())))
        .collect();

    info!(listeners = timer.listener_count(), "waiting for first notification");
    timer.notify("Hooray!!!", Duration::from_secs(5))?;

    let removed = timer.unregister(ids[1]);
    info!(
        removed,
        listeners = timer.listener_count(),
        "waiting for second notification"
    );
    timer.notify("Freedom!!!", Duration::from_secs(2))?;

    Ok(())
}

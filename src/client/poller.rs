use std::time::Duration;

use dioxus::logger::tracing::debug;

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(every: Duration) {
    tokio::time::sleep(every).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(every: Duration) {
    gloo_timers::future::sleep(every).await;
}

/// Fixed-interval polling bound to the lifetime of the returned future.
///
/// `tick` runs immediately and then every `every`. It is expected to spawn the actual fetch so
/// the timer never waits on a request in flight. Dropping the future stops the loop; views hold
/// it in a component-scoped task, so unmounting the view tears the timer down.
pub async fn run_polling<F>(label: &'static str, every: Duration, mut tick: F)
where
    F: FnMut(),
{
    debug!("[poller:{}] started, every {} ms", label, every.as_millis());
    loop {
        tick();
        sleep(every).await;
    }
}

//! Spawning and timers for UI handlers.
//!
//! Browser builds run futures on the page's event loop; native builds have no
//! UI to drive, so spawned work is discarded and sleeps return immediately.

use std::future::Future;
use std::time::Duration;

pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(future);
    #[cfg(not(feature = "csr"))]
    let _ = future;
}

pub async fn sleep(duration: Duration) {
    #[cfg(feature = "csr")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(feature = "csr"))]
    let _ = duration;
}

use std::rc::Rc;
use std::time::Duration;

use futures::future::{self, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;

/// Waits before a submission settles. Swapped out in tests.
pub trait Delay {
    fn wait(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Browser timer backed by `setTimeout`.
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn wait(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(millis))
    }
}

/// Resolves immediately.
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(future::ready(()))
    }
}

/// Shared delay that can live in component props.
#[derive(Clone)]
pub struct DelayHandle(Rc<dyn Delay>);

impl DelayHandle {
    pub fn new(delay: impl Delay + 'static) -> Self {
        Self(Rc::new(delay))
    }
}

impl Delay for DelayHandle {
    fn wait(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        self.0.wait(duration)
    }
}

thread_local! {
    static BROWSER_TIMER: DelayHandle = DelayHandle::new(TimerDelay);
}

/// Every default handle shares one timer, so default props compare equal.
impl Default for DelayHandle {
    fn default() -> Self {
        BROWSER_TIMER.with(DelayHandle::clone)
    }
}

impl PartialEq for DelayHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn no_delay_resolves_right_away() {
        block_on(NoDelay.wait(Duration::from_secs(3600)));
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = DelayHandle::new(NoDelay);
        let b = DelayHandle::new(NoDelay);
        assert!(a == a.clone());
        assert!(a != b);
    }

    #[test]
    fn default_handles_are_equal() {
        assert!(DelayHandle::default() == DelayHandle::default());
        assert!(DelayHandle::default() != DelayHandle::new(TimerDelay));
    }
}

use crate::api::types::{SessionEvent, SessionResult};

/// Receives session transitions as they happen.
/// Every method defaults to a no-op, so observers only implement what they need.
pub trait SessionObserver {
    fn on_started(&mut self) {}

    /// Called with `true` when the session pauses and `false` when it resumes.
    fn on_paused(&mut self, _paused: bool) {}

    /// Called once with the result when the session finishes.
    fn on_finish(&mut self, _result: &SessionResult) {}

    /// Called once after [`SessionObserver::on_finish`].
    fn on_finished(&mut self) {}
}

/// Route an event to the matching observer method.
pub fn dispatch(observer: &mut dyn SessionObserver, event: &SessionEvent) {
    match event {
        SessionEvent::Started => observer.on_started(),
        SessionEvent::Paused(paused) => observer.on_paused(*paused),
        SessionEvent::Finish(result) => observer.on_finish(result),
        SessionEvent::Finished => observer.on_finished(),
    }
}

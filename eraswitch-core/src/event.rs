//! Event trait for run-number lookup.

/// The view of an event the run switcher needs.
///
/// Event records belong to the host framework; this trait only asks for the
/// run number the event was recorded in.
///
/// # Example
///
/// ```rust
/// use eraswitch_core::Event;
///
/// struct RecoEvent {
///     run: u32,
/// }
///
/// impl Event for RecoEvent {
///     fn run_number(&self) -> u32 {
///         self.run
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not expose a run number",
    label = "missing `Event` implementation",
    note = "Implement `Event::run_number` to dispatch `{Self}` by run period."
)]
pub trait Event {
    /// Run number of this event.
    fn run_number(&self) -> u32;
}

impl<E: Event + ?Sized> Event for &E {
    fn run_number(&self) -> u32 {
        (**self).run_number()
    }
}

impl<E: Event + ?Sized> Event for &mut E {
    fn run_number(&self) -> u32 {
        (**self).run_number()
    }
}

impl<E: Event + ?Sized> Event for Box<E> {
    fn run_number(&self) -> u32 {
        (**self).run_number()
    }
}

/// Event emitted by the steady-state solver for each recorded column.
///
/// Step 0 is the initial state before any mixing.
/// Steps 1..N are emitted after each mixing step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number (0 for initial, 1..N for mixing steps).
    pub step: usize,

    /// Layer concentrations after this step, top first.
    pub concentrations: &'a [f64],

    /// `max − min` of `concentrations`.
    pub spread: f64,
}

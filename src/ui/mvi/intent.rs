/// Marker trait for intents fed to a reducer.
///
/// Intents carry observations (a preference changed) rather than commands;
/// writes go through the controller, never through a reducer.
pub trait Intent: Send + 'static {}

/// Marker trait for published screen state.
///
/// `PartialEq` lets publishers skip notifications when a reduction is a no-op.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// Marker trait for intents: key presses and the app-level actions they map to.
pub trait Intent: Send + 'static {}

pub mod selection;
pub mod session;

pub use selection::SelectionState;
pub use session::{NearbySession, NearbyView};

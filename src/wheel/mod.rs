//! Wheel selection engine: friction physics, pointer resolution, slice
//! geometry and label wrapping, tied together by [`Session`].
//!
//! Nothing in here touches the terminal, so the whole engine runs headless.

mod error;
pub mod geometry;
pub mod layout;
pub mod physics;
pub mod resolver;
pub mod session;

pub use error::WheelError;
pub use geometry::WheelGeometry;
pub use physics::{PhysicsParams, SpinRange};
pub use resolver::resolve;
pub use session::{Phase, Session, Slot};

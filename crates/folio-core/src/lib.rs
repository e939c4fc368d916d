pub mod camera;
pub mod choreography;
pub mod constants;
pub mod error;
pub mod lifecycle;
pub mod mascot;
pub mod particles;
pub mod sections;
pub mod sound;
pub mod viewport;

pub use camera::*;
pub use choreography::*;
pub use constants::*;
pub use error::*;
pub use lifecycle::*;
pub use mascot::*;
pub use particles::*;
pub use sections::*;
pub use sound::*;
pub use viewport::*;

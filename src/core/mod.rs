pub mod draw;
pub mod params;
pub mod scene;
pub mod shapes;
pub mod tone;

pub use draw::*;
pub use params::*;
pub use scene::*;
pub use shapes::*;
pub use tone::*;

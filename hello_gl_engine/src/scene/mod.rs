/// Scene module - scene configuration, input and the frame loop

pub mod scene_desc;
pub mod input;
pub mod frame_loop;

pub use scene_desc::*;
pub use input::*;
pub use frame_loop::*;

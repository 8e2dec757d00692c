/// Program build pipeline - shader sources, compilation, linking and vertex layouts

pub mod shader_source;
pub mod shader_stage_compiler;
pub mod program_linker;
pub mod program_builder;
pub mod vertex_layout_binder;

pub use shader_source::*;
pub use shader_stage_compiler::*;
pub use program_linker::*;
pub use program_builder::*;
pub use vertex_layout_binder::*;

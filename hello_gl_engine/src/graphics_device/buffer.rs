/// Buffer trait and buffer descriptor

use std::any::Any;

/// Buffer usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Vertex attribute data
    Vertex,
    /// 32-bit element indices
    Index,
}

/// Descriptor for creating a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferDesc {
    /// Size in bytes
    pub size: u64,
    /// Buffer usage
    pub usage: BufferUsage,
}

/// Device buffer holding static data
///
/// The device object is released when dropped.
pub trait Buffer: Any {
    /// Buffer usage
    fn usage(&self) -> BufferUsage;

    /// Size in bytes
    fn size(&self) -> u64;

    /// Access to the concrete type, for backends
    fn as_any(&self) -> &dyn Any;
}

/// Vertex attribute descriptors and the vertex array trait

use std::any::Any;

/// Size in bytes of one attribute component (32-bit float)
pub const COMPONENT_SIZE_BYTES: u32 = 4;

/// Position of one shader input inside an interleaved float buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeDescriptor {
    /// Attribute location in the vertex shader (`layout (location = N)`)
    pub slot: u32,
    /// Number of float components (1 to 4)
    pub component_count: u32,
    /// Bytes between the starts of two consecutive vertices
    pub stride_bytes: u32,
    /// Bytes from the start of a vertex to this attribute
    pub offset_bytes: u32,
}

impl AttributeDescriptor {
    /// Create a descriptor
    pub const fn new(slot: u32, component_count: u32, stride_bytes: u32, offset_bytes: u32) -> Self {
        Self { slot, component_count, stride_bytes, offset_bytes }
    }

    /// Size in bytes occupied by this attribute inside one vertex, `None` on overflow
    pub const fn size_bytes(&self) -> Option<u32> {
        self.component_count.checked_mul(COMPONENT_SIZE_BYTES)
    }

    /// First byte past this attribute inside one vertex, `None` on overflow
    pub const fn end_bytes(&self) -> Option<u32> {
        match self.size_bytes() {
            Some(size) => self.offset_bytes.checked_add(size),
            None => None,
        }
    }
}

/// Validated, ordered sequence of attribute descriptors sharing one buffer
///
/// Only produced by `VertexLayoutBinder::describe`, so every instance
/// satisfies the non-overlap and stride invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    pub(crate) attributes: Vec<AttributeDescriptor>,
    pub(crate) stride_bytes: u32,
}

impl VertexLayout {
    /// Descriptors in declaration order
    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    /// Shared stride of the interleaved buffer
    pub fn stride_bytes(&self) -> u32 {
        self.stride_bytes
    }

    /// Floats per vertex
    pub fn floats_per_vertex(&self) -> u32 {
        self.stride_bytes / COMPONENT_SIZE_BYTES
    }
}

/// Vertex array object: a layout bound to a vertex buffer (and optional index buffer)
///
/// The device object is released when dropped.
pub trait VertexArray: Any {
    /// Access to the concrete type, for backends
    fn as_any(&self) -> &dyn Any;
}

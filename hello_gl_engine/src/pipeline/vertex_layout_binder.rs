/// VertexLayoutBinder - validates interleaved layouts and binds them to buffers

use crate::error::{Error, Result};
use crate::graphics_device::{
    AttributeDescriptor, Buffer, BufferDesc, BufferUsage, DrawCall, GraphicsDevice, VertexArray,
    VertexLayout, COMPONENT_SIZE_BYTES,
};
use crate::engine_debug;

/// Lowest `GL_MAX_VERTEX_ATTRIBS` any conforming implementation provides
pub const MAX_VERTEX_ATTRIBUTES: u32 = 16;

/// Largest stride the device accepts (`GLsizei` is signed)
pub const MAX_STRIDE_BYTES: u32 = i32::MAX as u32;

const COMPONENT_COUNTS: std::ops::RangeInclusive<u32> = 1..=4;

/// Describes and binds vertex layouts
pub struct VertexLayoutBinder;

impl VertexLayoutBinder {
    /// Validate `attributes` as one interleaved buffer
    ///
    /// Rejected with `LayoutError`:
    /// - an empty attribute list
    /// - a slot outside `0..MAX_VERTEX_ATTRIBUTES`, or the same slot twice
    /// - a component count outside `1..=4`
    /// - a zero stride, a stride above `MAX_STRIDE_BYTES`, or a stride/offset
    ///   not a multiple of 4 bytes
    /// - descriptors disagreeing on the stride
    /// - an attribute extending past the stride
    /// - two attributes whose byte ranges overlap
    ///
    /// Pure: describing the same input twice gives equal layouts.
    pub fn describe(attributes: &[AttributeDescriptor]) -> Result<VertexLayout> {
        let first = attributes.first().ok_or_else(|| Error::LayoutError {
            descriptor: None,
            reason: "a layout needs at least one attribute".to_string(),
        })?;
        let stride = first.stride_bytes;

        for (index, desc) in attributes.iter().enumerate() {
            if desc.slot >= MAX_VERTEX_ATTRIBUTES {
                return Err(Error::layout(*desc, format!(
                    "slot must be below {}", MAX_VERTEX_ATTRIBUTES
                )));
            }
            if !COMPONENT_COUNTS.contains(&desc.component_count) {
                return Err(Error::layout(*desc, "component count must be between 1 and 4"));
            }
            if desc.stride_bytes == 0 {
                return Err(Error::layout(*desc, "stride must be non-zero"));
            }
            if desc.stride_bytes > MAX_STRIDE_BYTES {
                return Err(Error::layout(*desc, format!(
                    "stride must not exceed {} bytes", MAX_STRIDE_BYTES
                )));
            }
            if desc.stride_bytes % COMPONENT_SIZE_BYTES != 0 || desc.offset_bytes % COMPONENT_SIZE_BYTES != 0 {
                return Err(Error::layout(*desc, "stride and offset must be multiples of 4 bytes"));
            }
            if desc.stride_bytes != stride {
                return Err(Error::layout(*desc, format!(
                    "stride differs from the buffer stride of {} bytes", stride
                )));
            }
            match desc.end_bytes() {
                Some(end) if end <= desc.stride_bytes => {}
                Some(end) => {
                    return Err(Error::layout(*desc, format!(
                        "attribute ends at byte {}, past the stride", end
                    )));
                }
                None => {
                    return Err(Error::layout(*desc, "attribute end overflows a 32-bit byte offset"));
                }
            }
            if attributes[..index].iter().any(|other| other.slot == desc.slot) {
                return Err(Error::layout(*desc, "slot is already used by another attribute"));
            }
        }

        let mut by_offset: Vec<&AttributeDescriptor> = attributes.iter().collect();
        by_offset.sort_by_key(|desc| desc.offset_bytes);
        for pair in by_offset.windows(2) {
            let (previous, next) = (pair[0], pair[1]);
            // every end was checked against the stride above
            let previous_end = previous.end_bytes().unwrap_or(u32::MAX);
            if next.offset_bytes < previous_end {
                return Err(Error::layout(*next, format!(
                    "overlaps slot {} which occupies bytes {}..{}",
                    previous.slot, previous.offset_bytes, previous_end
                )));
            }
        }

        Ok(VertexLayout {
            attributes: attributes.to_vec(),
            stride_bytes: stride,
        })
    }

    /// Layout for tightly packed float attributes given as `(slot, component_count)`
    ///
    /// ```
    /// use hello_gl_engine::hellogl::pipeline::VertexLayoutBinder;
    ///
    /// // position (vec3), color (vec3), texture coordinate (vec2)
    /// let layout = VertexLayoutBinder::interleaved(&[(0, 3), (1, 3), (2, 2)]).unwrap();
    /// assert_eq!(layout.stride_bytes(), 32);
    /// assert_eq!(layout.attributes()[2].offset_bytes, 24);
    /// ```
    pub fn interleaved(attributes: &[(u32, u32)]) -> Result<VertexLayout> {
        if let Some(&(slot, count)) = attributes.iter().find(|(_, count)| !COMPONENT_COUNTS.contains(count)) {
            return Err(Error::layout(
                AttributeDescriptor::new(slot, count, 0, 0),
                "component count must be between 1 and 4",
            ));
        }

        let mut offsets = Vec::with_capacity(attributes.len());
        let mut stride: u32 = 0;
        for &(_, count) in attributes {
            offsets.push(stride);
            stride = stride
                .checked_add(count * COMPONENT_SIZE_BYTES)
                .ok_or_else(|| Error::LayoutError {
                    descriptor: None,
                    reason: "vertex size overflows a 32-bit stride".to_string(),
                })?;
        }

        let descriptors: Vec<AttributeDescriptor> = attributes
            .iter()
            .zip(offsets)
            .map(|(&(slot, count), offset)| AttributeDescriptor::new(slot, count, stride, offset))
            .collect();
        Self::describe(&descriptors)
    }

    /// Record `layout` over `vertex_buffer` (and `index_buffer`) in a vertex array
    ///
    /// The returned `BoundLayout` owns the buffers and the vertex array.
    pub fn bind(
        device: &mut dyn GraphicsDevice,
        layout: &VertexLayout,
        vertex_buffer: Box<dyn Buffer>,
        index_buffer: Option<Box<dyn Buffer>>,
    ) -> Result<BoundLayout> {
        if vertex_buffer.usage() != BufferUsage::Vertex {
            return Err(Error::LayoutError {
                descriptor: None,
                reason: format!("vertex data bound from a {:?} buffer", vertex_buffer.usage()),
            });
        }
        let stride = layout.stride_bytes() as u64;
        if vertex_buffer.size() == 0 || vertex_buffer.size() % stride != 0 {
            return Err(Error::LayoutError {
                descriptor: None,
                reason: format!(
                    "vertex buffer of {} bytes is not a whole number of {}-byte vertices",
                    vertex_buffer.size(), stride
                ),
            });
        }
        let vertex_count = (vertex_buffer.size() / stride) as u32;

        let index_count = match &index_buffer {
            Some(buffer) if buffer.usage() != BufferUsage::Index => {
                return Err(Error::LayoutError {
                    descriptor: None,
                    reason: format!("indices bound from a {:?} buffer", buffer.usage()),
                });
            }
            Some(buffer) => Some((buffer.size() / std::mem::size_of::<u32>() as u64) as u32),
            None => None,
        };

        let vertex_array = device.create_vertex_array(layout, vertex_buffer.as_ref(), index_buffer.as_deref())?;

        engine_debug!("hellogl::VertexLayoutBinder",
            "Bound {} attributes over {} vertices (stride {} bytes, {} indices)",
            layout.attributes().len(), vertex_count, stride,
            index_count.map_or("no".to_string(), |n| n.to_string()));

        Ok(BoundLayout {
            vertex_array,
            _vertex_buffer: vertex_buffer,
            _index_buffer: index_buffer,
            layout: layout.clone(),
            vertex_count,
            index_count,
        })
    }

    /// Upload `vertices` (and `indices`) and bind `layout` over them
    ///
    /// Every index must name a whole vertex of `vertices`.
    pub fn upload(
        device: &mut dyn GraphicsDevice,
        layout: &VertexLayout,
        vertices: &[f32],
        indices: Option<&[u32]>,
    ) -> Result<BoundLayout> {
        if let Some(indices) = indices {
            let vertex_count = vertices.len() as u64 / layout.floats_per_vertex() as u64;
            if let Some((position, index)) = indices
                .iter()
                .enumerate()
                .find(|&(_, &index)| index as u64 >= vertex_count)
            {
                return Err(Error::LayoutError {
                    descriptor: None,
                    reason: format!(
                        "index {} at position {} is past the last of {} vertices",
                        index, position, vertex_count
                    ),
                });
            }
        }

        let vertex_bytes: &[u8] = bytemuck::cast_slice(vertices);
        let vertex_buffer = device.create_buffer(
            BufferDesc { size: vertex_bytes.len() as u64, usage: BufferUsage::Vertex },
            vertex_bytes,
        )?;

        let index_buffer = match indices {
            Some(indices) => {
                let index_bytes: &[u8] = bytemuck::cast_slice(indices);
                Some(device.create_buffer(
                    BufferDesc { size: index_bytes.len() as u64, usage: BufferUsage::Index },
                    index_bytes,
                )?)
            }
            None => None,
        };

        Self::bind(device, layout, vertex_buffer, index_buffer)
    }
}

/// A layout recorded in a vertex array together with the buffers it reads
///
/// Fields drop in order: the vertex array goes before the buffers it references.
pub struct BoundLayout {
    vertex_array: Box<dyn VertexArray>,
    _vertex_buffer: Box<dyn Buffer>,
    _index_buffer: Option<Box<dyn Buffer>>,
    layout: VertexLayout,
    vertex_count: u32,
    index_count: Option<u32>,
}

impl BoundLayout {
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn index_count(&self) -> Option<u32> {
        self.index_count
    }

    /// Make the vertex array current
    pub fn bind(&self, device: &mut dyn GraphicsDevice) {
        device.bind_vertex_array(self.vertex_array.as_ref());
    }

    /// Draw call covering every index, or every vertex without an index buffer
    pub fn draw_call(&self) -> DrawCall {
        match self.index_count {
            Some(index_count) => DrawCall::Indexed { index_count },
            None => DrawCall::Arrays { vertex_count: self.vertex_count },
        }
    }
}

#[cfg(test)]
#[path = "vertex_layout_binder_tests.rs"]
mod tests;

use bytemuck::{Pod, Zeroable};

use crate::components::glyph::GlyphSlot;

/// Per-glyph data handed to the host renderer.
/// The host reads these as a flat float array: 8 floats = 32 bytes stride.
///
/// Hidden glyphs still carry their codepoint; the host decides how to mask them.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GlyphInstance {
    /// Glyph center in display-local space.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Unicode scalar value of the letter.
    pub codepoint: f32,
    /// 1.0 when revealed, 0.0 when hidden.
    pub revealed: f32,
    pub word: f32,
    pub line: f32,
}

impl GlyphInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<&GlyphSlot> for GlyphInstance {
    fn from(slot: &GlyphSlot) -> Self {
        Self {
            x: slot.pos.x,
            y: slot.pos.y,
            width: slot.size.x,
            height: slot.size.y,
            codepoint: slot.letter as u32 as f32,
            revealed: if slot.revealed { 1.0 } else { 0.0 },
            word: slot.word as f32,
            line: slot.line as f32,
        }
    }
}

/// Glyph instances for the phrase currently on display.
#[derive(Debug, Default)]
pub struct GlyphBuffer {
    pub instances: Vec<GlyphInstance>,
}

impl GlyphBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
        }
    }

    /// Remove every instance, keeping the allocation.
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append one instance.
    pub fn push(&mut self, instance: GlyphInstance) {
        self.instances.push(instance);
    }

    /// Replace the contents with one instance per slot.
    pub fn rebuild(&mut self, slots: &[GlyphSlot]) {
        self.instances.clear();
        self.instances.extend(slots.iter().map(GlyphInstance::from));
    }

    /// Number of instances in the buffer.
    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// The instances as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

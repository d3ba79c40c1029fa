//! Growable GPU buffers streamed to every frame.
//!
//! The immediate-mode batcher regenerates its vertex stream each frame, so
//! the backing buffer must accept arbitrary per-frame sizes: it grows with
//! a 2x strategy and never shrinks (GPU buffers cannot be resized in
//! place).

use std::marker::PhantomData;

/// A typed GPU buffer that grows to fit the data written each frame.
pub struct TypedBuffer<T> {
    buffer: wgpu::Buffer,
    capacity_bytes: usize,
    count: usize,
    usage: wgpu::BufferUsages,
    label: String,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> TypedBuffer<T> {
    /// Minimum allocation in bytes.
    const MIN_CAPACITY: usize = 64;

    /// Buffer with the given initial capacity in items.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        capacity_items: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity_bytes =
            (size_of::<T>() * capacity_items).max(Self::MIN_CAPACITY);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: capacity_bytes as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            capacity_bytes,
            count: 0,
            usage,
            label: label.to_owned(),
            _marker: PhantomData,
        }
    }

    /// Write `data` to the buffer, reallocating with 2x growth if it does
    /// not fit. Returns `true` when the buffer was reallocated.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: &[T]) -> bool {
        let data_bytes: &[u8] = bytemuck::cast_slice(data);
        let needed = data_bytes.len();

        let reallocated = needed > self.capacity_bytes;
        if reallocated {
            let new_capacity = (needed * 2).max(self.capacity_bytes + 1024);
            self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&self.label),
                size: new_capacity as u64,
                usage: self.usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            self.capacity_bytes = new_capacity;
        }

        if needed > 0 {
            queue.write_buffer(&self.buffer, 0, data_bytes);
        }
        self.count = data.len();

        reallocated
    }

    /// The underlying GPU buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Number of items written by the last [`write`](Self::write).
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the last write was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

//! Window presentation of the progressive framebuffer.

use anyhow::Result;
use minifb::{Key, Window, WindowOptions};

/// A fixed-size window that blits tonemapped RGBA frames.
pub struct Display {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl Display {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let window = Window::new(title, width, height, WindowOptions::default())?;
        Ok(Self {
            window,
            buffer: vec![0; width * height],
            width,
            height,
        })
    }

    /// True while the window is open and Escape has not been pressed.
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// Present a full RGBA frame (4 bytes per pixel, row-major).
    pub fn present(&mut self, frame: &[u8]) -> Result<()> {
        for (pixel, rgba) in self.buffer.iter_mut().zip(frame.chunks_exact(4)) {
            *pixel = u32::from_be_bytes([0, rgba[0], rgba[1], rgba[2]]);
        }
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)?;
        Ok(())
    }
}

use crate::paint::Color;

/// Output raster the renderer draws into.
///
/// This is the whole drawing API the core needs: dimensions, a filled block,
/// and a clear. Implementations must clip blocks that extend past the edges.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Fills the `w × h` block whose top-left corner is `(x, y)`.
    fn set_pixel_block(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color);

    /// Resets every pixel to black.
    fn clear(&mut self);
}

/// CPU RGBA8 surface, rows top to bottom.
#[derive(Debug, Clone, Default)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::black().to_rgba8(); width as usize * height as usize],
        }
    }

    /// Resizes to `width × height`, clearing the contents if the size changed.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        *self = Self::new(width, height);
    }

    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, _] = self.pixels[y as usize * self.width as usize + x as usize];
        Some(Color::new(r, g, b))
    }
}

impl Surface for Framebuffer {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel_block(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        let x0 = x.min(self.width) as usize;
        let y0 = y.min(self.height) as usize;
        let x1 = x.saturating_add(w).min(self.width) as usize;
        let y1 = y.saturating_add(h).min(self.height) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let rgba = color.to_rgba8();
        let stride = self.width as usize;
        for row in self.pixels[y0 * stride..y1 * stride].chunks_exact_mut(stride) {
            row[x0..x1].fill(rgba);
        }
    }

    fn clear(&mut self) {
        self.pixels.fill(Color::black().to_rgba8());
    }
}

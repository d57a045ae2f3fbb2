//! Owned RGBA raster with loop-based drawing.

use maquette_types::Color3;

/// A fixed-size RGBA image backed by an owned byte buffer.
///
/// Drawing happens through direct indexed writes; there is no dependency
/// on any graphics API. The wrapped variants take coordinates modulo the
/// raster size, which is what keeps scattered detail (cracks, streaks,
/// offset bricks) seamless when the texture repeats.
///
/// # Example
///
/// ```
/// use maquette_texture::Raster;
/// use maquette_types::Color3;
///
/// let mut raster = Raster::filled(4, 4, Color3::WHITE);
/// raster.put_wrapped(-1, 0, [0, 0, 0, 255]);
/// assert_eq!(raster.pixel(3, 0), [0, 0, 0, 255]);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a raster filled with a color.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Color3) -> Self {
        let px = color.to_rgba8();
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a raster filled with a uniform gray value, full alpha.
    ///
    /// Bump maps start from neutral gray and carve structure into it.
    #[must_use]
    pub fn filled_gray(width: u32, height: u32, value: u8) -> Self {
        let mut data = vec![value; width as usize * height as usize * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Raster width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA bytes, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Read a pixel.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Write a pixel.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is out of bounds.
    pub fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    /// Write a pixel with coordinates taken modulo the raster size.
    ///
    /// Negative and overflowing coordinates wrap around, so drawing that
    /// walks off one border continues on the opposite one.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation and sign loss are safe after rem_euclid against the size
    pub fn put_wrapped(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        let wx = x.rem_euclid(i64::from(self.width)) as u32;
        let wy = y.rem_euclid(i64::from(self.height)) as u32;
        self.put(wx, wy, rgba);
    }

    /// Read a pixel with wrapped coordinates.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation and sign loss are safe after rem_euclid against the size
    pub fn pixel_wrapped(&self, x: i64, y: i64) -> [u8; 4] {
        let wx = x.rem_euclid(i64::from(self.width)) as u32;
        let wy = y.rem_euclid(i64::from(self.height)) as u32;
        self.pixel(wx, wy)
    }

    /// Fill an axis-aligned rectangle with wrapped coordinates.
    pub fn fill_rect_wrapped(&mut self, x: i64, y: i64, w: u32, h: u32, rgba: [u8; 4]) {
        for dy in 0..i64::from(h) {
            for dx in 0..i64::from(w) {
                self.put_wrapped(x + dx, y + dy, rgba);
            }
        }
    }

    /// Mean color over the whole raster, ignoring alpha.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision: channel sums stay far below 2^24 for supported sizes
    pub fn mean_color(&self) -> Color3 {
        let pixels = (self.width as usize * self.height as usize).max(1);
        let mut sums = [0.0_f32; 3];
        for px in self.data.chunks_exact(4) {
            sums[0] += f32::from(px[0]);
            sums[1] += f32::from(px[1]);
            sums[2] += f32::from(px[2]);
        }
        let n = pixels as f32 * 255.0;
        Color3::new(sums[0] / n, sums[1] / n, sums[2] / n)
    }
}

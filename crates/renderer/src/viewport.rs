use winit::dpi::PhysicalSize;

/// Tracks the surface's layout size and the backing store derived from it.
///
/// The backing store is `floor(client_size * min(device_pixel_ratio, limit))`
/// per axis, clamped to at least one pixel. [`Viewport::take_pending`] hands
/// out a size only when it differs from the last applied one, which makes the
/// resize path idempotent: re-checking an unchanged size performs no GPU
/// work.
#[derive(Debug)]
pub struct Viewport {
    pixel_ratio_limit: f64,
    client: Option<(f64, f64)>,
    pixel_ratio: f64,
    applied: Option<PhysicalSize<u32>>,
}

impl Viewport {
    pub fn new(pixel_ratio_limit: f64) -> Self {
        Self {
            pixel_ratio_limit: pixel_ratio_limit.max(1.0),
            client: None,
            pixel_ratio: 1.0,
            applied: None,
        }
    }

    /// Records the latest layout size and device pixel ratio.
    ///
    /// Degenerate sizes are recorded as absent so the frame loop skips
    /// rendering instead of configuring a zero-sized surface.
    pub fn set_client_size(&mut self, width: f64, height: f64, pixel_ratio: f64) {
        self.pixel_ratio = if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
        if width <= 0.0 || height <= 0.0 {
            self.client = None;
        } else {
            self.client = Some((width, height));
        }
    }

    /// Backing-store size for the current layout size, if one is known.
    pub fn backing_size(&self) -> Option<PhysicalSize<u32>> {
        let (width, height) = self.client?;
        let scale = self.pixel_ratio.min(self.pixel_ratio_limit);
        Some(PhysicalSize::new(
            ((width * scale).floor() as u32).max(1),
            ((height * scale).floor() as u32).max(1),
        ))
    }

    /// Returns the backing size only if it differs from the last applied one,
    /// marking it applied in the same step.
    pub fn take_pending(&mut self) -> Option<PhysicalSize<u32>> {
        let next = self.backing_size()?;
        if self.applied == Some(next) {
            return None;
        }
        self.applied = Some(next);
        Some(next)
    }

    /// Last size actually pushed to the sink.
    pub fn applied(&self) -> Option<PhysicalSize<u32>> {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_ratio_maps_one_to_one() {
        let mut viewport = Viewport::new(2.0);
        viewport.set_client_size(800.0, 600.0, 1.0);
        assert_eq!(viewport.backing_size(), Some(PhysicalSize::new(800, 600)));
    }

    #[test]
    fn pixel_ratio_is_clamped_to_limit() {
        let mut viewport = Viewport::new(2.0);
        viewport.set_client_size(800.0, 600.0, 3.0);
        assert_eq!(viewport.backing_size(), Some(PhysicalSize::new(1600, 1200)));
    }

    #[test]
    fn fractional_sizes_floor() {
        let mut viewport = Viewport::new(2.0);
        viewport.set_client_size(100.7, 50.3, 1.5);
        assert_eq!(viewport.backing_size(), Some(PhysicalSize::new(151, 75)));
    }

    #[test]
    fn unchanged_size_yields_no_pending_work() {
        let mut viewport = Viewport::new(2.0);
        viewport.set_client_size(800.0, 600.0, 1.0);
        assert_eq!(viewport.take_pending(), Some(PhysicalSize::new(800, 600)));
        assert_eq!(viewport.take_pending(), None);

        // Reporting the same layout size again stays a no-op.
        viewport.set_client_size(800.0, 600.0, 1.0);
        assert_eq!(viewport.take_pending(), None);

        viewport.set_client_size(1024.0, 600.0, 1.0);
        assert_eq!(viewport.take_pending(), Some(PhysicalSize::new(1024, 600)));
    }

    #[test]
    fn degenerate_client_size_produces_nothing() {
        let mut viewport = Viewport::new(2.0);
        viewport.set_client_size(0.0, 600.0, 1.0);
        assert_eq!(viewport.backing_size(), None);
        assert_eq!(viewport.take_pending(), None);
    }

    #[test]
    fn tiny_sizes_clamp_to_one_pixel() {
        let mut viewport = Viewport::new(2.0);
        viewport.set_client_size(0.4, 0.4, 1.0);
        assert_eq!(viewport.backing_size(), Some(PhysicalSize::new(1, 1)));
    }
}

/// One scroll measurement, taken by the host at each scroll notification.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollSample {
    pub fn new(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            document_height,
        }
    }
}

/// Turns a continuous scroll position into a "near the bottom" signal.
///
/// The margin is fixed when the detector is created. Sample values are used
/// as given (negative or zero values are not clamped).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollProximityDetector {
    threshold_px: f64,
}

impl ScrollProximityDetector {
    pub fn new(threshold_px: f64) -> Self {
        // A negative (or NaN) margin has no meaning; treat it as "exactly at the bottom".
        let threshold_px = if threshold_px >= 0.0 { threshold_px } else { 0.0 };
        Self { threshold_px }
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    /// `true` iff `scroll_top + viewport_height >= document_height - threshold_px`.
    pub fn on_scroll_sample(
        &self,
        scroll_top: f64,
        viewport_height: f64,
        document_height: f64,
    ) -> bool {
        scroll_top + viewport_height >= document_height - self.threshold_px
    }

    pub fn on_sample(&self, sample: ScrollSample) -> bool {
        self.on_scroll_sample(
            sample.scroll_top,
            sample.viewport_height,
            sample.document_height,
        )
    }
}

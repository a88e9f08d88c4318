use log::debug;
use crate::errors::{MetricError, check_positive};
use crate::unit::{Dp, Sp, Pt, Inch, Mm, DEFAULT_DPI, ensure_positive, round_px};
use crate::unit::{pt_to_px, in_to_px, mm_to_px, px_to_pt, px_to_in, px_to_mm};

/// Converts screen-independent units (dp, sp) and physical units
/// (in, mm, pt) to display pixels, and back.
///
/// The fields are public so a metric can be built as a literal. Every
/// conversion revalidates the field it reads: a non-positive or non-finite
/// density counts as `1`, and such a DPI as `DEFAULT_DPI`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Metric {
    pub px_per_dp: f32,
    pub px_per_sp: f32,
    pub dpi: f32,
}

impl Default for Metric {
    fn default() -> Self {
        Metric {
            px_per_dp: 1.0,
            px_per_sp: 1.0,
            dpi: DEFAULT_DPI,
        }
    }
}

impl Metric {
    /// Never fails: invalid (non-positive or non-finite) densities become `1`,
    /// an invalid DPI becomes `DEFAULT_DPI`.
    pub fn new(px_per_dp: f32, px_per_sp: f32, dpi: f32) -> Metric {
        let metric = Metric {
            px_per_dp: ensure_positive(px_per_dp, 1.0),
            px_per_sp: ensure_positive(px_per_sp, 1.0),
            dpi: ensure_positive(dpi, DEFAULT_DPI),
        };

        if metric.px_per_dp != px_per_dp || metric.px_per_sp != px_per_sp || metric.dpi != dpi {
            debug!("Replaced invalid metric parameters ({}, {}, {}) with ({}, {}, {}).",
                   px_per_dp, px_per_sp, dpi,
                   metric.px_per_dp, metric.px_per_sp, metric.dpi);
        }

        metric
    }

    // The densities are kept as given and only validated when read.
    pub fn from_densities(px_per_dp: f32, px_per_sp: f32) -> Metric {
        Metric {
            px_per_dp,
            px_per_sp,
            dpi: DEFAULT_DPI,
        }
    }

    pub fn try_new(px_per_dp: f32, px_per_sp: f32, dpi: f32) -> Result<Metric, MetricError> {
        Ok(Metric {
            px_per_dp: check_positive("px-per-dp", px_per_dp)?,
            px_per_sp: check_positive("px-per-sp", px_per_sp)?,
            dpi: check_positive("dpi", dpi)?,
        })
    }

    #[inline]
    fn dp_density(&self) -> f64 {
        f64::from(ensure_positive(self.px_per_dp, 1.0))
    }

    #[inline]
    fn sp_density(&self) -> f64 {
        f64::from(ensure_positive(self.px_per_sp, 1.0))
    }

    #[inline]
    fn valid_dpi(&self) -> f32 {
        ensure_positive(self.dpi, DEFAULT_DPI)
    }

    pub fn dp_to_px(&self, value: Dp) -> i32 {
        round_px(f64::from(value.0) * self.dp_density())
    }

    pub fn sp_to_px(&self, value: Sp) -> i32 {
        round_px(f64::from(value.0) * self.sp_density())
    }

    pub fn dp_to_sp(&self, value: Dp) -> Sp {
        Sp((f64::from(value.0) * self.dp_density() / self.sp_density()) as f32)
    }

    pub fn sp_to_dp(&self, value: Sp) -> Dp {
        Dp((f64::from(value.0) * self.sp_density() / self.dp_density()) as f32)
    }

    pub fn px_to_dp(&self, value: i32) -> Dp {
        Dp((f64::from(value) / self.dp_density()) as f32)
    }

    pub fn px_to_sp(&self, value: i32) -> Sp {
        Sp((f64::from(value) / self.sp_density()) as f32)
    }

    pub fn inch_to_px(&self, value: Inch) -> i32 {
        round_px(in_to_px(value.0, self.valid_dpi()))
    }

    pub fn mm_to_px(&self, value: Mm) -> i32 {
        round_px(mm_to_px(value.0, self.valid_dpi()))
    }

    pub fn pt_to_px(&self, value: Pt) -> i32 {
        round_px(pt_to_px(value.0, self.valid_dpi()))
    }

    pub fn px_to_inch(&self, value: i32) -> Inch {
        Inch(px_to_in(value, self.valid_dpi()))
    }

    pub fn px_to_mm(&self, value: i32) -> Mm {
        Mm(px_to_mm(value, self.valid_dpi()))
    }

    pub fn px_to_pt(&self, value: i32) -> Pt {
        Pt(px_to_pt(value, self.valid_dpi()))
    }

    /// Returns the stored `(px_per_dp, px_per_sp)` pair, without validation.
    pub fn density(&self) -> (f32, f32) {
        (self.px_per_dp, self.px_per_sp)
    }

    /// Multiplies both densities and the DPI by `factor`.
    /// A non-positive or non-finite factor leaves the metric untouched.
    pub fn scale_by_dpi(&mut self, factor: f32) {
        let factor = ensure_positive(factor, 1.0);
        if factor != 1.0 {
            debug!("Scaling metric {:?} by {}.", self, factor);
        }
        self.px_per_dp *= factor;
        self.px_per_sp *= factor;
        self.dpi *= factor;
    }
}

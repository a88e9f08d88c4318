//! Conversions between user interface measurement units: density-independent
//! pixels (dp), scale-independent pixels (sp), points, inches, millimeters
//! and display pixels.
//!
//! ```
//! use pxconv::{Metric, Dp, Sp, Pt};
//!
//! let metric = Metric::new(2.0, 1.5, 96.0);
//! assert_eq!(metric.dp_to_px(Dp(10.0)), 20);
//! assert_eq!(metric.sp_to_px(Sp(10.0)), 15);
//! assert_eq!(metric.pt_to_px(Pt(12.0)), 16);
//! assert_eq!(metric.px_to_dp(20), Dp(10.0));
//! ```
//!
//! Invalid densities never cause an error: they're replaced by `1` (and an
//! invalid DPI by `96`) whenever they're read. Use [`Metric::try_new`] to
//! reject them instead.

pub mod unit;
pub mod metric;
pub mod errors;

pub use crate::unit::{Dp, Sp, Pt, Inch, Mm, DEFAULT_DPI, MILLIMETERS_PER_INCH, POINTS_PER_INCH};
pub use crate::metric::Metric;
pub use crate::errors::MetricError;

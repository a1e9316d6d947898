pub mod prepay_roi;

pub use prepay_roi::{prepay_roi, PrepayRoiInput, PrepayRoiResult, FLEXIBILITY_MARGIN_FACTOR};

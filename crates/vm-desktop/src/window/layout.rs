//! Responsive default geometry

use crate::config::CascadeConfig;
use crate::math::{Size, Vec2};
use crate::viewport::{Viewport, ViewportClass};

/// Size a window takes when opened
///
/// Desktop windows use their template size; mobile windows shrink to fit the
/// viewport minus side margins and the taskbar.
pub fn responsive_size(
    default_size: Size,
    class: ViewportClass,
    viewport: &Viewport,
    cascade: &CascadeConfig,
) -> Size {
    match class {
        ViewportClass::Desktop => default_size,
        ViewportClass::Mobile => default_size.min(Size::new(
            viewport.size.width - cascade.mobile_inset.width,
            viewport.size.height - cascade.mobile_inset.height,
        )),
    }
}

/// Cascade position for the window at `index` in the catalog
///
/// Desktop windows are laid on a staggered grid; mobile windows are centered
/// horizontally and alternate between two heights.
pub fn cascade_position(
    index: usize,
    size: Size,
    class: ViewportClass,
    viewport: &Viewport,
    cascade: &CascadeConfig,
) -> Vec2 {
    match class {
        ViewportClass::Desktop => {
            let columns = cascade.columns.max(1) as usize;
            let column = (index % columns) as f32;
            let row = (index / columns) as f32;
            Vec2::new(
                cascade.origin.x + column * cascade.column_step,
                cascade.origin.y + row * cascade.row_step,
            )
        }
        ViewportClass::Mobile => {
            let rows = cascade.mobile_rows.max(1) as usize;
            let stagger = (index % rows) as f32;
            Vec2::new(
                cascade
                    .mobile_margin
                    .max((viewport.size.width - size.width) / 2.0),
                cascade.mobile_top + stagger * cascade.mobile_stagger,
            )
        }
    }
}

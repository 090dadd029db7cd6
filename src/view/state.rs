//! Immutable view state handed to the renderers.
//!
//! Every change produces a new value; nothing here is shared or mutated in place.

use super::drag::{BoxSize, DragSession, Point, PointerEvent};
use crate::aggregator::MonthFilter;
use crate::utils::config::{STATS_BOX_HEIGHT, STATS_BOX_WIDTH};

/// Floating stats box placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsBox {
    pub position: Point,
    pub visible: bool,
}

impl Default for StatsBox {
    fn default() -> Self {
        Self {
            position: Point::new(0.0, 80.0),
            visible: true,
        }
    }
}

impl StatsBox {
    pub fn size() -> BoxSize {
        BoxSize::new(STATS_BOX_WIDTH, STATS_BOX_HEIGHT)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub month: MonthFilter,

    /// 1-based; clamped by the paginator when rendered
    pub page: usize,

    pub stats_box: StatsBox,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            month: MonthFilter::Unselected,
            page: 1,
            stats_box: StatsBox::default(),
        }
    }
}

impl ViewState {
    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    pub fn with_month(self, month: MonthFilter) -> Self {
        Self { month, ..self }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    pub fn with_stats_box_at(self, position: Point) -> Self {
        Self {
            stats_box: StatsBox {
                position,
                ..self.stats_box
            },
            ..self
        }
    }

    pub fn hide_stats_box(self) -> Self {
        Self {
            stats_box: StatsBox {
                visible: false,
                ..self.stats_box
            },
            ..self
        }
    }

    /// Replay a drag gesture on the stats box
    pub fn drag_stats_box(self, events: impl IntoIterator<Item = PointerEvent>) -> Self {
        let session = DragSession::new(self.stats_box.position, StatsBox::size()).replay(events);
        self.with_stats_box_at(session.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    #[test]
    fn test_builders_return_new_values() {
        let base = ViewState::default();
        let next = base
            .clone()
            .with_query("shirt")
            .with_month(MonthFilter::Selected(Month::June))
            .with_page(0);

        assert_eq!(base.query, "");
        assert_eq!(next.query, "shirt");
        assert_eq!(next.month.number(), Some(6));
        assert_eq!(next.page, 1);
    }

    #[test]
    fn test_drag_stats_box() {
        let state = ViewState::default().drag_stats_box([
            PointerEvent::Down(Point::new(20.0, 100.0)),
            PointerEvent::Move(Point::new(628.0, 170.0)),
            PointerEvent::Up(Point::new(628.0, 170.0)),
        ]);

        assert_eq!(state.stats_box.position, Point::new(500.0, 100.0));
        assert!(state.stats_box.visible);
        assert!(!state.hide_stats_box().stats_box.visible);
    }
}

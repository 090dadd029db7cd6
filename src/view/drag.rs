//! Drag-to-reposition for the floating stats box.
//!
//! Pointer-down inside the box starts a drag, every pointer-move while
//! dragging centers the box on the pointer, pointer-up ends the drag.
//! Only coordinates go in and out; wiring real input events is up to the
//! front end.

/// Screen position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of the dragged box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

/// Top-left offset that centers a box of `size` on `pointer`
pub fn centered_offset(pointer: Point, size: BoxSize) -> Point {
    Point {
        x: pointer.x - size.width / 2.0,
        y: pointer.y - size.height / 2.0,
    }
}

/// Drag state of one box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    offset: Point,
    size: BoxSize,
    dragging: bool,
}

impl DragSession {
    pub fn new(offset: Point, size: BoxSize) -> Self {
        Self {
            offset,
            size,
            dragging: false,
        }
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn contains(&self, point: Point) -> bool {
        point.x >= self.offset.x
            && point.x <= self.offset.x + self.size.width
            && point.y >= self.offset.y
            && point.y <= self.offset.y + self.size.height
    }

    /// Apply one event, returning the next state
    pub fn handle(self, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Down(point) if self.contains(point) => Self {
                dragging: true,
                ..self
            },
            PointerEvent::Move(point) if self.dragging => Self {
                offset: centered_offset(point, self.size),
                ..self
            },
            PointerEvent::Up(_) => Self {
                dragging: false,
                ..self
            },
            _ => self,
        }
    }

    /// Fold a sequence of events
    pub fn replay(self, events: impl IntoIterator<Item = PointerEvent>) -> Self {
        events.into_iter().fold(self, Self::handle)
    }
}

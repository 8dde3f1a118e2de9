use pullrefresh_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top = 0,
    Bottom = 1,
    Left = 2,
    Right = 3,
}

/// Screen edges a touch started on, as reported by the platform.
///
/// A down that starts on an edge belongs to a system gesture (e.g. the
/// notification shade) and must never be treated as a pull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeFlags(u8);

impl EdgeFlags {
    pub const NONE: Self = Self(0);

    pub fn with(mut self, edge: Edge) -> Self {
        self.0 |= 1 << (edge as u8);
        self
    }

    pub fn contains(&self, edge: Edge) -> bool {
        (self.0 & (1 << (edge as u8))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for EdgeFlags {
    fn default() -> Self {
        Self::NONE
    }
}

/// One pointer sample delivered to a refreshable view, in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub edge_flags: EdgeFlags,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            edge_flags: EdgeFlags::NONE,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y))
    }

    pub fn with_edge_flags(mut self, edge_flags: EdgeFlags) -> Self {
        self.edge_flags = edge_flags;
        self
    }

    pub fn is_edge_originated(&self) -> bool {
        !self.edge_flags.is_empty()
    }

    pub fn ends_sequence(&self) -> bool {
        matches!(self.kind, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

use core::ops::{Add, AddAssign, Div, Sub};

/// Integer 2D point in screen pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntVec2 {
    pub x: i32,
    pub y: i32,
}

impl IntVec2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
}

impl From<(i32, i32)> for IntVec2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        IntVec2::new(x, y)
    }
}

impl Add for IntVec2 {
    type Output = IntVec2;
    #[inline]
    fn add(self, rhs: IntVec2) -> IntVec2 {
        IntVec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for IntVec2 {
    #[inline]
    fn add_assign(&mut self, rhs: IntVec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for IntVec2 {
    type Output = IntVec2;
    #[inline]
    fn sub(self, rhs: IntVec2) -> IntVec2 {
        IntVec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Integer division per component (truncates toward zero).
impl Div<i32> for IntVec2 {
    type Output = IntVec2;
    #[inline]
    fn div(self, rhs: i32) -> IntVec2 {
        IntVec2::new(self.x / rhs, self.y / rhs)
    }
}

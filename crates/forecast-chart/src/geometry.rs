// File: crates/forecast-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for skia_safe::Point {
    fn from(p: Point) -> Self {
        skia_safe::Point::new(p.x as f32, p.y as f32)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { left: origin.x, top: origin.y, right: origin.x + size.width, bottom: origin.y + size.height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn origin(&self) -> Point { Point::new(self.left, self.top) }
    pub fn center_x(&self) -> f64 { (self.left + self.right) * 0.5 }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

impl From<Rect> for skia_safe::Rect {
    fn from(r: Rect) -> Self {
        skia_safe::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
    }
}

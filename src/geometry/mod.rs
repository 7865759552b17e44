use num_traits::Float;


/// Euclidean distance in three dimensions
pub fn euclidean_3d<T>(x1: T, y1: T, z1: T, x2: T, y2: T, z2: T) -> T
where
    T: Float,
    {
    squared_euclidean_3d(x1, y1, z1, x2, y2, z2).sqrt()
}

/// Squared Euclidean distance in three dimensions
pub fn squared_euclidean_3d<T>(x1: T, y1: T, z1: T, x2: T, y2: T, z2: T) -> T
where
    T: Float,
    {
    (x1 - x2).powi(2) + (y1 - y2).powi(2) + (z1 - z2).powi(2)
}


/// 3D Point - position of a star
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance to another point
    pub fn distance(&self, other: &Point3) -> f64 {
        euclidean_3d(self.x, self.y, self.z, other.x, other.y, other.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

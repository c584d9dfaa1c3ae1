use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// A horizontal distance in rendered pixels. Every width, range, and coordinate produced or
/// consumed by the layout code is expressed in `Px`
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}px")]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);
    pub const INFINITY: Px = Px(f32::INFINITY);

    /// The larger of the two widths
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// The smaller of the two widths
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }
}

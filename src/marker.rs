/// The "no value" marker.
///
/// Converts into an empty [`Optional`](crate::Optional) of any payload type and compares
/// equal to every disengaged optional. It orders before every engaged optional.
/// ```
/// use inline_optional::{Disengaged, Optional};
///
/// let empty = Optional::<u32>::from(Disengaged);
/// assert!(empty == Disengaged);
/// assert!(Disengaged < Optional::some(0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disengaged;

/// Tag selecting in-place construction, see [`Optional::in_place`](crate::Optional::in_place).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InPlace;

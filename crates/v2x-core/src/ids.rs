//! Strongly typed identifiers for the two entity kinds.
//!
//! The simulator hands out plain integer ids per entity kind; a radio unit
//! and a vehicle may share the same number.  Wrapping them keeps the two id
//! spaces from being mixed up when pairs are formed.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $prefix:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Prefix used when this id is rendered as a graph node key.
            pub const PREFIX: &'static str = $prefix;

            /// Graph node key, `"<prefix>_<id>"`.
            pub fn node_key(self) -> String {
                format!("{}_{}", Self::PREFIX, self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Identifier of a roadside radio unit.
    pub struct RadioUnitId(u32) => "rsu";
}

typed_id! {
    /// Identifier of a vehicle.
    pub struct VehicleId(u32) => "vehicle";
}

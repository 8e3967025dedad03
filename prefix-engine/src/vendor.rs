//! Vendor prefix flags

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Vendors the default prefixer may emit variants for.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Vendors: u8 {
        /// `-webkit-`
        const WEBKIT = 0b001;
        /// `-moz-`
        const MOZ = 0b010;
        /// `-ms-`
        const MS = 0b100;
    }
}

impl Default for Vendors {
    fn default() -> Self {
        Vendors::all()
    }
}

impl Vendors {
    /// Emission order for variants of one declaration.
    pub const ORDER: [Vendors; 3] = [Vendors::WEBKIT, Vendors::MOZ, Vendors::MS];

    /// Text prefix for a single vendor flag.
    pub fn prefix(self) -> &'static str {
        if self == Vendors::WEBKIT {
            "-webkit-"
        } else if self == Vendors::MOZ {
            "-moz-"
        } else if self == Vendors::MS {
            "-ms-"
        } else {
            ""
        }
    }
}

/// Check whether a property, value or selector part starts with a vendor prefix.
pub fn is_prefixed(text: &str) -> bool {
    Vendors::ORDER
        .iter()
        .any(|v| text.starts_with(v.prefix()))
        || text.starts_with("-o-")
}

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A position in the molecule's 2D coordinate frame.
pub type Point = nalgebra::Point2<f64>;

/// A displacement in the molecule's 2D coordinate frame.
pub type Vector = nalgebra::Vector2<f64>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bond order string: '{0}'")]
pub struct ParseBondOrderError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bond stereo string: '{0}'")]
pub struct ParseBondStereoError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bond alignment string: '{0}'")]
pub struct ParseAlignmentError(String);

macro_rules! elements {
    ($($sym:ident)+) => {
        /// Chemical element, plus [`Element::Dummy`] for attachment points
        /// and pseudo-atoms (`*`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[repr(u8)]
        pub enum Element {
            Dummy = 0,
            $($sym,)+
        }

        impl Element {
            const ALL: &'static [Element] = &[Element::Dummy, $(Element::$sym,)+];

            pub fn symbol(&self) -> &'static str {
                match self {
                    Element::Dummy => "*",
                    $(Element::$sym => stringify!($sym),)+
                }
            }
        }
    };
}

elements! {
    H He
    Li Be B C N O F Ne
    Na Mg Al Si P S Cl Ar
    K Ca Sc Ti V Cr Mn Fe Co Ni Cu Zn Ga Ge As Se Br Kr
    Rb Sr Y Zr Nb Mo Tc Ru Rh Pd Ag Cd In Sn Sb Te I Xe
    Cs Ba La Ce Pr Nd Pm Sm Eu Gd Tb Dy Ho Er Tm Yb Lu
    Hf Ta W Re Os Ir Pt Au Hg Tl Pb Bi Po At Rn
    Fr Ra Ac Th Pa U Np Pu Am Cm Bk Cf Es Fm Md No Lr
    Rf Db Sg Bh Hs Mt Ds Rg Cn Nh Fl Mc Lv Ts Og
}

impl Element {
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    /// Typical valence used to derive implicit hydrogen counts.
    ///
    /// Elements outside the organic subset return `None` and never receive
    /// implicit hydrogens.
    pub fn default_valence(&self) -> Option<u8> {
        match self {
            Element::H | Element::F | Element::Cl | Element::Br | Element::I => Some(1),
            Element::O | Element::S => Some(2),
            Element::B | Element::N | Element::P => Some(3),
            Element::C | Element::Si => Some(4),
            _ => None,
        }
    }

    pub fn is_carbon(&self) -> bool {
        matches!(self, Element::C)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::ALL
            .iter()
            .copied()
            .find(|e| e.symbol() == s)
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BondOrder {
    Single,
    Double,
    Triple,
}

impl BondOrder {
    /// Contribution of this bond to an atom's bond-order sum.
    pub fn value(&self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondOrder::Single => write!(f, "Single"),
            BondOrder::Double => write!(f, "Double"),
            BondOrder::Triple => write!(f, "Triple"),
        }
    }
}

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "1" | "-" => Ok(BondOrder::Single),
            "double" | "2" | "=" => Ok(BondOrder::Double),
            "triple" | "3" | "#" => Ok(BondOrder::Triple),
            _ => Err(ParseBondOrderError(s.to_string())),
        }
    }
}

/// Wedge annotation on a single bond. The stereocenter is the bond's first atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BondStereo {
    #[default]
    None,
    Up,
    Down,
}

impl fmt::Display for BondStereo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondStereo::None => write!(f, "None"),
            BondStereo::Up => write!(f, "Wedge"),
            BondStereo::Down => write!(f, "Hash"),
        }
    }
}

impl FromStr for BondStereo {
    type Err = ParseBondStereoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "0" => Ok(BondStereo::None),
            "up" | "wedge" | "1" => Ok(BondStereo::Up),
            "down" | "hash" | "6" => Ok(BondStereo::Down),
            _ => Err(ParseBondStereoError(s.to_string())),
        }
    }
}

/// Side of a double bond's centerline that carries the offset line.
///
/// `SameSide` means the side the bond perpendicular points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Center,
    SameSide,
    OppositeSide,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Center => write!(f, "Center"),
            Alignment::SameSide => write!(f, "Same side"),
            Alignment::OppositeSide => write!(f, "Opposite side"),
        }
    }
}

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "center" | "0" => Ok(Alignment::Center),
            "same_side" | "perpendicular" | "1" => Ok(Alignment::SameSide),
            "opposite_side" | "2" => Ok(Alignment::OppositeSide),
            _ => Err(ParseAlignmentError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn element_from_str_valid() {
        assert_eq!(Element::from_str("H").unwrap(), Element::H);
        assert_eq!(Element::from_str("Cl").unwrap(), Element::Cl);
        assert_eq!(Element::from_str("Og").unwrap(), Element::Og);
        assert_eq!(Element::from_str("*").unwrap(), Element::Dummy);
    }

    #[test]
    fn element_from_str_is_case_sensitive() {
        let err = Element::from_str("cl").unwrap_err();
        assert_eq!(err.to_string(), "invalid or unsupported element symbol: 'cl'");
    }

    #[test]
    fn atomic_numbers_follow_periodic_table() {
        assert_eq!(Element::Dummy.atomic_number(), 0);
        assert_eq!(Element::H.atomic_number(), 1);
        assert_eq!(Element::C.atomic_number(), 6);
        assert_eq!(Element::Na.atomic_number(), 11);
        assert_eq!(Element::Og.atomic_number(), 118);
    }

    #[test]
    fn default_valence_covers_organic_subset() {
        assert_eq!(Element::C.default_valence(), Some(4));
        assert_eq!(Element::N.default_valence(), Some(3));
        assert_eq!(Element::O.default_valence(), Some(2));
        assert_eq!(Element::Br.default_valence(), Some(1));
        assert_eq!(Element::Fe.default_valence(), None);
        assert_eq!(Element::Dummy.default_valence(), None);
    }

    #[test]
    fn bond_order_parsing_and_value() {
        assert_eq!(BondOrder::from_str("Double").unwrap(), BondOrder::Double);
        assert_eq!(BondOrder::from_str("#").unwrap(), BondOrder::Triple);
        assert_eq!(BondOrder::Triple.value(), 3);
        let err = BondOrder::from_str("aromatic").unwrap_err();
        assert_eq!(err.to_string(), "invalid bond order string: 'aromatic'");
    }

    #[test]
    fn stereo_and_alignment_parsing() {
        assert_eq!(BondStereo::from_str("wedge").unwrap(), BondStereo::Up);
        assert_eq!(BondStereo::from_str("6").unwrap(), BondStereo::Down);
        assert_eq!(
            Alignment::from_str("opposite-side").unwrap(),
            Alignment::OppositeSide
        );
        assert_eq!(Alignment::from_str("Same side").unwrap(), Alignment::SameSide);
        assert!(Alignment::from_str("left").is_err());
    }
}

// vm-core/src/units.rs
//
// Volumetrics run in fixed oilfield (imperial) units. The uom types are the
// typed entry point; the engine itself works on plain `Real` in acres, feet,
// and fractions.

use uom::si::f64::{Area as UomArea, Length as UomLength, Ratio as UomRatio, Volume as UomVolume};

pub type Area = UomArea;
pub type Length = UomLength;
pub type Ratio = UomRatio;
pub type Volume = UomVolume;

#[inline]
pub fn acres(v: f64) -> Area {
    use uom::si::area::acre;
    Area::new::<acre>(v)
}

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn fraction(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[inline]
pub fn acre_ft(v: f64) -> Volume {
    use uom::si::volume::acre_foot;
    Volume::new::<acre_foot>(v)
}

#[inline]
pub fn to_acres(a: Area) -> f64 {
    use uom::si::area::acre;
    a.get::<acre>()
}

#[inline]
pub fn to_ft(l: Length) -> f64 {
    use uom::si::length::foot;
    l.get::<foot>()
}

#[inline]
pub fn to_fraction(r: Ratio) -> f64 {
    use uom::si::ratio::ratio;
    r.get::<ratio>()
}

/// Oilfield conversion factors, fixed at their customary rounded values.
pub mod constants {
    /// Barrels in one acre-foot.
    pub const BBL_PER_ACRE_FT: f64 = 7758.0;
    /// Square feet in one acre (= cubic feet in one acre-foot).
    pub const SQFT_PER_ACRE: f64 = 43_560.0;
    /// Results are reported in thousands of barrels (Mbbl, MSTB).
    pub const THOUSAND: f64 = 1_000.0;
    /// Gas results are reported in millions of cubic feet (MMcf, MMSCF).
    pub const MILLION: f64 = 1_000_000.0;

    /// acre-ft -> Mbbl
    pub const MBBL_PER_ACRE_FT: f64 = BBL_PER_ACRE_FT / THOUSAND;
    /// acre-ft -> MMcf
    pub const MMCF_PER_ACRE_FT: f64 = SQFT_PER_ACRE / MILLION;
}

// st-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
    Volume as UomVolume, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Volume = UomVolume;
pub type FlowRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn liters(v: f64) -> Volume {
    use uom::si::volume::liter;
    Volume::new::<liter>(v)
}

#[inline]
pub fn lps(v: f64) -> FlowRate {
    use uom::si::volume_rate::liter_per_second;
    FlowRate::new::<liter_per_second>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn hours(v: f64) -> Time {
    use uom::si::time::hour;
    Time::new::<hour>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = m(1.0);
        let _t = celsius(15.0);
        let _v = liters(500.0);
        let _q = lps(1.0);
        let _dt = s(1.0);
        let _h = hours(1.0);
        let _r = unitless(0.18);
    }

    #[test]
    fn liters_round_trip() {
        use uom::si::volume::liter;
        assert!((liters(60.0).get::<liter>() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn hours_are_seconds() {
        use uom::si::time::second;
        assert_eq!(hours(1.0).get::<second>(), 3600.0);
    }
}

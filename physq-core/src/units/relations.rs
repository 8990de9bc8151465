//! Products and quotients between the built-in kinds.
//!
//! Each row enables one `*` or `/` between [`Quantity`](crate::Quantity) types and is checked against the dimension
//! algebra when the crate is compiled. Same-kind quotients (`Length / Length`) are always
//! [`Dimensionless`](crate::unitless::Dimensionless) and are not listed.

use crate::relations;
use crate::units::angular::{Angle, AngularVelocity};
use crate::units::electromagnetic::{
    Capacitance, Charge, Current, Inductance, MagneticField, MagneticFlux, Resistance, Voltage,
};
use crate::units::length::{Area, Length, Volume};
use crate::units::mass::Mass;
use crate::units::mechanics::{
    Acceleration, Density, Energy, Force, Momentum, Power, Pressure, SpecificEnergy, Velocity,
};
use crate::units::time::{Frequency, Time};
use crate::units::unitless::Dimensionless;

relations! {
    // Geometry
    Length ^ 2 = Area;
    Length * Area = Volume;
    Area / Length = Length;
    Volume / Length = Area;
    Volume / Area = Length;

    // Kinematics
    Length / Time = Velocity;
    Velocity * Time = Length;
    Length / Velocity = Time;
    Velocity / Time = Acceleration;
    Acceleration * Time = Velocity;
    Velocity / Acceleration = Time;
    Velocity ^ 2 = SpecificEnergy;
    Dimensionless / Time = Frequency;
    Frequency * Time = Dimensionless;
    Angle / Time = AngularVelocity;
    AngularVelocity * Time = Angle;

    // Dynamics
    Mass * Velocity = Momentum;
    Momentum / Mass = Velocity;
    Momentum / Velocity = Mass;
    Momentum / Time = Force;
    Force * Time = Momentum;
    Mass * Acceleration = Force;
    Force / Mass = Acceleration;
    Force / Acceleration = Mass;

    // Energy and power
    Force * Length = Energy;
    Energy / Length = Force;
    Energy / Force = Length;
    Mass * SpecificEnergy = Energy;
    Energy / Mass = SpecificEnergy;
    Energy / SpecificEnergy = Mass;
    Energy / Time = Power;
    Power * Time = Energy;
    Energy / Power = Time;
    Force * Velocity = Power;
    Power / Velocity = Force;
    Power / Force = Velocity;

    // Pressure and density
    Force / Area = Pressure;
    Pressure * Area = Force;
    Force / Pressure = Area;
    Pressure * Volume = Energy;
    Energy / Volume = Pressure;
    Energy / Pressure = Volume;
    Mass / Volume = Density;
    Density * Volume = Mass;
    Mass / Density = Volume;

    // Electromagnetism
    Current * Time = Charge;
    Charge / Time = Current;
    Charge / Current = Time;
    Voltage * Current = Power;
    Power / Current = Voltage;
    Power / Voltage = Current;
    Voltage / Current = Resistance;
    Resistance * Current = Voltage;
    Voltage / Resistance = Current;
    Charge / Voltage = Capacitance;
    Capacitance * Voltage = Charge;
    Charge / Capacitance = Voltage;
    Voltage * Charge = Energy;
    Energy / Charge = Voltage;
    Energy / Voltage = Charge;
    MagneticField * Area = MagneticFlux;
    MagneticFlux / Area = MagneticField;
    MagneticFlux / MagneticField = Area;
    Inductance * Current = MagneticFlux;
    MagneticFlux / Current = Inductance;
    MagneticFlux / Inductance = Current;
    Voltage * Time = MagneticFlux;
    MagneticFlux / Time = Voltage;
    MagneticFlux / Voltage = Time;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Kind, KindDiv, KindMul};

    fn product_dim<A: KindMul<B>, B: Kind>() -> crate::Dimension {
        <A::Output as Kind>::DIM
    }

    fn quotient_dim<A: KindDiv<B>, B: Kind>() -> crate::Dimension {
        <A::Output as Kind>::DIM
    }

    #[test]
    fn product_rows_compose_dimensions() {
        assert_eq!(product_dim::<Mass, Acceleration>(), Mass::DIM * Acceleration::DIM);
        assert_eq!(product_dim::<Acceleration, Mass>(), Force::DIM);
        assert_eq!(product_dim::<Length, Length>(), crate::Dimension::AREA);
        assert_eq!(product_dim::<Voltage, Current>(), Power::DIM);
    }

    #[test]
    fn quotient_rows_decompose_dimensions() {
        assert_eq!(quotient_dim::<Force, Area>(), Force::DIM / Area::DIM);
        assert_eq!(quotient_dim::<Energy, Time>(), Power::DIM);
        assert_eq!(quotient_dim::<MagneticFlux, Current>(), Inductance::DIM);
    }

    #[test]
    fn same_kind_quotient_is_dimensionless() {
        assert!(quotient_dim::<Pressure, Pressure>().is_dimensionless());
        assert!(quotient_dim::<Angle, Angle>().is_dimensionless());
    }
}

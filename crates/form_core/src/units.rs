use shared::domain::Units;

/// Converts a measurement between centimetres and millimetres.
pub fn convert_units(value: f64, from: Units, to: Units) -> f64 {
    match (from, to) {
        (Units::Centimetres, Units::Millimetres) => value * 10.0,
        (Units::Millimetres, Units::Centimetres) => value / 10.0,
        _ => value,
    }
}

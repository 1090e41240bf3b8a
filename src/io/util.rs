/// Formats a float so that parsing the text yields exactly the same value.
///
/// Values of moderate magnitude use plain decimal notation, very small or
/// very large ones scientific notation (`1e-15`, `6.02214076e23`). Both use the
/// shortest digit string that round-trips.
pub fn f_to_str(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-4..1e6).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

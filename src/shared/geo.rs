/// Coordinate coercion for values imported from spreadsheets.
///
/// Source columns are free-form text; anything that does not parse as a finite
/// float becomes `None` and the point is simply not plotted. Bad data must
/// never fail a request.
pub fn parse_coord(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_floats() {
        assert_eq!(parse_coord(Some("-6.9175")), Some(-6.9175));
        assert_eq!(parse_coord(Some(" 107.6191 ")), Some(107.6191));
    }

    #[test]
    fn garbage_becomes_none() {
        assert_eq!(parse_coord(Some("")), None);
        assert_eq!(parse_coord(Some("abc")), None);
        assert_eq!(parse_coord(Some("6,9175")), None);
        assert_eq!(parse_coord(Some("NaN")), None);
        assert_eq!(parse_coord(None), None);
    }
}

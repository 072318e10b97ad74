/// Split a cumulative total into `(regular, overtime)` hours.
///
/// Overtime is always "hours above the threshold in the total so far";
/// callers pass the running total, never a single entry.
pub fn split_hours(total_hours: f64, threshold: f64) -> (f64, f64) {
    let overtime = (total_hours - threshold).max(0.0);
    let regular = total_hours.min(threshold);
    (regular, overtime)
}

pub fn overtime_pay(overtime_hours: f64, hourly_wage: f64, multiplier: f64) -> f64 {
    overtime_hours * hourly_wage * multiplier
}

/// Regular pay plus overtime pay, before withholding.
pub fn gross_pay(regular_hours: f64, hourly_wage: f64, overtime_pay: f64) -> f64 {
    regular_hours * hourly_wage + overtime_pay
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_threshold_has_no_overtime() {
        assert_eq!(split_hours(32.0, 40.0), (32.0, 0.0));
        assert_eq!(split_hours(40.0, 40.0), (40.0, 0.0));
    }

    #[test]
    fn over_threshold_splits_at_threshold() {
        assert_eq!(split_hours(52.5, 40.0), (40.0, 12.5));
    }

    #[test]
    fn overtime_is_paid_at_multiplier() {
        assert_eq!(overtime_pay(5.0, 20.0, 1.5), 150.0);
        assert_eq!(gross_pay(40.0, 20.0, 150.0), 950.0);
    }
}

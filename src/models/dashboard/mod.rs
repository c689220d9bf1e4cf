pub mod responses;

/// 出勤率：出勤取下整，缺勤为 100 减出勤后取上整，无记录时均为 0
pub fn attendance_percentages(present: i64, total: i64) -> (i64, i64) {
    if total <= 0 {
        return (0, 0);
    }
    let percent_present = (present as f64 / total as f64 * 100.0).floor();
    let percent_absent = (100.0 - percent_present).ceil();
    (percent_present as i64, percent_absent as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_attendance_is_zero() {
        assert_eq!(attendance_percentages(0, 0), (0, 0));
    }

    #[test]
    fn test_present_is_floored() {
        // 2/3 = 66.66...
        assert_eq!(attendance_percentages(2, 3), (66, 34));
        assert_eq!(attendance_percentages(1, 3), (33, 67));
    }

    #[test]
    fn test_full_and_none_present() {
        assert_eq!(attendance_percentages(4, 4), (100, 0));
        assert_eq!(attendance_percentages(0, 5), (0, 100));
    }
}

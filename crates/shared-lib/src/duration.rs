//! 项目工期计算
//!
//! 根据开始/结束两个日期，计算一个用于页面展示的工期字符串。
//!
//! ## 算法说明
//!
//! 先计算两个日期之间的整小时差，然后：
//! - 月数 = 小时数 / 24 / 30
//! - 天数 = (小时数 / 24) % 30
//!
//! 注意：这里把每个月固定按30天折算，并不是日历意义上的精确月份，
//! 展示文案依赖这个折算规则。

use chrono::NaiveDate;

/// 日期输入的固定格式，对应表单中 `<input type="date">` 提交的值
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析固定格式的日期字符串
///
/// 解析失败时静默返回零值日期（不向上传播错误），与表单输入
/// 缺失/非法时"按零值处理"的行为保持一致。
pub fn parse_date_or_default(input: &str) -> NaiveDate {
    NaiveDate::parse_from_str(input, DATE_FORMAT).unwrap_or_default()
}

/// 计算工期展示字符串
///
/// 根据月数和天数的组合，产生以下四种形式之一：
///
/// | 条件              | 结果                  |
/// |-------------------|----------------------|
/// | 月 ≥ 1 且 天 ≥ 1  | `"<m> month <d> days"` |
/// | 月 ≥ 1 且 天 ≤ 0  | `"<m> month"`          |
/// | 月 < 1 且 天 ≥ 0  | `"<d> days"`           |
/// | 其他（均为负）     | `"0 days"`             |
///
/// 结束日期早于开始日期时会落入最后的兜底分支。
pub fn project_duration(start: NaiveDate, end: NaiveDate) -> String {
    let hours = (end - start).num_hours();

    let months = hours / 24 / 30;
    let days = (hours / 24) % 30;

    if months >= 1 && days >= 1 {
        format!("{months} month {days} days")
    } else if months >= 1 && days <= 0 {
        format!("{months} month")
    } else if months < 1 && days >= 0 {
        format!("{days} days")
    } else {
        "0 days".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_equal_dates() {
        // 开始 == 结束，返回零工期兜底字符串
        let d = date("2023-01-15");
        assert_eq!(project_duration(d, d), "0 days");
    }

    #[test]
    fn test_forty_day_span() {
        // 40天 = 1个月（按30天折算）+ 10天
        let start = date("2023-01-01");
        let end = date("2023-02-10");
        assert_eq!(project_duration(start, end), "1 month 10 days");
    }

    #[test]
    fn test_twenty_five_day_span() {
        // 不足一个月时只展示天数
        let start = date("2023-01-01");
        let end = date("2023-01-26");
        assert_eq!(project_duration(start, end), "25 days");
    }

    #[test]
    fn test_sixty_one_day_span() {
        let start = date("2023-01-01");
        let end = date("2023-03-03");
        assert_eq!(project_duration(start, end), "2 month 1 days");
    }

    #[test]
    fn test_exact_month() {
        // 整月时不带天数后缀
        let start = date("2023-01-01");
        let end = date("2023-01-31");
        assert_eq!(project_duration(start, end), "1 month");
    }

    #[test]
    fn test_end_before_start() {
        // 结束早于开始，落入兜底分支
        let start = date("2023-02-01");
        let end = date("2023-01-01");
        assert_eq!(project_duration(start, end), "0 days");
    }

    #[test]
    fn test_parse_invalid_date() {
        // 非法输入静默返回零值日期，不panic
        assert_eq!(parse_date_or_default("not-a-date"), NaiveDate::default());
        assert_eq!(parse_date_or_default(""), NaiveDate::default());
    }

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(parse_date_or_default("2023-06-15"), date("2023-06-15"));
    }

    #[test]
    fn test_two_invalid_dates_give_zero_duration() {
        // 两个日期都解析失败时，相当于相等的零值日期
        let start = parse_date_or_default("oops");
        let end = parse_date_or_default("also-bad");
        assert_eq!(project_duration(start, end), "0 days");
    }
}

//! slug 工具函数
//!
//! 把展示用的项目名转换为 URL / 文件系统安全的 slug，
//! 用于派生上传文件的文件名。

/// 把名称转换为 slug
///
/// 规则：
/// - 全部转小写
/// - ASCII 字母数字保留，其余字符替换为 `-`
/// - 连续的 `-` 折叠为一个，并去掉首尾的 `-`
///
/// 注意：两个项目名派生出相同 slug 时不做区分，后上传的文件
/// 会静默覆盖之前的文件。
pub fn slugify(name: &str) -> String {
    let mapped: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    // 折叠连续的连字符
    let mut slug = String::with_capacity(mapped.len());
    let mut prev_hyphen = false;
    for c in mapped.chars() {
        if c == '-' {
            if !prev_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            prev_hyphen = true;
        } else {
            slug.push(c);
            prev_hyphen = false;
        }
    }

    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("My First Project"), "my-first-project");
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("a/b\\c"), "a-b-c");
    }

    #[test]
    fn test_collapse_and_trim() {
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
        assert_eq!(slugify("--already--slugged--"), "already-slugged");
    }

    #[test]
    fn test_same_name_same_slug() {
        // 同名项目产生同一个slug，上传文件会相互覆盖
        assert_eq!(slugify("Portfolio Site"), slugify("portfolio site"));
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}

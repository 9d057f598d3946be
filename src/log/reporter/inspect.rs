use colored::{ColoredString, Colorize};
use serde_json::Value;

/// 通用值的可读格式化
///
/// 顶层字符串原样输出；容器内的字符串加引号（默认单引号）。
/// `colors` 打开时是否真正输出颜色由 colored 的全局控制决定
/// （TTY、NO_COLOR、CLICOLOR、CLICOLOR_FORCE）。
pub fn inspect(value: &Value, colors: bool) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => inspect_nested(other, colors),
    }
}

fn inspect_nested(value: &Value, colors: bool) -> String {
    match value {
        Value::Null => paint(colors, "null", |s| s.bold()),
        Value::Bool(b) => paint(colors, &b.to_string(), |s| s.yellow()),
        Value::Number(n) => paint(colors, &n.to_string(), |s| s.yellow()),
        Value::String(s) => paint(colors, &quote(s), |s| s.green()),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(|v| inspect_nested(v, colors)).collect();
            format!("[ {} ]", items.join(", "))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", key(k), inspect_nested(v, colors)))
                .collect();
            format!("{{ {} }}", entries.join(", "))
        }
    }
}

fn paint(colors: bool, text: &str, style: fn(&str) -> ColoredString) -> String {
    if colors {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

// 默认单引号；含单引号时依次改用双引号、反引号，都冲突时才转义单引号
fn quote(s: &str) -> String {
    let delimiter = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') {
        '`'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

// 合法标识符直接输出，其余加引号
fn key(k: &str) -> String {
    let mut chars = k.chars();
    let is_ident = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if is_ident {
        k.to_string()
    } else {
        quote(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    #[test]
    fn test_inspect_plain_scalars() {
        assert_eq!(inspect(&json!("hello"), false), "hello");
        assert_eq!(inspect(&json!(42), false), "42");
        assert_eq!(inspect(&json!(-1.5), false), "-1.5");
        assert_eq!(inspect(&json!(true), false), "true");
        assert_eq!(inspect(&Value::Null, false), "null");
    }

    #[test]
    fn test_inspect_arrays() {
        assert_eq!(inspect(&json!([]), false), "[]");
        assert_eq!(inspect(&json!([1, "a", null]), false), "[ 1, 'a', null ]");
        assert_eq!(inspect(&json!([[1], {}]), false), "[ [ 1 ], {} ]");
    }

    #[test]
    fn test_inspect_nested_objects() {
        assert_eq!(
            inspect(&json!([{"id": 1, "user-name": "bob"}]), false),
            "[ { id: 1, 'user-name': 'bob' } ]"
        );
    }

    #[test]
    fn test_inspect_quote_escapes() {
        assert_eq!(inspect(&json!(["tab\there\n"]), false), r"[ 'tab\there\n' ]");
        assert_eq!(inspect(&json!([r"C:\tmp"]), false), r"[ 'C:\\tmp' ]");
    }

    #[test]
    fn test_inspect_quote_choice() {
        assert_eq!(inspect(&json!(["it's"]), false), r#"[ "it's" ]"#);
        assert_eq!(inspect(&json!([r#"it's "quoted""#]), false), r#"[ `it's "quoted"` ]"#);
        assert_eq!(
            inspect(&json!([r#"it's "all" `three`"#]), false),
            r#"[ 'it\'s "all" `three`' ]"#
        );
        assert_eq!(inspect(&json!([{"it's": 1}]), false), r#"[ { "it's": 1 } ]"#);
    }

    #[test]
    #[serial]
    fn test_inspect_colored() {
        colored::control::set_override(true);

        assert_eq!(inspect(&json!(42), true), "\u{1b}[33m42\u{1b}[0m");
        assert_eq!(inspect(&Value::Null, true), "\u{1b}[1mnull\u{1b}[0m");
        assert_eq!(inspect(&json!(["a"]), true), "[ \u{1b}[32m'a'\u{1b}[0m ]");
        // 顶层字符串不着色
        assert_eq!(inspect(&json!("a"), true), "a");
        // 关闭颜色时不受全局控制影响
        assert_eq!(inspect(&json!(42), false), "42");

        colored::control::unset_override();
    }

    #[test]
    #[serial]
    fn test_inspect_color_disabled_by_runtime() {
        colored::control::set_override(false);

        assert_eq!(inspect(&json!([1, true]), true), "[ 1, true ]");

        colored::control::unset_override();
    }
}

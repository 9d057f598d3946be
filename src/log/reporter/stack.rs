/// 错误参数的调用栈后缀标记
pub const STACK_SUFFIX: &str = " ↲";

/// 拆分并规整调用栈文本
///
/// 每行去掉首尾空白和行首的 `at `；如果第一行以 `Error: ` 开头则丢弃，
/// 因为错误消息已经单独输出。
pub fn parse_stack(stack: &str) -> Vec<String> {
    let mut lines: Vec<String> = stack
        .split('\n')
        .map(|line| {
            let line = line.trim();
            line.strip_prefix("at ").unwrap_or(line).to_string()
        })
        .collect();

    if lines.first().is_some_and(|line| line.starts_with("Error: ")) {
        lines.remove(0);
    }

    lines
}

/// 每帧加 `> ` 前缀后按行拼接
pub fn format_stack(stack: &str) -> String {
    format!("> {}", parse_stack(stack).join("\n> "))
}

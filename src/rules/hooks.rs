//! # Hook 相关规则（C、D）
//!
//! C: 将 `const [, setLocation] = useLocation();` 修复为命名首元素的形式。
//! D: 在 `logoutMutation` 声明前插入 `handleLogout` 处理器。
//!
//! ## 锚点说明
//! - C 只针对 `useLocation()`，其他 hook 的同形遗漏不受影响
//! - D 的锚点按行首匹配并捕获缩进，插入体沿用同一缩进
//!
//! ## 依赖关系
//! - 被 `rules/pipeline.rs` 调用
//! - 使用 `regex` 进行多行锚点匹配

use crate::rules::status::EditStatus;
use regex::Regex;

/// 遗漏首元素的解构（仅限 useLocation）
const BROKEN_DESTRUCTURE: &str = "const [, setLocation] = useLocation();";

/// 修复后的解构
const FIXED_DESTRUCTURE: &str = "const [location, setLocation] = useLocation();";

/// 判断处理器是否已定义的标记（完整声明头，避免误判同前缀变量名）
const LOGOUT_HANDLER_MARKER: &str = "const handleLogout = () => {";

/// 规则 C：修复 useLocation 解构遗漏
pub struct FixLocationDestructure;

impl FixLocationDestructure {
    pub fn apply(&self, buf: &mut String) -> EditStatus {
        if buf.contains(BROKEN_DESTRUCTURE) {
            *buf = buf.replace(BROKEN_DESTRUCTURE, FIXED_DESTRUCTURE);
            EditStatus::Applied
        } else if buf.contains(FIXED_DESTRUCTURE) {
            EditStatus::AlreadyApplied
        } else {
            EditStatus::NotMatched
        }
    }
}

/// 规则 D：插入 handleLogout 处理器
pub struct InsertLogoutHandler {
    /// 插入锚点：首个 logoutMutation 声明行（捕获缩进）
    anchor: Regex,
}

impl InsertLogoutHandler {
    pub fn new() -> Self {
        Self {
            anchor: Regex::new(r"(?m)^([ \t]*)const logoutMutation =").unwrap(),
        }
    }

    pub fn apply(&self, buf: &mut String) -> EditStatus {
        if buf.contains(LOGOUT_HANDLER_MARKER) {
            return EditStatus::AlreadyApplied;
        }

        let (line_start, indent) = match self.anchor.captures(buf) {
            Some(caps) => {
                let whole = caps.get(0).unwrap();
                let indent = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                (whole.start(), indent.to_string())
            }
            None => return EditStatus::NotMatched,
        };

        let handler = format!(
            "{i}const handleLogout = () => {{\n{i}  logoutMutation.mutate();\n{i}}};\n\n",
            i = indent
        );
        buf.insert_str(line_start, &handler);
        EditStatus::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_location_destructure() {
        let mut buf = "  const [, setLocation] = useLocation();\n".to_string();
        assert_eq!(FixLocationDestructure.apply(&mut buf), EditStatus::Applied);
        assert_eq!(buf, "  const [location, setLocation] = useLocation();\n");
    }

    #[test]
    fn test_fix_location_already_correct() {
        let mut buf = "  const [location, setLocation] = useLocation();\n".to_string();
        assert_eq!(
            FixLocationDestructure.apply(&mut buf),
            EditStatus::AlreadyApplied
        );
    }

    #[test]
    fn test_fix_location_ignores_other_hooks() {
        let mut buf = "const [, setFoo] = useOther();\n".to_string();
        let before = buf.clone();
        assert_eq!(
            FixLocationDestructure.apply(&mut buf),
            EditStatus::NotMatched
        );
        assert_eq!(buf, before);
    }

    #[test]
    fn test_insert_logout_handler_with_indent() {
        let mut buf = concat!(
            "export default function Page() {\n",
            "  const logoutMutation = useMutation();\n",
            "}\n",
        )
        .to_string();
        let status = InsertLogoutHandler::new().apply(&mut buf);
        assert_eq!(status, EditStatus::Applied);

        let expected = concat!(
            "export default function Page() {\n",
            "  const handleLogout = () => {\n",
            "    logoutMutation.mutate();\n",
            "  };\n",
            "\n",
            "  const logoutMutation = useMutation();\n",
            "}\n",
        );
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_insert_logout_handler_unindented() {
        let mut buf = "const logoutMutation = useMutation();\n".to_string();
        assert_eq!(
            InsertLogoutHandler::new().apply(&mut buf),
            EditStatus::Applied
        );
        assert!(buf.starts_with("const handleLogout = () => {\n"));
        assert!(buf.contains("};\n\nconst logoutMutation = useMutation();"));
    }

    #[test]
    fn test_insert_logout_handler_present() {
        let mut buf = concat!(
            "  const handleLogout = () => {\n",
            "    logoutMutation.mutate();\n",
            "  };\n",
            "  const logoutMutation = useMutation();\n",
        )
        .to_string();
        let before = buf.clone();
        assert_eq!(
            InsertLogoutHandler::new().apply(&mut buf),
            EditStatus::AlreadyApplied
        );
        assert_eq!(buf, before);
    }

    #[test]
    fn test_insert_logout_handler_ignores_similar_names() {
        // 同前缀变量名不算已有处理器，插入照常进行
        let mut buf = concat!(
            "  const handleLogoutTimer = 30;\n",
            "  const logoutMutation = useMutation();\n",
        )
        .to_string();
        assert_eq!(
            InsertLogoutHandler::new().apply(&mut buf),
            EditStatus::Applied
        );
        assert!(buf.contains("const handleLogout = () => {"));
        assert!(buf.contains("  const handleLogoutTimer = 30;"));
    }

    #[test]
    fn test_insert_logout_handler_missing_anchor() {
        let mut buf = "const other = 1;\n".to_string();
        assert_eq!(
            InsertLogoutHandler::new().apply(&mut buf),
            EditStatus::NotMatched
        );
    }
}

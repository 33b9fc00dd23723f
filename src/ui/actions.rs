//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    // 示例与预设
    ResetToExample,
    ApplyPreset(usize), // 预设下标，从 0 开始

    ToggleHelp,
    CloseHelp,

    // 输入框编辑
    Input(char),
    DeleteChar, // Backspace
    ClearField, // Delete
}

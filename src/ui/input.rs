//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, AppMode};

/// 第一个预设对应的功能键 (F6)
const FIRST_PRESET_KEY: u8 = 6;

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match mode {
        AppMode::Editing => match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::F(1) => Some(Action::ToggleHelp),
            KeyCode::F(5) => Some(Action::ResetToExample),
            KeyCode::F(n) if n >= FIRST_PRESET_KEY => {
                Some(Action::ApplyPreset(usize::from(n - FIRST_PRESET_KEY)))
            }
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Delete => Some(Action::ClearField),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Input(c))
            }
            _ => None,
        },
        AppMode::Help => match key.code {
            KeyCode::F(1) | KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => Some(Action::CloseHelp),
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(app.mode, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

/// 预设下标对应的按键名称
pub fn preset_key_name(index: usize) -> String {
    format!("F{}", usize::from(FIRST_PRESET_KEY) + index)
}

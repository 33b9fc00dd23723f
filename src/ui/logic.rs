//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种状态更新方法

use tracing::info;

use super::actions::Action;
use super::input::preset_key_name;
use super::state::{App, AppMode};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                info!("quit requested");
                return true;
            }
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),

            Action::ResetToExample => self.reset_to_example(),
            Action::ApplyPreset(index) => self.apply_preset(index),

            Action::ToggleHelp => {
                self.mode = match self.mode {
                    AppMode::Editing => AppMode::Help,
                    AppMode::Help => AppMode::Editing,
                };
            }
            Action::CloseHelp => self.mode = AppMode::Editing,

            Action::Input(c) => {
                if self.mode == AppMode::Editing {
                    let focus = self.focus;
                    self.field_mut(focus).push(c);
                    self.message = None;
                }
            }
            Action::DeleteChar => {
                if self.mode == AppMode::Editing {
                    let focus = self.focus;
                    self.field_mut(focus).pop();
                    self.message = None;
                }
            }
            Action::ClearField => {
                if self.mode == AppMode::Editing {
                    let focus = self.focus;
                    self.field_mut(focus).clear();
                    self.message = Some(format!("{} cleared", focus.label()));
                }
            }
        }
        false
    }

    // ============ 示例与预设 ============

    /// 恢复示例输入
    pub fn reset_to_example(&mut self) {
        let example = self.config.example;
        self.fill(example);
        info!(?example, "reset to example");
        self.message = Some("Reset to example".to_string());
    }

    /// 应用第 index 个预设，越界时只提示
    pub fn apply_preset(&mut self, index: usize) {
        match self.config.presets.get(index).copied() {
            Some(preset) => {
                self.fill(preset);
                info!(index, ?preset, "preset applied");
                self.message = Some(format!("Applied {}", self.preset_label(&preset)));
            }
            None => {
                self.message = Some(format!("No preset bound to {}", preset_key_name(index)));
            }
        }
    }
}

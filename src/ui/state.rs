//! App 状态定义 (Model)
//!
//! 三个可编辑输入框 + 当前焦点 + 模式。结果不存储，每次渲染时重新计算。

use tracing::debug;

use crate::calculator::{InterestInput, InterestResult};
use crate::config::{AppConfig, Preset};
use crate::currency::CurrencyFormatter;

/// 应用状态
pub struct App {
    pub principal: String,
    pub rate: String,
    pub time: String,
    pub focus: Field,
    pub mode: AppMode,
    pub message: Option<String>,
    pub config: AppConfig,
    pub formatter: CurrencyFormatter,
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Editing,
    Help,
}

/// 输入字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Principal,
    Rate,
    Time,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Principal, Field::Rate, Field::Time];

    pub fn next(self) -> Self {
        match self {
            Field::Principal => Field::Rate,
            Field::Rate => Field::Time,
            Field::Time => Field::Principal,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Principal => Field::Time,
            Field::Rate => Field::Principal,
            Field::Time => Field::Rate,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Principal => "Principal Amount (P)",
            Field::Rate => "Rate of Interest % (R)",
            Field::Time => "Time in Years (T)",
        }
    }
}

impl App {
    /// 创建新的应用实例，输入框填入示例值
    pub fn new(config: AppConfig) -> Self {
        let formatter = CurrencyFormatter::new(config.currency.clone());
        let mut app = Self {
            principal: String::new(),
            rate: String::new(),
            time: String::new(),
            focus: Field::Principal,
            mode: AppMode::Editing,
            message: None,
            config,
            formatter,
        };
        let example = app.config.example;
        app.fill(example);
        app
    }

    /// 用一组预设覆盖三个输入框
    pub fn fill(&mut self, preset: Preset) {
        self.principal = preset.principal.to_string();
        self.rate = preset.rate.to_string();
        self.time = preset.time.to_string();
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Principal => &self.principal,
            Field::Rate => &self.rate,
            Field::Time => &self.time,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Principal => &mut self.principal,
            Field::Rate => &mut self.rate,
            Field::Time => &mut self.time,
        }
    }

    pub fn input(&self) -> InterestInput {
        InterestInput::new(&self.principal, &self.rate, &self.time)
    }

    /// 根据当前输入重新计算结果
    pub fn result(&self) -> InterestResult {
        let result = InterestResult::evaluate(&self.input());
        debug!(
            principal = %self.principal,
            rate = %self.rate,
            time = %self.time,
            interest = result.interest_amount,
            total = result.total_amount,
            "recomputed"
        );
        result
    }

    /// 预设按钮上的文字，例如 P=2,50,000 • R=12% • T=2y
    pub fn preset_label(&self, preset: &Preset) -> String {
        format!(
            "P={} • R={}% • T={}y",
            self.formatter.format_plain(preset.principal),
            preset.rate,
            preset.time
        )
    }
}

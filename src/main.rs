mod calculator;
mod config;
mod currency;
mod error;
mod logging;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{error, info};

use crate::config::load_config;
use crate::error::{AppError, Result};
use crate::ui::{App, handle_key_event, render};

const APP_DIR: &str = "simple-interest";

/// 获取应用目录 (如 ~/.config/simple-interest/)，不存在时创建
fn app_dir(base: Option<PathBuf>, kind: &'static str) -> Result<PathBuf> {
    let dir = base.ok_or(AppError::NoDataDir(kind))?.join(APP_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn main() -> Result<()> {
    let data_dir = app_dir(dirs::data_dir(), "data")?;
    logging::init_file_logger(&data_dir.join("simple-interest.log"))?;

    // 配置文件 (~/.config/simple-interest/config.toml)
    let config_path = app_dir(dirs::config_dir(), "config")?.join("config.toml");
    let config = load_config(&config_path).inspect_err(|e| error!("{}", e))?;

    let mut app = App::new(config);
    info!("starting calculator");

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("event loop failed: {}", e);
    }
    info!("exited");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && handle_key_event(app, key) {
                break;
            }
        }
    }
    Ok(())
}

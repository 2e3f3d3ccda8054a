use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use hovertip::App;
use hovertip::config::{self, Config, ConfigResult};
use hovertip::tooltip::Placement;

/// Terminal playground for hover-intent tooltips
#[derive(Parser, Debug, Default)]
#[command(
    version,
    about = "Terminal playground for hover-intent tooltips: rest the pointer on a button to see its tip"
)]
struct Args {
    /// Config file (defaults to ~/.config/hovertip/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Milliseconds between pointer samples while deciding to open
    #[arg(long, value_name = "MS")]
    intent_poll_interval: Option<u64>,

    /// Movement (in cells, summed over both axes) still counted as resting
    #[arg(long, value_name = "PX")]
    intent_sensitivity: Option<u32>,

    /// Milliseconds a tip stays open after the pointer leaves
    #[arg(long, value_name = "MS")]
    close_delay: Option<u64>,

    /// Side of the target the tip is drawn on
    #[arg(long, value_enum)]
    placement: Option<Placement>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    /// Command line values win over the config file
    fn apply(&self, config: &mut Config) {
        if let Some(ms) = self.intent_poll_interval {
            config.display.intent_poll_interval_ms = ms;
        }
        if let Some(sensitivity) = self.intent_sensitivity {
            config.display.intent_sensitivity = sensitivity;
        }
        if let Some(ms) = self.close_delay {
            config.display.close_delay_ms = ms;
        }
        if let Some(placement) = self.placement {
            config.tooltip.placement = placement;
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/hovertip-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/hovertip-debug.log")
            .expect("Failed to open /tmp/hovertip-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== HOVERTIP DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let mut config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    args.apply(&mut config_result.config);

    if args.print_config {
        if let Some(warning) = &config_result.warning {
            eprintln!("Warning: {}", warning);
        }
        print!("{}", config::to_toml(&config_result.config)?);
        return Ok(());
    }

    let terminal = init_terminal()?;
    let app = App::new(&config_result.config);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== HOVERTIP DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<App> {
    app.warning = config_result.warning;

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

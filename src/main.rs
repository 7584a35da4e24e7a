//! Rheoscope - a terminal-based extrusion viscosity explorer.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rheoscope::app::App;
use rheoscope::config::ExplorerConfig;
use rheoscope::model::{ModelParameters, OperatingPoint};
use rheoscope::report::format_report;
use rheoscope::series::{shear_sweep, temperature_sweep};
use rheoscope::ui;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "rheoscope")]
#[command(about = "A terminal-based extrusion viscosity explorer", long_about = None)]
struct Args {
    /// Initial melt temperature in degrees Celsius
    #[arg(long)]
    temperature: Option<f64>,

    /// Initial shear rate in 1/s
    #[arg(long)]
    shear_rate: Option<f64>,

    /// Write the data report to the given path and exit without a UI
    #[arg(long)]
    export: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Rheoscope");
    }

    let config = ExplorerConfig::default();
    let params = ModelParameters::default();
    let defaults = OperatingPoint::default();
    let point = OperatingPoint {
        temperature: args.temperature.unwrap_or(defaults.temperature),
        shear_rate: args.shear_rate.unwrap_or(defaults.shear_rate),
    };

    // Headless mode: write the report and exit. The point is taken as
    // given here, so out-of-domain values fail loudly instead of being
    // clamped like slider input.
    if let Some(ref path) = args.export {
        let temperature_series = temperature_sweep(
            point.shear_rate,
            &config.temperature_report_range(),
            point.temperature,
            &params,
        )?;
        let shear_series = shear_sweep(
            point.temperature,
            &config.shear_report_range(),
            point.shear_rate,
            &params,
        )?;
        let report = format_report(&point, &params, &temperature_series, &shear_series)?;
        std::fs::write(path, report)?;
        println!("Report written to {}", path.display());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(config, params, point)?;
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Rheoscope exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc) => return Ok(()),

                    // Temperature slider
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.nudge_temperature(-1.0);
                    },
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                        app.nudge_temperature(1.0);
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('H')) => {
                        app.nudge_temperature(-5.0);
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('L')) => {
                        app.nudge_temperature(5.0);
                    },

                    // Shear-rate slider
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.nudge_shear_rate(-1.0);
                    },
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.nudge_shear_rate(1.0);
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('J')) => {
                        app.nudge_shear_rate(-5.0);
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('K')) => {
                        app.nudge_shear_rate(5.0);
                    },

                    // Features
                    (KeyModifiers::NONE, KeyCode::Tab) => {
                        app.cycle_view_mode();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('r')) => {
                        app.reset();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('e')) => {
                        app.export_report();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        app.copy_report();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.show_help();
                    },

                    _ => {},
                }
            }
        }
    }
}

mod app;
mod input;
mod ui;

use app::App;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ninenine::build_info;
use ninenine::utils::persistence::{data_path, open_append};
use ninenine::core::constants::INPUT_POLL_MS;
use ninenine::{GameEngine, QuizConfig};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const LOG_FILENAME: &str = "ninenine.log";

#[derive(Debug, Default)]
struct CliArgs {
    seed: Option<u64>,
    muted: bool,
    config_path: Option<PathBuf>,
}

fn print_usage() {
    println!(
        "Nine Nine - Timed Multiplication Quiz\n\
         \n\
         Usage: ninenine [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --seed N       Fixed RNG seed for a reproducible question sequence\n\
         \x20 --mute         Start with sound off\n\
         \x20 --config FILE  Read settings from FILE instead of ~/.ninenine/config.json\n\
         \x20 --version, -v  Show version information\n\
         \x20 --help, -h     Show this help"
    );
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(seed) => cli.seed = Some(seed),
                    None => {
                        eprintln!("--seed requires a number");
                        std::process::exit(1);
                    }
                }
            }
            "--mute" => cli.muted = true,
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => cli.config_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("--config requires a path");
                        std::process::exit(1);
                    }
                }
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'ninenine --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    cli
}

fn load_config(cli: &CliArgs) -> QuizConfig {
    let loaded = match &cli.config_path {
        Some(path) => QuizConfig::load_from(path),
        None => QuizConfig::load(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("Warning: {}. Using default settings.", e);
        QuizConfig::default()
    })
}

/// Log to ~/.ninenine/ninenine.log. Stderr would draw over the alternate screen.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match data_path(LOG_FILENAME).and_then(|path| open_append(&path)) {
        Ok(file) => {
            builder
                .target(env_logger::Target::Pipe(Box::new(file)))
                .write_style(env_logger::WriteStyle::Never);
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

fn main() -> io::Result<()> {
    init_logging();

    let cli = parse_args();
    let config = load_config(&cli);
    log::debug!("config: {:?}", config);

    match cli.seed {
        Some(seed) => run_app(App::new(GameEngine::seeded(config, seed)), cli.muted),
        None => run_app(App::new(GameEngine::from_entropy(config)), cli.muted),
    }
}

fn run_app<R: Rng>(mut app: App<R>, muted: bool) -> io::Result<()> {
    if muted {
        app.handle_input(ninenine::quiz::QuizInput::ToggleMute);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = game_loop(&mut terminal, &mut app);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    result
}

fn game_loop<R: Rng>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<R>,
) -> io::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &app.view, app.cursor.slot))?;

        let bells = app.view.take_bells();
        if bells > 0 {
            let out = terminal.backend_mut();
            for _ in 0..bells {
                out.write_all(b"\x07")?;
            }
            out.flush()?;
        }

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(input) = input::map_key(key_event) {
                    if !app.handle_input(input) {
                        break;
                    }
                }
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;
        app.update(dt_ms);
    }

    Ok(())
}

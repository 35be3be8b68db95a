mod app;
mod cli;
mod config;
mod event;
mod logging;
mod projects;
mod ui;
mod wheel;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use cli::Cli;
use config::Config;
use event::{Event, EventHandler};
use projects::Project;
use wheel::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.print_config {
        print!("{}", config.to_toml());
        return Ok(());
    }

    if cli.communities.is_empty() {
        cli::print_usage();
        std::process::exit(1);
    }

    let sink = if cli.headless {
        logging::Sink::Headless
    } else {
        logging::Sink::Tui
    };
    let _log_guard = logging::init(&config.logging, sink);

    let communities = match projects::parse_communities(&cli.communities) {
        Ok(communities) => communities,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    println!("Selected communities: {}", communities.join(", "));

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?cli.seed, communities = communities.len(), "starting session");

    let generated = projects::generate(&communities, &mut rng);
    print_projects(&generated);

    let session = Session::new(
        projects::into_slots(generated),
        config.physics_params()?,
        config.spin_range()?,
    )?;

    let selected = if cli.headless {
        run_headless(session, &mut rng)
    } else {
        run_tui(session, rng, &config)?
    };

    if let Some(project) = selected {
        print_selected(&project);
    }
    Ok(())
}

/// One spin to rest, no terminal needed.
fn run_headless(mut session: Session<Project>, rng: &mut StdRng) -> Option<Project> {
    session.request_spin(rng);
    let mut ticks: u64 = 0;
    let winner = loop {
        ticks += 1;
        if let Some(winner) = session.tick() {
            break winner;
        }
    };
    tracing::info!(ticks, winner, "headless spin finished");
    session.slots().get(winner).map(|slot| slot.payload.clone())
}

fn run_tui(session: Session<Project>, rng: StdRng, config: &Config) -> Result<Option<Project>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(
        session,
        rng,
        config.display.label_lines,
        config.display.anchor_fraction,
    );
    let event_handler = EventHandler::new(Duration::from_millis(config.display.tick_rate_ms));

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(app.selected().cloned())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
            Event::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_projects(projects: &[Project]) {
    let rule = "=".repeat(60);
    println!("\n{}", rule);
    println!("GENERATED HACKATHON PROJECT IDEAS");
    println!("{}", rule);

    for (i, project) in projects.iter().enumerate() {
        println!("\n{}. {}", i + 1, project.title);
        println!("   Wheel display: {}", project.label);
        println!("   Description: {}", project.description);
        println!("   Communities: {}", project.communities.join(", "));
        println!("   Team Size: {}", project.team_size);
    }

    println!("\n{}", rule);
    println!("Launching spinning wheel to select a project...");
    println!("{}\n", rule);
}

fn print_selected(project: &Project) {
    let rule = "=".repeat(60);
    println!("\n{}", rule);
    println!("SELECTED PROJECT FOR YOUR HACKATHON!");
    println!("{}", rule);
    println!("\nTitle: {}", project.title);
    println!("Description: {}", project.description);
    println!("Communities: {}", project.communities.join(", "));
    println!("Team Size: {}", project.team_size);
    println!("\n{}", rule);
    println!("Happy hacking! 🚀");
    println!("{}", rule);
}

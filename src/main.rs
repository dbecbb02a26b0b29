use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};

use comptree::{App, Args, ReportOptions, SortMode, Source, logging, ui, write_loaded_report};

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, &mut app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            // Clear status message on any key press
            app.status_message = None;

            match (key.code, key.modifiers) {
                (KeyCode::Char('q'), _) | (KeyCode::Esc, _) if !app.show_help => return Ok(()),
                (KeyCode::Esc, _) => app.show_help = false,
                (KeyCode::Char('?'), _) => app.show_help = !app.show_help,
                _ if app.show_help => app.show_help = false, // Any key closes help
                // Navigation
                (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.next(),
                (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.previous(),
                (KeyCode::Char('d'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
                    app.page_down()
                }
                (KeyCode::Char('u'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => app.page_up(),
                (KeyCode::Char('H'), _) | (KeyCode::Home, _) => app.go_to_first(),
                (KeyCode::Char('G'), _) | (KeyCode::End, _) => app.go_to_last(),
                // Actions
                (KeyCode::Enter, _)
                | (KeyCode::Right, _)
                | (KeyCode::Char('l'), _)
                | (KeyCode::Char('o'), _) => app.enter_dir(),
                (KeyCode::Backspace, _)
                | (KeyCode::Left, _)
                | (KeyCode::Char('h'), _)
                | (KeyCode::Char('u'), _) => app.go_up(),
                (KeyCode::Char('x'), _) | (KeyCode::Delete, _) => app.remove_selected(),
                (KeyCode::Char('r'), _) => app.refresh(),
                // Sort options
                (KeyCode::Char('s'), _) => app.toggle_sort(SortMode::Size),
                (KeyCode::Char('n'), _) => app.toggle_sort(SortMode::Name),
                (KeyCode::Char('c'), _) => app.toggle_sort(SortMode::ItemCount),
                (KeyCode::Tab, _) => app.cycle_sort(),
                _ => {}
            }
        }
    }
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

fn print_report(source: &Source, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = source.load()?;
    let opts = ReportOptions {
        max_depth: args.max_depth,
        raw_bytes: args.bytes,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_loaded_report(&mut out, &loaded, &opts)?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let source = Source::from_args(&args);

    match &args.log_file {
        Some(log_file) => logging::init_file(log_file)?,
        None if args.print => logging::init_stderr(),
        None => {}
    }

    if args.print {
        return print_report(&source, &args);
    }

    println!("Loading {}... This may take a moment.", source.describe());
    let loaded = source.load()?;

    // Setup panic hook before entering raw mode
    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(source, loaded);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

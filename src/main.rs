mod build_info;
mod combat;
mod constants;
mod economy;
mod events;
mod game_logic;
mod game_state;
mod input;
mod location;
mod save_manager;
mod session;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use input::{
    process_adventure_input, process_register_input, AdventureInput, AdventureResult,
    RegisterForm, RegisterInput, RegisterResult,
};
use save_manager::SaveManager;
use session::GameSession;

enum Screen {
    Register,
    Adventure,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "arena {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Arena - Terminal Text-Adventure\n");
                println!("Usage: arena [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'arena --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore terminal before reporting any error
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut current_screen = Screen::Register;
    let mut register_form = RegisterForm::new();
    let mut session: Option<GameSession<SaveManager>> = None;
    let mut message: Option<String> = None;

    loop {
        match current_screen {
            Screen::Register => {
                terminal.draw(|f| ui::register_scene::draw_register(f, &register_form))?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        let input = register_input_from_key(key_event);
                        match process_register_input(&mut register_form, input) {
                            RegisterResult::Continue => {}
                            RegisterResult::Submitted(profile) => {
                                let store = SaveManager::new()?;
                                let (new_session, start) = GameSession::start(profile, store)?;
                                message = Some(start.greeting().to_string());
                                session = Some(new_session);
                                current_screen = Screen::Adventure;
                            }
                            RegisterResult::Quit => break,
                        }
                    }
                }
            }
            Screen::Adventure => {
                let active = session.as_mut().expect("adventure screen requires a session");

                terminal.draw(|f| ui::draw_adventure(f, active.state(), message.as_deref()))?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        let input = adventure_input_from_key(key_event);
                        match process_adventure_input(active, input, &mut rng)? {
                            AdventureResult::Continue(events) => {
                                if !events.is_empty() {
                                    let lines: Vec<String> =
                                        events.iter().filter_map(|e| e.message()).collect();
                                    message = if lines.is_empty() {
                                        None
                                    } else {
                                        Some(lines.join(" "))
                                    };
                                }
                            }
                            AdventureResult::Quit => break,
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn register_input_from_key(key_event: KeyEvent) -> RegisterInput {
    match key_event.code {
        KeyCode::Char(c) => RegisterInput::Char(c),
        KeyCode::Backspace => RegisterInput::Backspace,
        KeyCode::Tab => RegisterInput::NextField,
        KeyCode::Enter => RegisterInput::Submit,
        KeyCode::Esc => RegisterInput::Quit,
        _ => RegisterInput::Other,
    }
}

fn adventure_input_from_key(key_event: KeyEvent) -> AdventureInput {
    match key_event.code {
        KeyCode::Char(c @ '1'..='4') => AdventureInput::Slot(c as usize - '1' as usize),
        KeyCode::Char('w') => AdventureInput::CycleWeapon,
        KeyCode::Esc => AdventureInput::Quit,
        _ => AdventureInput::Other,
    }
}

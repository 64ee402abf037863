use nbgo::app::theme::{detect_terminal_color_support, UiTheme};
use nbgo::app::App;
use nbgo::cli::{self, CliCommand};
use nbgo::kernel::services::{
    ensure_settings_file, load_settings, ForegroundRunner, Programs, SystemClock,
};
use nbgo::kernel::NotebookPaths;
use nbgo::tui::{run_event_loop, SuspendingRunner, TerminalGuard};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::process::ExitCode;
use std::sync::mpsc;

mod logging;

fn main() -> ExitCode {
    let paths = NotebookPaths::from_env();

    match cli::parse_args(std::env::args().skip(1)) {
        CliCommand::UseNotebook(name) => {
            ExitCode::from(cli::use_notebook(&paths, &name, &mut io::stdout()))
        }
        CliCommand::Interactive => {
            let _logging = logging::init();
            match run_interactive(&paths) {
                Ok(code) => code,
                Err(err) => {
                    tracing::error!(error = %err, "session aborted");
                    println!("Error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run_interactive(paths: &NotebookPaths) -> io::Result<ExitCode> {
    let notebook = paths.resolve_current();
    let settings_path = paths.settings_path();
    if let Err(err) = ensure_settings_file(&settings_path) {
        tracing::warn!(path = %settings_path.display(), error = %err, "settings file unavailable");
    }
    let settings = load_settings(&settings_path).unwrap_or_default();
    let programs = Programs::from_env(&settings);
    let theme = UiTheme::for_support(detect_terminal_color_support());

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signal_thread = nbgo::tui::terminal_guard::install_termination_signals(
        guard.restorer(),
        signal_tx,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let runner = SuspendingRunner::new(ForegroundRunner, guard.ops());
    let mut app = App::new(
        notebook,
        theme,
        programs,
        Box::new(runner),
        Box::new(SystemClock),
    );

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let outcome = run_event_loop(&mut terminal, &mut app, &signal_rx);
    drop(guard);

    match outcome? {
        None => Ok(ExitCode::SUCCESS),
        Some(signal) => {
            tracing::info!(?signal, "exiting on signal");
            Ok(ExitCode::from(signal.exit_code() as u8))
        }
    }
}

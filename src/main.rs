//! twig - a terminal tree-browser for the local filesystem
//!
//! One synchronous loop: draw the tree, block for a key, mutate state.
//! External programs (editor, opener, fuzzy picker) run with the TUI torn
//! down and the screen is re-established afterwards.

use std::io::{self, Write, stdout};
use std::panic;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};

mod config;
mod errors;
mod fs;
mod history;
mod input;
mod state;
mod ui;

use config::Config;
use errors::AppResult;
use state::app::App;
use state::prompt::{FuzzyAction, FuzzyScope, Prompt, TermCmd};
use ui::{
    ConfirmDialog, ErrorDialog, FuzzyMenuDialog, HelpOverlay, InputDialog, ListDialog, StatusBar,
    TreeWidget,
};

/// Set up panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Initialize the terminal for TUI mode
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore terminal to normal mode
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Main event loop
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            app.view_height = chunks[0].height as usize;
            app.view.ensure_visible(app.view_height);

            let cut = match &app.clipboard {
                state::clipboard::ClipboardState::Cut(p) => Some(p.as_path()),
                _ => None,
            };
            frame.render_widget(
                TreeWidget::new(
                    &app.entries,
                    app.view,
                    &app.expanded,
                    &app.marked,
                    cut,
                    app.config.display.indent,
                    &app.theme,
                ),
                chunks[0],
            );

            let selection = app.selected_entry().map(|e| e.path.clone());
            let size_label = selection
                .as_deref()
                .and_then(|p| std::fs::metadata(p).ok())
                .filter(|m| m.is_file())
                .map(|m| fs::utils::human_size(m.len()));
            frame.render_widget(
                StatusBar::new(&app.cwd, &app.clipboard, &app.theme)
                    .with_selection(selection.as_deref(), size_label.as_deref())
                    .with_undo_depth(app.undo.len()),
                chunks[1],
            );

            let area = frame.area();
            match &app.prompt {
                Prompt::None => {}
                Prompt::Rename { target, input, cursor } => frame.render_widget(
                    InputDialog::new("Rename", target, input, *cursor, &app.theme),
                    area,
                ),
                Prompt::Move { target, input, cursor } => frame.render_widget(
                    InputDialog::new("Move", target, input, *cursor, &app.theme),
                    area,
                ),
                Prompt::NewFile { parent, input, cursor } => frame.render_widget(
                    InputDialog::new("New file", parent, input, *cursor, &app.theme),
                    area,
                ),
                Prompt::NewDir { parent, input, cursor } => frame.render_widget(
                    InputDialog::new("New directory", parent, input, *cursor, &app.theme),
                    area,
                ),
                Prompt::Delete { target } => {
                    frame.render_widget(ConfirmDialog::new("Delete", target, &app.theme), area)
                }
                Prompt::Replace { target } => {
                    frame.render_widget(ConfirmDialog::new("Replace existing", target, &app.theme), area)
                }
                Prompt::DriveSelect { drives, selected } => {
                    let items = drives.iter().map(|d| d.name.clone()).collect();
                    frame.render_widget(ListDialog::new("Drives", items, *selected, &app.theme), area)
                }
                Prompt::HistorySelect { entries, selected } => {
                    let items = entries
                        .iter()
                        .map(|(p, count)| format!("{:>4}  {}", count, p.display()))
                        .collect();
                    frame.render_widget(ListDialog::new("History", items, *selected, &app.theme), area)
                }
                Prompt::FuzzyMenu { scope } => {
                    frame.render_widget(FuzzyMenuDialog::new(*scope, &app.theme), area)
                }
                Prompt::Help => frame.render_widget(HelpOverlay::new(&app.theme), area),
                Prompt::Error { message } => {
                    frame.render_widget(ErrorDialog::new(message, &app.theme), area)
                }
            }
        })?;

        if let Event::Key(key) = event::read()? {
            input::handle_key(app, key);
        }

        let Some(cmd) = app.pending.take() else {
            continue;
        };

        match cmd {
            TermCmd::Quit => {
                config::write_lastdir(Path::new("."));
                break;
            }
            TermCmd::QuitToLast => break,
            TermCmd::PersistAndChangeDir(dir) => {
                app.history.visit(&dir);
                app.history.save();
                config::write_lastdir(&dir);
                break;
            }
            TermCmd::Edit(path) => {
                restore_terminal()?;
                let result = edit_file(app, &path);
                *terminal = setup_terminal()?;
                if let Err(message) = result {
                    app.set_error(message);
                }
                app.refresh();
            }
            TermCmd::OpenWithOs(path) => {
                restore_terminal()?;
                let result = open_with_os(&path);
                *terminal = setup_terminal()?;
                if let Err(message) = result {
                    app.set_error(message);
                }
                app.refresh();
            }
            TermCmd::RunAsProcess(path) => {
                restore_terminal()?;
                let result = run_as_process(&path);
                *terminal = setup_terminal()?;
                if let Err(message) = result {
                    app.set_error(message);
                }
                app.refresh();
            }
            TermCmd::CopyPathToClipboard(path) => {
                // no screen teardown needed; the tools read stdin quietly
                if let Err(message) = copy_to_system_clipboard(&path.display().to_string()) {
                    app.set_error(message);
                }
                app.refresh();
            }
            TermCmd::Fuzzy { scope, action, base } => {
                restore_terminal()?;
                let outcome = fuzzy_flow(app, scope, action, &base);
                *terminal = setup_terminal()?;
                match outcome {
                    Ok(Some(dir)) => {
                        app.history.visit(&dir);
                        app.history.save();
                        config::write_lastdir(&dir);
                        break;
                    }
                    Ok(None) => app.refresh(),
                    Err(message) => {
                        app.set_error(message);
                        app.refresh();
                    }
                }
            }
        }
    }
    Ok(())
}

/// Pick the editor: config, then $VISUAL/$EDITOR, then hx, then vi/notepad
fn editor_command(app: &App) -> String {
    app.config
        .general
        .editor
        .clone()
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| {
            if cfg!(windows) {
                "notepad".to_string()
            } else if Command::new("hx").arg("--version").output().is_ok() {
                "hx".to_string()
            } else {
                "vi".to_string()
            }
        })
}

fn edit_file(app: &App, path: &Path) -> Result<(), String> {
    let editor = editor_command(app);
    Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| format!("Failed to run '{}': {}", editor, e))?;
    Ok(())
}

fn open_with_os(path: &Path) -> Result<(), String> {
    let result = if cfg!(target_os = "windows") {
        Command::new("cmd").arg("/C").arg("start").arg("").arg(path).status()
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(path).status()
    } else {
        Command::new("xdg-open").arg(path).status()
    };
    result.map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    Ok(())
}

fn run_as_process(path: &Path) -> Result<(), String> {
    let status = Command::new(path)
        .status()
        .map_err(|e| format!("Failed to run {}: {}", path.display(), e))?;
    if !status.success() {
        return Err(format!("{} exited with {}", path.display(), status));
    }
    Ok(())
}

/// Pipe text into the platform clipboard tool
fn copy_to_system_clipboard(text: &str) -> Result<(), String> {
    let candidates: &[&[&str]] = if cfg!(target_os = "windows") {
        &[&["clip"]]
    } else if cfg!(target_os = "macos") {
        &[&["pbcopy"]]
    } else {
        &[&["wl-copy"], &["xclip", "-selection", "clipboard"]]
    };

    for candidate in candidates {
        let child = Command::new(candidate[0])
            .args(&candidate[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let Ok(mut child) = child else {
            continue;
        };
        if let Some(stdin) = child.stdin.as_mut() {
            let _ = stdin.write_all(text.as_bytes());
        }
        if child.wait().map(|s| s.success()).unwrap_or(false) {
            return Ok(());
        }
    }
    Err("No clipboard tool available".to_string())
}

/// Candidate cap for the recursive fuzzy scope, so a huge tree cannot hang
/// the picker launch.
const FUZZY_CANDIDATE_CAP: usize = 10_000;

fn collect_candidates(scope: FuzzyScope, base: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    match scope {
        FuzzyScope::Siblings => {
            if let Ok(read) = std::fs::read_dir(base) {
                for entry in read.flatten() {
                    out.push(entry.path());
                }
            }
        }
        FuzzyScope::CwdTree => collect_tree(base, &mut out),
    }
    out
}

fn collect_tree(dir: &Path, out: &mut Vec<PathBuf>) {
    if out.len() >= FUZZY_CANDIDATE_CAP {
        return;
    }
    let Ok(read) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in read.flatten() {
        if out.len() >= FUZZY_CANDIDATE_CAP {
            return;
        }
        let path = entry.path();
        let is_dir = path.is_dir();
        out.push(path.clone());
        if is_dir {
            collect_tree(&path, out);
        }
    }
}

/// Run fzf over the candidates; Ok(None) when the user cancelled
fn run_fuzzy_picker(candidates: &[PathBuf]) -> Result<Option<PathBuf>, String> {
    let mut child = Command::new("fzf")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|e| format!("Failed to run fzf: {}", e))?;

    if let Some(stdin) = child.stdin.as_mut() {
        let lines: String = candidates
            .iter()
            .map(|p| format!("{}\n", p.display()))
            .collect();
        let _ = stdin.write_all(lines.as_bytes());
    }

    let output = child
        .wait_with_output()
        .map_err(|e| format!("fzf failed: {}", e))?;
    if !output.status.success() {
        // non-zero means the pick was aborted
        return Ok(None);
    }
    let picked = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if picked.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(picked)))
    }
}

/// Launch the picker and apply the chosen action. Returns the directory to
/// exit into when the action was a change-directory.
fn fuzzy_flow(
    app: &App,
    scope: FuzzyScope,
    action: FuzzyAction,
    base: &Path,
) -> Result<Option<PathBuf>, String> {
    let candidates = collect_candidates(scope, base);
    if candidates.is_empty() {
        return Err(format!("Nothing to pick under {}", base.display()));
    }
    let Some(picked) = run_fuzzy_picker(&candidates)? else {
        return Ok(None);
    };

    match action {
        FuzzyAction::Edit => {
            edit_file(app, &picked)?;
            Ok(None)
        }
        FuzzyAction::Open => {
            open_with_os(&picked)?;
            Ok(None)
        }
        FuzzyAction::Clip => {
            copy_to_system_clipboard(&picked.display().to_string())?;
            Ok(None)
        }
        FuzzyAction::ChangeDir => {
            let dir = if picked.is_dir() {
                picked
            } else {
                match picked.parent() {
                    Some(p) => p.to_path_buf(),
                    None => return Ok(None),
                }
            };
            Ok(Some(dir))
        }
    }
}

fn main() -> AppResult<()> {
    setup_panic_hook();

    let config = Config::load_or_init();
    let mut app = App::new(config);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal()?;
    Ok(result?)
}

//! Interactive wizard driver: reads keys with `console`, redraws the current
//! step in place, and reports progress through cliclack

use crate::error::AppError;
use crate::product::ProductConfig;
use crate::templates::{Materialize, ScaffoldRequest, TemplateMaterializer};
use crate::wizard::{Input, Outcome, Wizard};
use console::{Key, Term};
use std::io;
use std::path::{Path, PathBuf};

/// Run the wizard on the attached terminal
///
/// Terminal failures come back as [`AppError::Runtime`]. A materialization
/// failure is not an error here: it is displayed and returned as
/// [`Outcome::Failed`].
pub fn run<C: ProductConfig>(config: &C, working_dir: &Path) -> Result<Outcome, AppError> {
    let term = Term::stdout();
    if !term.is_term() {
        return Err(AppError::runtime(
            "Interactive terminal required",
            "stdout is not attached to a terminal",
        ));
    }

    cliclack::intro(config.display_name()).map_err(runtime("Failed to start wizard"))?;

    let materializer = SpinnerMaterializer(TemplateMaterializer::from_config(config, working_dir));
    let mut wizard = Wizard::new(config.welcome_message(), materializer);

    term.hide_cursor().map_err(runtime("Failed to prepare terminal"))?;
    let result = drive(&term, &mut wizard);
    let _ = term.show_cursor();
    let outcome = result?;

    match &outcome {
        Outcome::Created(path) => print_next_steps(config, path, &wizard)?,
        Outcome::Failed(err) => {
            cliclack::log::error(err.report()).map_err(runtime("Failed to write output"))?;
            cliclack::outro_cancel("Project was not created.")
                .map_err(runtime("Failed to write output"))?;
        }
        Outcome::Cancelled => {
            cliclack::outro_cancel("Setup cancelled.").map_err(runtime("Failed to write output"))?;
        }
    }

    Ok(outcome)
}

fn drive<M: Materialize>(term: &Term, wizard: &mut Wizard<M>) -> Result<Outcome, AppError> {
    let mut drawn = 0;

    loop {
        drawn = redraw(term, &wizard.render(), drawn)?;

        let Some(input) = read_input(term.read_key_raw())? else {
            continue;
        };

        // The spinner needs the screen to itself
        if input == Input::Confirm && wizard.step().is_terminal() {
            term.clear_last_lines(drawn)
                .map_err(runtime("Failed to draw wizard"))?;
            drawn = 0;
        }

        if let Some(outcome) = wizard.handle_input(input) {
            term.clear_last_lines(drawn)
                .map_err(runtime("Failed to draw wizard"))?;
            return Ok(outcome);
        }
    }
}

fn redraw(term: &Term, frame: &str, previous: usize) -> Result<usize, AppError> {
    term.clear_last_lines(previous)
        .map_err(runtime("Failed to draw wizard"))?;
    term.write_line(frame).map_err(runtime("Failed to draw wizard"))?;
    let (_, columns) = term.size();
    Ok(frame_rows(frame, columns as usize))
}

/// Terminal rows taken by `frame` once long lines wrap at `columns`
fn frame_rows(frame: &str, columns: usize) -> usize {
    if columns == 0 {
        return frame.lines().count();
    }
    frame
        .lines()
        .map(|line| console::measure_text_width(line).div_ceil(columns).max(1))
        .sum()
}

/// Turn a raw key read into a wizard input
///
/// Ctrl+C arrives as [`Key::CtrlC`] from a raw read. An interrupted read is
/// treated the same way, so the wizard ends as cancelled either way.
fn read_input(read: io::Result<Key>) -> Result<Option<Input>, AppError> {
    match read {
        Ok(key) => Ok(map_key(key)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Some(Input::Cancel)),
        Err(e) => Err(runtime("Failed to read input")(e)),
    }
}

/// Translate a terminal key into a wizard input
pub fn map_key(key: Key) -> Option<Input> {
    match key {
        Key::Enter => Some(Input::Confirm),
        Key::Escape | Key::CtrlC => Some(Input::Cancel),
        Key::ArrowUp => Some(Input::Up),
        Key::ArrowDown => Some(Input::Down),
        Key::ArrowLeft => Some(Input::Left),
        Key::ArrowRight => Some(Input::Right),
        Key::Backspace => Some(Input::Backspace),
        Key::Char(c) if !c.is_control() => Some(Input::Char(c)),
        _ => None,
    }
}

fn runtime(message: &'static str) -> impl Fn(io::Error) -> AppError {
    move |e| AppError::runtime(message, format!("Error details: {}", e))
}

/// Shows a spinner while the wrapped materializer runs
struct SpinnerMaterializer<M>(M);

impl<M: Materialize> Materialize for SpinnerMaterializer<M> {
    fn materialize(&self, request: &ScaffoldRequest) -> Result<PathBuf, AppError> {
        let spinner = cliclack::spinner();
        spinner.start("Creating project...");

        let result = self.0.materialize(request);

        match &result {
            Ok(path) => spinner.stop(format!("Created project in {}", path.display())),
            Err(_) => spinner.stop("Failed to create project"),
        }

        result
    }
}

fn print_next_steps<C: ProductConfig, M: Materialize>(
    config: &C,
    project_dir: &Path,
    wizard: &Wizard<M>,
) -> Result<(), AppError> {
    let steps = config.next_steps(project_dir, wizard.answers());

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!").map_err(runtime("Failed to write output"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_confirm_and_cancel() {
        assert_eq!(map_key(Key::Enter), Some(Input::Confirm));
        assert_eq!(map_key(Key::Escape), Some(Input::Cancel));
        assert_eq!(map_key(Key::CtrlC), Some(Input::Cancel));
    }

    #[test]
    fn test_map_key_navigation() {
        assert_eq!(map_key(Key::ArrowUp), Some(Input::Up));
        assert_eq!(map_key(Key::ArrowDown), Some(Input::Down));
        assert_eq!(map_key(Key::ArrowLeft), Some(Input::Left));
        assert_eq!(map_key(Key::ArrowRight), Some(Input::Right));
        assert_eq!(map_key(Key::Backspace), Some(Input::Backspace));
        assert_eq!(map_key(Key::Char('m')), Some(Input::Char('m')));
    }

    #[test]
    fn test_map_key_ignores_control_and_unknown() {
        assert_eq!(map_key(Key::Char('\t')), None);
        assert_eq!(map_key(Key::Tab), None);
        assert_eq!(map_key(Key::Unknown), None);
    }

    #[test]
    fn test_read_input_interrupted_cancels() {
        let interrupted = io::Error::from(io::ErrorKind::Interrupted);
        assert_eq!(read_input(Err(interrupted)).unwrap(), Some(Input::Cancel));
        assert_eq!(read_input(Ok(Key::CtrlC)).unwrap(), Some(Input::Cancel));
        assert_eq!(read_input(Ok(Key::Enter)).unwrap(), Some(Input::Confirm));
        assert_eq!(read_input(Ok(Key::Unknown)).unwrap(), None);
    }

    #[test]
    fn test_read_input_other_errors_are_runtime() {
        let err = read_input(Err(io::Error::from(io::ErrorKind::UnexpectedEof))).unwrap_err();
        assert_eq!(err.error_type(), "RUNTIME_ERROR");
        assert_eq!(err.message(), "Failed to read input");
    }

    #[test]
    fn test_frame_rows_counts_wrapped_lines() {
        assert_eq!(frame_rows("one\ntwo", 80), 2);
        assert_eq!(frame_rows(&"x".repeat(25), 10), 3);
        assert_eq!(frame_rows(&"x".repeat(20), 10), 2);
        // Blank lines still take a row
        assert_eq!(frame_rows("a\n\nb", 10), 3);
    }

    #[test]
    fn test_frame_rows_ignores_styling() {
        let styled = format!("\u{1b}[1m{}\u{1b}[0m", "y".repeat(10));
        assert_eq!(frame_rows(&styled, 10), 1);
        assert_eq!(frame_rows("abc\ndef", 0), 2);
    }
}

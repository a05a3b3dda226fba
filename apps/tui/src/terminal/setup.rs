use color_eyre::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Write};

/// Set up the terminal step by step so a failure partway through can undo
/// what was already changed. Mouse capture is required for the hover
/// tooltip.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    // STEP 1: Enable raw mode - simplest operation that modifies terminal state
    if let Err(e) = enable_raw_mode() {
        return Err(color_eyre::eyre::eyre!("Failed to enable raw mode: {e}"));
    }

    // STEP 2: Enter alternate screen and start capturing mouse movement
    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        // Clean up raw mode
        let _ = disable_raw_mode();
        return Err(color_eyre::eyre::eyre!(
            "Failed to enter alternate screen: {e}"
        ));
    }

    // STEP 3: Create backend and terminal
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(term) => term,
        Err(e) => {
            // Clean up terminal state
            let _ = execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(color_eyre::eyre::eyre!("Failed to create terminal: {e}"));
        }
    };

    // STEP 4: Clear screen and hide cursor - these operations rarely fail
    if let Err(e) = terminal.clear() {
        eprintln!("Warning: Failed to clear terminal: {e}");
        // Not fatal, continue
    }

    if let Err(e) = execute!(std::io::stdout(), cursor::Hide) {
        eprintln!("Warning: Failed to hide cursor: {e}");
        // Not fatal, continue
    }

    Ok(terminal)
}

/// Restore the terminal, tolerating partial failures so a crash still
/// leaves the shell usable.
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    // Create a new stdout handle each time to avoid borrowing issues
    let mut stdout_handle = stdout();

    // Always try to show cursor first (works in both normal and alternate screen)
    if let Err(e) = execute!(stdout_handle, cursor::Show) {
        eprintln!("Warning: Failed to show cursor: {e}");
    }

    if let Err(e) = execute!(stdout_handle, DisableMouseCapture) {
        eprintln!("Warning: Failed to disable mouse capture: {e}");
    }

    // Leave alternate screen if we entered it
    if alternate_screen {
        if let Err(e) = execute!(stdout_handle, LeaveAlternateScreen) {
            eprintln!("Warning: Failed to leave alternate screen: {e}");
        }
    }

    // Disable raw mode if we enabled it
    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            eprintln!("Warning: Failed to disable raw mode: {e}");
        }
    }

    // Force a newline to ensure the prompt appears correctly
    let _ = execute!(stdout_handle, cursor::MoveToNextLine(1));

    // Flush the output to ensure all commands are processed
    let _ = stdout_handle.flush();
}

//! Top-level menu that launches the apps
//!
//! Shows the numbered list of apps plus Quit and returns to it after each
//! app finishes. A closed input stream ends the session cleanly.

use std::io::Write;

use crate::apps::AppKind;
use crate::config::Config;
use crate::console::{Console, LineSource};
use crate::errors::Result;

/// Menu session over a console
pub struct Launcher<S: LineSource, W: Write> {
    console: Console<S, W>,
    config: Config,
    launched: usize,
}

impl<S: LineSource, W: Write> Launcher<S, W> {
    pub fn new(console: Console<S, W>, config: Config) -> Self {
        Launcher {
            console,
            config,
            launched: 0,
        }
    }

    /// Number of apps started this session
    pub fn launched(&self) -> usize {
        self.launched
    }

    pub fn console(&self) -> &Console<S, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<S, W> {
        self.console
    }

    fn menu_labels() -> Vec<&'static str> {
        AppKind::ALL
            .iter()
            .map(|k| k.label())
            .chain(std::iter::once("Quit"))
            .collect()
    }

    /// Run the menu until Quit or end of input
    pub fn run(&mut self) -> Result<()> {
        let labels = Self::menu_labels();

        loop {
            if self.config.display.clear_screen {
                self.console.clear_screen()?;
            }
            self.console.output_heading("Coursework Applications")?;

            let choice = match self.console.select_choice(&labels) {
                Ok(choice) => choice,
                Err(e) if e.is_end_of_input() => break,
                Err(e) => return Err(e),
            };

            let Some(kind) = AppKind::ALL.get(choice - 1).copied() else {
                break;
            };

            self.launched += 1;
            match kind.launch(&self.config, &mut self.console) {
                Ok(()) => {}
                Err(e) if e.is_end_of_input() => break,
                Err(e) => return Err(e),
            }
        }

        self.console.say("\n\tThank you for using the coursework apps. Goodbye for now!")?;
        tracing::info!(launched = self.launched, "launcher finished");
        Ok(())
    }
}

/// Run one app directly, treating end of input as a normal exit
pub fn run_single<S: LineSource, W: Write>(kind: AppKind, config: &Config, console: &mut Console<S, W>) -> Result<()> {
    match kind.launch(config, console) {
        Err(e) if e.is_end_of_input() => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedInput;

    fn launcher(lines: &[&str]) -> Launcher<ScriptedInput, Vec<u8>> {
        let console = Console::new(ScriptedInput::new(lines.iter().copied()), Vec::new());
        Launcher::new(console, Config::default())
    }

    fn printed(launcher: Launcher<ScriptedInput, Vec<u8>>) -> String {
        let (_, out) = launcher.into_console().into_parts();
        String::from_utf8_lossy(&out).to_string()
    }

    #[test]
    fn test_quit_immediately() {
        let mut launcher = launcher(&["6"]);
        launcher.run().unwrap();
        assert_eq!(launcher.launched(), 0);
        assert!(printed(launcher).contains("Goodbye"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let mut launcher = launcher(&[]);
        assert!(launcher.run().is_ok());
    }

    #[test]
    fn test_menu_lists_every_app() {
        let mut launcher = launcher(&["6"]);
        launcher.run().unwrap();
        let out = printed(launcher);
        for kind in AppKind::ALL {
            assert!(out.contains(kind.label()));
        }
        assert!(out.contains("Quit"));
    }

    #[test]
    fn test_returns_to_menu_after_app() {
        // distance: miles -> feet, 1 mile, no repeat; then quit
        let mut launcher = launcher(&["1", "1", "2", "1", "n", "6"]);
        launcher.run().unwrap();
        assert_eq!(launcher.launched(), 1);
        assert!(printed(launcher).contains("1 Miles = 5280.00 Feet"));
    }

    #[test]
    fn test_run_single_end_of_input() {
        let mut console = Console::new(ScriptedInput::new(["1"]), Vec::new());
        assert!(run_single(AppKind::Bmi, &Config::default(), &mut console).is_ok());
    }
}

use anyhow::Result;
use colored::Colorize;
use log::warn;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

use fridgechef_core::models::{AddOutcome, Recipe, RemoveOutcome, is_confirmation};

pub(crate) const INVALID_INPUT: &str = "Ongeldige invoer, probeer het opnieuw.";

const TITLE_WIDTH: usize = 23;

/// Line-oriented terminal the menus talk to.
pub(crate) struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Console {
    pub(crate) fn new(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    pub(crate) fn stdio() -> Self {
        Self::new(Box::new(io::stdin().lock()), Box::new(io::stdout()))
    }

    /// Print a prompt and read one line. `None` means input was closed.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// garbled line reads as invalid input instead of ending the session.
    pub(crate) fn read_input(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt.magenta())?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Read a free-text answer; closed input reads as an empty answer.
    pub(crate) fn prompt_text(&mut self, prompt: &str) -> Result<String> {
        Ok(self
            .read_input(prompt)?
            .unwrap_or_default()
            .trim()
            .to_string())
    }

    /// Ask a yes/no question. Only the confirm token counts as yes.
    pub(crate) fn confirm(&mut self, prompt: &str) -> bool {
        match self.read_input(prompt) {
            Ok(answer) => answer.is_some_and(|a| is_confirmation(&a)),
            Err(e) => {
                warn!("Failed to read confirmation: {e:#}");
                false
            }
        }
    }

    /// Keep asking until the user types `x` (or input closes).
    pub(crate) fn wait_for_back(&mut self) -> Result<()> {
        loop {
            match self.read_input("\nTyp x om terug te gaan naar het vorige menu: ")? {
                None => return Ok(()),
                Some(answer) if answer.trim().eq_ignore_ascii_case("x") => return Ok(()),
                Some(_) => self.error(INVALID_INPUT),
            }
        }
    }

    /// Turn an `Err` into a printed diagnostic and `None`.
    pub(crate) fn report_failure<T>(&mut self, result: Result<T>, message: &str) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{message}: {e:#}");
                self.error(format!("{message}: {e:#}"));
                None
            }
        }
    }

    pub(crate) fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.output, "{text}") {
            warn!("Failed to write to console: {e}");
        }
    }

    pub(crate) fn title(&mut self, title: &str) {
        let border = "*".repeat(TITLE_WIDTH + 2);
        self.line(format!("\n{border}"));
        self.line(format!("-{}-", centered_title(title).green()));
        self.line(format!("{border}\n"));
    }

    pub(crate) fn error(&mut self, message: impl AsRef<str>) {
        self.line(message.as_ref().red());
    }

    pub(crate) fn success(&mut self, message: impl AsRef<str>) {
        self.line(message.as_ref().green());
    }

    pub(crate) fn warning(&mut self, message: &str) {
        self.line(message.yellow());
    }

    pub(crate) fn progress(&mut self, message: &str) {
        self.line(message.cyan());
    }

    pub(crate) fn items(&mut self, items: &[String], empty_message: &str) {
        if items.is_empty() {
            self.line(empty_message);
        }
        for item in items {
            self.line(format!("- {item}"));
        }
    }

    /// `store` reads as "de koelkast", `location` as "in de koelkast".
    pub(crate) fn add_outcome(&mut self, outcome: &AddOutcome, store: &str, location: &str) {
        match outcome {
            AddOutcome::Added(name) => self.line(format!("{name} is toegevoegd aan {store}.")),
            AddOutcome::AlreadyExists(name) => self.line(format!("{name} staat al {location}.")),
        }
    }

    /// Messages for a remove outcome. `location` reads as "in de koelkast".
    pub(crate) fn remove_outcome(
        &mut self,
        outcome: &RemoveOutcome,
        location: &str,
        empty_message: &str,
    ) {
        match outcome {
            RemoveOutcome::Removed(name) => {
                self.line(format!("Het product '{name}' is verwijderd."));
            }
            RemoveOutcome::NotFound(name) => {
                self.line(format!("Het product '{name}' is niet gevonden {location}."));
            }
            RemoveOutcome::Cleared(_) => self.success("Alle product(en) zijn verwijderd."),
            RemoveOutcome::Cancelled => self.error("Verwijdering geannuleerd."),
            RemoveOutcome::AlreadyEmpty => self.line(empty_message),
        }
    }

    pub(crate) fn recipe_details(&mut self, recipe: &Recipe) {
        self.line(format!("Recept: {}", recipe.label));
        self.line(format!("Maaltijdtype: {}", join_or_na(&recipe.meal_type)));
        self.line(format!("Gerechtsoort: {}", join_or_na(&recipe.dish_type)));
        self.line(format!("Keukentype: {}", join_or_na(&recipe.cuisine_type)));
        self.line(format!("Calorieën: {:.2}", recipe.calories));
        self.line(format!("URL: {}", recipe.url));
    }
}

/// Split comma separated ingredients, lower-cased, blanks dropped.
pub(crate) fn parse_ingredient_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

pub(crate) fn centered_title(title: &str) -> String {
    format!("{:^width$}", title.to_uppercase(), width = TITLE_WIDTH)
}

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() {
        "NVT".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Output sink that stays readable after the console takes ownership.
    #[derive(Clone, Default)]
    pub(crate) struct Transcript(Rc<RefCell<Vec<u8>>>);

    impl Transcript {
        pub(crate) fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for Transcript {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Console fed from `input`, plus a handle on everything it prints.
    pub(crate) fn scripted(input: &[u8]) -> (Console, Transcript) {
        let transcript = Transcript::default();
        let console = Console::new(
            Box::new(io::Cursor::new(input.to_vec())),
            Box::new(transcript.clone()),
        );
        (console, transcript)
    }

    #[test]
    fn test_parse_ingredient_list() {
        assert_eq!(
            parse_ingredient_list("Egg, milk ,FLOUR"),
            vec!["egg", "milk", "flour"]
        );
    }

    #[test]
    fn test_parse_ingredient_list_drops_blanks() {
        assert_eq!(parse_ingredient_list("egg,, ,milk,"), vec!["egg", "milk"]);
        assert!(parse_ingredient_list("").is_empty());
        assert!(parse_ingredient_list(" , ").is_empty());
    }

    #[test]
    fn test_centered_title() {
        let title = centered_title("Koelkast");
        assert_eq!(title.chars().count(), TITLE_WIDTH);
        assert_eq!(title.trim(), "KOELKAST");
    }

    #[test]
    fn test_centered_title_longer_than_width() {
        let long = "Voeg recept ingrediënten toe";
        assert_eq!(centered_title(long), long.to_uppercase());
    }

    #[test]
    fn test_join_or_na() {
        assert_eq!(join_or_na(&[]), "NVT");
        assert_eq!(
            join_or_na(&["lunch".to_string(), "dinner".to_string()]),
            "lunch, dinner"
        );
    }

    #[test]
    fn test_report_failure() {
        let (mut console, transcript) = scripted(b"");
        assert_eq!(console.report_failure(Ok(3), "unused"), Some(3));
        let failed: Result<u8> = Err(anyhow::anyhow!("connection refused"));
        assert_eq!(console.report_failure(failed, "Recipe lookup failed"), None);
        assert!(transcript.text().contains("Recipe lookup failed: connection refused"));
    }

    #[test]
    fn test_read_input_strips_line_ending() {
        let (mut console, _) = scripted(b"melk\r\nkaas");
        assert_eq!(console.read_input("> ").unwrap().as_deref(), Some("melk"));
        assert_eq!(console.read_input("> ").unwrap().as_deref(), Some("kaas"));
        assert_eq!(console.read_input("> ").unwrap(), None);
    }

    #[test]
    fn test_read_input_survives_invalid_utf8() {
        let (mut console, _) = scripted(b"\xff\xfe\n1\n");
        let garbled = console.read_input("> ").unwrap().unwrap();
        assert_eq!(garbled, "\u{fffd}\u{fffd}");
        assert_eq!(console.read_input("> ").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_confirm() {
        let (mut console, _) = scripted(b" JA \nnee\n");
        assert!(console.confirm("? "));
        assert!(!console.confirm("? "));
        assert!(!console.confirm("? "));
    }

    #[test]
    fn test_wait_for_back_reprompts_until_x() {
        let (mut console, transcript) = scripted(b"terug\nX\nnever read\n");
        console.wait_for_back().unwrap();
        assert_eq!(transcript.text().matches(INVALID_INPUT).count(), 1);
        assert_eq!(console.read_input("> ").unwrap().as_deref(), Some("never read"));
    }
}

use crate::application::{DatePicker, PickerApp, TextRenderer};
use crate::domain::{CalendarDate, DateRange, PickerEvent, Selection, SelectionMode};
use crate::infrastructure::{EventScriptParser, parse_range, parse_selection};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datepicker")]
#[command(about = "A calendar date picker driven from the terminal")]
#[command(version)]
pub struct Cli {
    /// Output format for the picker view
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a new picker session
    Init {
        /// Displayable dates (START..END, YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_range)]
        range: DateRange,
        /// Tighter bound on selectable dates (START..END)
        #[arg(short, long, value_parser = parse_range)]
        sub_range: Option<DateRange>,
        /// Selection mode: single or range (defaults to $DATEPICKER_MODE)
        #[arg(short, long)]
        mode: Option<SelectionMode>,
        /// Months visible at once (defaults to $DATEPICKER_WINDOW)
        #[arg(short, long)]
        window: Option<usize>,
        /// Initial selection (DATE or START..END)
        #[arg(long, value_parser = parse_selection)]
        selected: Option<Selection>,
        /// Date used as today when placing the window (defaults to today)
        #[arg(long)]
        today: Option<CalendarDate>,
    },
    /// Show the current window
    Show,
    /// Move the window back one month
    Prev,
    /// Move the window forward one month
    Next,
    /// Jump to January of a year inside the range
    Year { year: i32 },
    /// Click a date in the current window
    Click { date: CalendarDate },
    /// Apply an event script, one event per line
    Run { script: PathBuf },
    /// Clear the current selection
    Clear,
    /// Delete the saved session
    Reset,
}

impl Cli {
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();
        let app = PickerApp::new();

        let picker = match cli.command {
            Some(Commands::Init {
                range,
                sub_range,
                mode,
                window,
                selected,
                today,
            }) => {
                let mut options = app.default_options(range);
                options.sub_range = sub_range;
                if let Some(mode) = mode {
                    options.mode = mode;
                }
                if let Some(window) = window {
                    options.window_size = window;
                }
                let selection = selected.unwrap_or_default();
                let today = today.unwrap_or_else(CalendarDate::today);

                app.init(options, selection, today)?
            }
            Some(Commands::Show) | None => app.load()?,
            Some(Commands::Prev) => app.apply_events(&[PickerEvent::Previous])?,
            Some(Commands::Next) => app.apply_events(&[PickerEvent::Next])?,
            Some(Commands::Year { year }) => app.apply_events(&[PickerEvent::SelectYear(year)])?,
            Some(Commands::Click { date }) => app.apply_events(&[PickerEvent::ClickDate(date)])?,
            Some(Commands::Run { script }) => {
                let content = std::fs::read_to_string(&script)
                    .with_context(|| format!("Failed to read script {}", script.display()))?;
                let events = EventScriptParser::new().parse(&content)?;
                app.apply_events(&events)?
            }
            Some(Commands::Clear) => app.clear_selection()?,
            Some(Commands::Reset) => {
                app.reset()?;
                println!("Session removed from {}", app.config().session_path.display());
                return Ok(());
            }
        };

        print_view(&picker, cli.format)
    }
}

fn print_view(picker: &DatePicker, format: OutputFormat) -> anyhow::Result<()> {
    let view = picker.view();
    match format {
        OutputFormat::Text => TextRenderer::new().print(&view),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_init_arguments() {
        let cli = Cli::try_parse_from([
            "datepicker",
            "init",
            "--range",
            "2019-12-31..2020-12-31",
            "--mode",
            "range",
            "--selected",
            "2020-01-11..2020-01-15",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Commands::Init {
                range,
                mode,
                selected,
                window,
                ..
            }) => {
                assert_eq!(range.month_count(), 13);
                assert_eq!(mode, Some(SelectionMode::Range));
                assert!(matches!(selected, Some(Selection::Range(_))));
                assert_eq!(window, None);
            }
            _ => panic!("expected init"),
        }
    }

    #[test]
    fn rejects_reversed_range() {
        let result = Cli::try_parse_from(["datepicker", "init", "--range", "2020-12-31..2019-12-31"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_click_date() {
        let cli = Cli::try_parse_from(["datepicker", "click", "2020-03-31"]).unwrap();
        match cli.command {
            Some(Commands::Click { date }) => assert_eq!(date.to_string(), "2020-03-31"),
            _ => panic!("expected click"),
        }
    }

    #[test]
    fn reset_and_clear_are_distinct_commands() {
        let reset = Cli::try_parse_from(["datepicker", "reset"]).unwrap();
        assert!(matches!(reset.command, Some(Commands::Reset)));
        let clear = Cli::try_parse_from(["datepicker", "clear"]).unwrap();
        assert!(matches!(clear.command, Some(Commands::Clear)));
    }
}

use std::io::{BufRead, Write};

use crate::report;
use crate::view::{Renderer, View};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(String),
    Remove(String),
    Suggest(String),
    Pick(usize),
    Degree(String),
    UgCgpa(String),
    PgCgpa(String),
    RequirePg(bool),
    MinExp(String),
    Reset,
    Show(u64),
    Skills,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{command}` expects {expected}, got `{got}`")]
    InvalidArgument {
        command: &'static str,
        expected: &'static str,
        got: String,
    },
}

pub const HELP: &str = "\
Commands:
  add <skill>          filter by a skill (exact name)
  remove <skill>       drop a skill filter
  suggest <text>       list skills containing <text>
  pick <n>             add the n-th skill from the last suggestions
  degree <text|all>    undergraduate degree contains <text>
  ug-cgpa <value>      minimum undergraduate CGPA
  pg-cgpa <value>      minimum postgraduate CGPA
  require-pg on|off    only candidates with a postgraduate degree
  min-exp <n>          minimum number of experience entries
  reset                clear every filter
  show <id>            candidate details
  skills               list selected skills
  quit                 leave";

fn required<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name {
        "add" => Command::Add(required("add", rest)?.to_string()),
        "remove" | "rm" => Command::Remove(required("remove", rest)?.to_string()),
        "suggest" | "s" => Command::Suggest(required("suggest", rest)?.to_string()),
        "pick" => {
            let raw = required("pick", rest)?;
            match raw.parse::<usize>() {
                Ok(index) if index > 0 => Command::Pick(index),
                _ => {
                    return Err(CommandError::InvalidArgument {
                        command: "pick",
                        expected: "a suggestion number",
                        got: raw.to_string(),
                    })
                }
            }
        }
        "degree" => Command::Degree(required("degree", rest)?.to_string()),
        // Numeric filters accept any text; unusable values mean "no minimum".
        "ug-cgpa" => Command::UgCgpa(rest.to_string()),
        "pg-cgpa" => Command::PgCgpa(rest.to_string()),
        "min-exp" => Command::MinExp(rest.to_string()),
        "require-pg" => match required("require-pg", rest)? {
            "on" | "yes" | "true" => Command::RequirePg(true),
            "off" | "no" | "false" => Command::RequirePg(false),
            other => {
                return Err(CommandError::InvalidArgument {
                    command: "require-pg",
                    expected: "on or off",
                    got: other.to_string(),
                })
            }
        },
        "reset" => Command::Reset,
        "show" => {
            let raw = required("show", rest)?;
            let id = raw.parse::<u64>().map_err(|_| CommandError::InvalidArgument {
                command: "show",
                expected: "a candidate id",
                got: raw.to_string(),
            })?;
            Command::Show(id)
        }
        "skills" => Command::Skills,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(command)
}

fn selection_line<R: Renderer>(view: &View<R>) -> String {
    report::format_selection(view.selection().to_display_list())
}

/// Reads commands line by line until `quit` or end of input.
pub fn run<R, I, O>(view: &mut View<R>, input: I, mut output: O) -> anyhow::Result<()>
where
    R: Renderer,
    I: BufRead,
    O: Write,
{
    let mut last_suggestions: Vec<String> = Vec::new();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        tracing::trace!(?command, "session command");

        match command {
            Command::Add(skill) => {
                view.add_skill(&skill);
                writeln!(output, "{}", selection_line(view))?;
            }
            Command::Remove(skill) => {
                view.remove_skill(&skill);
                writeln!(output, "{}", selection_line(view))?;
            }
            Command::Suggest(query) => {
                let suggestions = view.suggestions(&query);
                write!(output, "{}", report::format_suggestions(&suggestions))?;
                last_suggestions = suggestions.into_iter().map(str::to_string).collect();
            }
            Command::Pick(index) => match last_suggestions.get(index - 1).cloned() {
                Some(skill) => {
                    last_suggestions.clear();
                    view.add_skill(&skill);
                    writeln!(output, "{}", selection_line(view))?;
                }
                None => writeln!(output, "No suggestion numbered {index}.")?,
            },
            Command::Degree(degree) => {
                view.set_ug_degree(&degree);
            }
            Command::UgCgpa(value) => {
                view.set_min_ug_cgpa(&value);
            }
            Command::PgCgpa(value) => {
                view.set_min_pg_cgpa(&value);
            }
            Command::RequirePg(flag) => {
                view.set_require_pg(flag);
            }
            Command::MinExp(value) => {
                view.set_min_exp(&value);
            }
            Command::Reset => {
                last_suggestions.clear();
                view.reset();
            }
            Command::Show(id) => match view.detail(id) {
                Some(record) => write!(output, "{}", report::format_detail(record))?,
                None => writeln!(output, "No candidate with id {id}.")?,
            },
            Command::Skills => {
                writeln!(output, "{}", selection_line(view))?;
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => break,
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::tests::{sample_dataset, RecordingRenderer};

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_command("add  Machine Learning "),
            Ok(Command::Add("Machine Learning".into()))
        );
        assert_eq!(parse_command("pick 2"), Ok(Command::Pick(2)));
        assert_eq!(parse_command("require-pg on"), Ok(Command::RequirePg(true)));
        assert_eq!(parse_command("ug-cgpa"), Ok(Command::UgCgpa(String::new())));
        assert_eq!(parse_command("show 42"), Ok(Command::Show(42)));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_command("add"), Err(CommandError::MissingArgument("add")));
        assert_eq!(
            parse_command("frobnicate"),
            Err(CommandError::Unknown("frobnicate".into()))
        );
        assert!(matches!(
            parse_command("pick 0"),
            Err(CommandError::InvalidArgument { command: "pick", .. })
        ));
        assert!(matches!(
            parse_command("require-pg maybe"),
            Err(CommandError::InvalidArgument { command: "require-pg", .. })
        ));
    }

    #[test]
    fn pick_adds_suggested_skill_and_rerenders() {
        let mut view = View::new(RecordingRenderer::default());
        view.install(sample_dataset());
        let input = b"suggest sql\npick 2\nskills\nquit\nadd Go\n" as &[u8];
        let mut output = Vec::new();

        run(&mut view, input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("  1. SQL\n  2. PostgreSQL\n"));
        assert!(text.contains("Selected skills: [PostgreSQL x]"));
        assert_eq!(view.selection().to_display_list(), ["PostgreSQL"]);
        assert_eq!(view.renderer().last(), Some(&(vec![3], 3)));
    }

    #[test]
    fn reset_and_missing_detail() {
        let mut view = View::new(RecordingRenderer::default());
        view.install(sample_dataset());
        let input = b"add Go\nmin-exp 1\nshow 99\nreset\n" as &[u8];
        let mut output = Vec::new();

        run(&mut view, input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("No candidate with id 99."));
        assert!(view.selection().is_empty());
        assert_eq!(view.renderer().last(), Some(&(vec![1, 2, 3], 3)));
    }
}

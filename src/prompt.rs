//! Interactive menu shown when no input folder is given on the command line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::output::DEFAULT_OUTPUT_FILE;

/// A root to render and the file to write it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    pub root: PathBuf,
    pub output: PathBuf,
}

impl RenderTarget {
    /// Render `root` into `structure.md` inside it.
    pub fn for_folder(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let output = root.join(DEFAULT_OUTPUT_FILE);
        Self { root, output }
    }

    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
        }
    }

    /// The current directory rendered into `./structure.md`.
    pub fn current_dir() -> Self {
        Self::new(".", DEFAULT_OUTPUT_FILE)
    }
}

const MENU: &str = "\
Choose an option to generate the tree structure:
1. Generate the tree structure of the current directory and output to structure.md in the current directory.
2. Generate the tree structure of the specified directory and output to structure.md in the specified directory.
3. Generate the tree structure of the specified directory and output to the specified file.
";

/// Print the menu to `out` and read the answer(s) from `input`.
///
/// Returns `Ok(None)` when the choice is not one of the three options;
/// end of input counts as an invalid choice.
pub fn run_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<RenderTarget>> {
    write!(out, "{}", MENU)?;

    let choice = ask(input, out, "Enter the number of your choice: ")?;
    let target = match choice.as_str() {
        "1" => RenderTarget::current_dir(),
        "2" => {
            let folder = ask(input, out, "Enter the path to the directory: ")?;
            RenderTarget::for_folder(folder)
        }
        "3" => {
            let folder = ask(input, out, "Enter the path to the directory: ")?;
            let output = ask(input, out, "Enter the path to the output file: ")?;
            RenderTarget::new(folder, output)
        }
        _ => return Ok(None),
    };

    Ok(Some(target))
}

/// Show `question`, then read one trimmed line.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<String> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn answer(script: &str) -> (Option<RenderTarget>, String) {
        let mut input = Cursor::new(script.as_bytes());
        let mut out = Vec::new();
        let target = run_menu(&mut input, &mut out).unwrap();
        (target, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_choice_current_dir() {
        let (target, shown) = answer("1\n");
        assert_eq!(target, Some(RenderTarget::new(".", "structure.md")));
        assert!(shown.starts_with("Choose an option"));
        assert!(shown.ends_with("Enter the number of your choice: "));
    }

    #[test]
    fn test_choice_folder_defaults_output() {
        let (target, shown) = answer("2\n  projects/app  \n");
        assert_eq!(
            target,
            Some(RenderTarget::new("projects/app", "projects/app/structure.md"))
        );
        assert!(shown.contains("Enter the path to the directory: "));
    }

    #[test]
    fn test_choice_folder_and_output() {
        let (target, _) = answer(" 3 \nsrc\nout/tree.md\n");
        assert_eq!(target, Some(RenderTarget::new("src", "out/tree.md")));
    }

    #[test]
    fn test_invalid_choice() {
        assert_eq!(answer("4\n").0, None);
        assert_eq!(answer("one\n").0, None);
        assert_eq!(answer("").0, None);
    }
}

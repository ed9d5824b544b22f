use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const ACCEPTED: &[&str] = &["Y", "y"];

pub fn confirm(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    writeln!(output, "{prompt}").context("プロンプトを書き込めませんでした")?;
    output.flush().context("プロンプトを書き込めませんでした")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("応答を読み取れませんでした")?;

    let response = line.trim();
    Ok(ACCEPTED.contains(&response))
}

pub fn confirm_stdin(prompt: &str) -> Result<bool> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    confirm(prompt, &mut stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(response: &str) -> bool {
        let mut input = response.as_bytes();
        let mut output = Vec::new();
        confirm("実行しますか? Y or N", &mut input, &mut output).expect("confirm should succeed")
    }

    #[test]
    fn accepts_upper_and_lower_y() {
        assert!(run("Y\n"));
        assert!(run("y\n"));
    }

    #[test]
    fn accepts_after_trimming_whitespace() {
        assert!(run("  y  \n"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!run("N\n"));
        assert!(!run("n\n"));
        assert!(!run("yes\n"));
        assert!(!run("\n"));
        assert!(!run("garbage\n"));
    }

    #[test]
    fn rejects_on_eof() {
        assert!(!run(""));
    }

    #[test]
    fn writes_prompt_to_output() {
        let mut input = "Y\n".as_bytes();
        let mut output = Vec::new();
        confirm("本当に実行しますか?", &mut input, &mut output).expect("confirm should succeed");
        let written = String::from_utf8(output).expect("utf8 prompt");
        assert!(written.contains("本当に実行しますか?"));
    }
}

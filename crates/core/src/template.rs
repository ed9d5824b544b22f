use thiserror::Error;

pub const MARKER: char = '!';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("テンプレートが空です")]
    Empty,
    #[error("テンプレートに連番マーカー '!' が含まれていません")]
    MissingMarker,
}

pub fn validate_template(input: &str) -> Result<(), TemplateError> {
    if input.is_empty() {
        return Err(TemplateError::Empty);
    }
    if !input.contains(MARKER) {
        return Err(TemplateError::MissingMarker);
    }
    Ok(())
}

pub fn expand(template: &str, index: usize) -> String {
    let digits = index.to_string();
    let mut output = String::with_capacity(template.len() + digits.len());
    for ch in template.chars() {
        if ch == MARKER {
            output.push_str(&digits);
        } else {
            output.push(ch);
        }
    }
    output
}

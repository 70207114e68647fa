use eyre::{Result, eyre};
use log::{debug, info};
use tectonic::latex_to_pdf;

use crate::utils::misc::strip_non_ascii;

static TEMPLATE: &str = include_str!("template.tex");

/// A plain-text report typeset as a single-column PDF.
pub struct PdfReport {
    title: String,
    text: String,
}

impl PdfReport {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// LaTeX source for the report. Characters outside ASCII are dropped.
    pub fn assemble(&self) -> String {
        TEMPLATE
            .replace("<<TITLE>>", &Self::escape_latex(strip_non_ascii(&self.title).trim()))
            .replace("<<BODY>>", &Self::body(&strip_non_ascii(&self.text)))
    }

    pub async fn render(&self) -> Result<Vec<u8>> {
        let latex = self.assemble();
        debug!("report LaTeX length: {} characters", latex.len());

        info!("compiling LaTeX to PDF");
        let pdf = tokio::task::spawn_blocking(move || latex_to_pdf(latex))
            .await?
            .map_err(|e| eyre!("failed to compile LaTeX document: {}", e))?;

        info!("LaTeX compilation successful");
        Ok(pdf)
    }

    fn body(text: &str) -> String {
        let mut out = String::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                out.push('\n');
                continue;
            }

            let heading = line.trim_start_matches('#');
            if heading.len() < line.len() {
                out.push_str(&format!(
                    "\\textbf{{{}}}\\par\n",
                    Self::escape_latex(heading.trim())
                ));
            } else {
                out.push_str(&format!("{}\\par\n", Self::escape_latex(line)));
            }
        }

        out
    }

    fn escape_latex(text: &str) -> String {
        let mut result = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '*' && chars.peek() == Some(&'*') {
                chars.next();
                let mut bold_text = String::new();
                let mut found_end = false;

                while let Some(bc) = chars.next() {
                    if bc == '*' && chars.peek() == Some(&'*') {
                        chars.next();
                        found_end = true;
                        break;
                    }
                    bold_text.push(bc);
                }

                if found_end {
                    result.push_str(&format!("\\textbf{{{}}}", Self::escape_latex(&bold_text)));
                } else {
                    result.push_str("**");
                    result.push_str(&Self::escape_latex(&bold_text));
                }
            } else if c == '`' {
                let mut code = String::new();
                let mut found_end = false;

                for cc in chars.by_ref() {
                    if cc == '`' {
                        found_end = true;
                        break;
                    }
                    code.push(cc);
                }

                if found_end {
                    result.push_str(&format!("\\texttt{{{}}}", Self::escape_latex(&code)));
                } else {
                    result.push_str("\\textasciigrave{}");
                    result.push_str(&Self::escape_latex(&code));
                }
            } else {
                result.push_str(&match c {
                    '&' => "\\&".to_string(),
                    '%' => "\\%".to_string(),
                    '$' => "\\$".to_string(),
                    '#' => "\\#".to_string(),
                    '_' => "\\_".to_string(),
                    '{' => "\\{".to_string(),
                    '}' => "\\}".to_string(),
                    '^' => "\\textasciicircum{}".to_string(),
                    '~' => "\\textasciitilde{}".to_string(),
                    '\\' => "\\textbackslash{}".to_string(),
                    '<' => "\\textless{}".to_string(),
                    '>' => "\\textgreater{}".to_string(),
                    _ => c.to_string(),
                });
            }
        }

        result
    }
}

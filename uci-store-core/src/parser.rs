use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::tree::{UciDocument, UciSection};

/// Errors that can occur while parsing UCI text into a [`UciDocument`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read input file.
    #[error("failed to read UCI file: {0}")]
    Io(#[from] std::io::Error),
    /// Structural issue in the UCI document.
    #[error("malformed UCI at line {line}: {message}")]
    Malformed { line: usize, message: String },
}

/// Parse UCI text into a [`UciDocument`].
pub fn parse(input: &str) -> Result<UciDocument, ParseError> {
    let mut doc = UciDocument::new();
    let mut current: Option<UciSection> = None;

    for (idx, raw_line) in input.lines().enumerate() {
        let line = idx + 1;
        let tokens = tokenize(raw_line, line)?;
        let Some(keyword) = tokens.first() else {
            continue;
        };

        match keyword.as_str() {
            // Not retained in the document; the writer does not re-emit it.
            "package" => {}
            "config" => {
                if let Some(section) = current.take() {
                    doc.sections.push(section);
                }
                let section_type = tokens.get(1).ok_or_else(|| ParseError::Malformed {
                    line,
                    message: "config line is missing a section type".to_string(),
                })?;
                if tokens.len() > 3 {
                    return Err(ParseError::Malformed {
                        line,
                        message: "config line has trailing tokens".to_string(),
                    });
                }
                current = Some(match tokens.get(2) {
                    Some(name) => UciSection::named(section_type, name),
                    None => UciSection::anonymous(section_type),
                });
            }
            "option" | "list" => {
                let section = current.as_mut().ok_or_else(|| ParseError::Malformed {
                    line,
                    message: format!("'{keyword}' outside of a config section"),
                })?;
                let key = tokens.get(1).ok_or_else(|| ParseError::Malformed {
                    line,
                    message: format!("'{keyword}' line is missing a key"),
                })?;
                let value = tokens.get(2).cloned().unwrap_or_default();
                if keyword == "option" {
                    section.set_option(key, value);
                } else {
                    section.push_list(key, value);
                }
            }
            other => {
                return Err(ParseError::Malformed {
                    line,
                    message: format!("unknown keyword '{other}'"),
                });
            }
        }
    }

    if let Some(section) = current.take() {
        doc.sections.push(section);
    }

    Ok(doc)
}

/// Parse a UCI file into a [`UciDocument`].
pub fn parse_file(path: &Path) -> Result<UciDocument, ParseError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Split one line into tokens, honoring single/double quoting, adjacent
/// quoted segments (`'a'\''b'`), backslash escapes, and `#` comments.
fn tokenize(line: &str, line_no: usize) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }
        match chars.peek() {
            None | Some('#') => break,
            Some(_) => {}
        }

        let mut token = String::new();
        while let Some(&ch) = chars.peek() {
            if ch.is_whitespace() {
                break;
            }
            if ch == '\'' || ch == '"' {
                let quote = ch;
                chars.next();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == quote {
                        closed = true;
                        break;
                    }
                    token.push(inner);
                }
                if !closed {
                    return Err(ParseError::Malformed {
                        line: line_no,
                        message: "unterminated quoted value".to_string(),
                    });
                }
            } else if ch == '\\' {
                chars.next();
                if let Some(escaped) = chars.next() {
                    token.push(escaped);
                }
            } else {
                token.push(ch);
                chars.next();
            }
        }
        tokens.push(token);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{parse, ParseError};

    #[test]
    fn parses_named_and_anonymous_sections() {
        let doc = parse(
            "config interface 'lan'\n\toption ifname 'eth0 eth1'\n\n\
             config rule\n\toption name 'Allow-Ping'\n\tlist src_ip '10.0.0.1'\n",
        )
        .expect("parse");

        assert_eq!(doc.sections.len(), 2);
        let lan = doc.get("lan").expect("lan");
        assert_eq!(lan.section_type, "interface");
        assert_eq!(lan.option("ifname"), Some("eth0 eth1"));

        let rule = &doc.sections[1];
        assert_eq!(rule.name, None);
        assert_eq!(rule.lists["src_ip"], vec!["10.0.0.1"]);
    }

    #[test]
    fn handles_quoting_variants_and_comments() {
        let doc = parse(
            "# leading comment\n\
             config interface \"wan\"\n\
             \toption proto dhcp\n\
             \toption note 'it'\\''s quoted'\n",
        )
        .expect("parse");

        let wan = doc.get("wan").expect("wan");
        assert_eq!(wan.option("proto"), Some("dhcp"));
        assert_eq!(wan.option("note"), Some("it's quoted"));
    }

    #[test]
    fn ignores_package_lines_and_blank_lines() {
        let doc = parse("package network\n\nconfig device\n\toption mtu '1500'\n").expect("parse");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].option("mtu"), Some("1500"));
    }

    #[test]
    fn rejects_option_outside_section() {
        let err = parse("option proto 'dhcp'\n").expect_err("must fail");
        match err {
            ParseError::Malformed { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unterminated_quote() {
        let err = parse("config interface 'lan\n").expect_err("must fail");
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn rejects_unknown_keyword() {
        let err = parse("configure interface 'lan'\n").expect_err("must fail");
        assert!(err.to_string().contains("unknown keyword"));
    }
}

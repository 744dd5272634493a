//! Minimal HTML rendering for the practice pages.
//!
//! Two pages: the practice form (sentence, selectors, playback) and the
//! check result (reference, transcript, score or error message). No template
//! engine; the markup is small enough to build directly.

use parlo_catalog::{Language, Level};

/// Escape text for safe interpolation into HTML.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn selected(current: bool) -> &'static str {
    if current {
        " selected"
    } else {
        ""
    }
}

/// The practice page: current sentence, selectors, playback, actions.
pub fn practice_page(
    sentence: &str,
    language: Language,
    level: Level,
    timestamp: u64,
    error: Option<&str>,
) -> String {
    let language_options: String = Language::ALL
        .iter()
        .map(|l| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                l.code(),
                selected(*l == language),
                l.name()
            )
        })
        .collect();

    let level_options: String = Level::ALL
        .iter()
        .map(|l| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                l.code(),
                selected(*l == level),
                l.code()
            )
        })
        .collect();

    let error_banner = match error {
        Some(msg) => format!("<p class=\"error\">{}</p>", escape(msg)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Parlo</title>
</head>
<body>
<h1>Parlo</h1>
{error_banner}
<p class="sentence">{sentence}</p>
<audio controls src="/static/output.mp3?ts={timestamp}"></audio>
<form method="post" action="/">
  <select name="language" onchange="this.form.submit()">{language_options}</select>
  <select name="level" onchange="this.form.submit()">{level_options}</select>
  <button name="repeat" value="1">Repeat</button>
  <button name="next" value="1">Next sentence</button>
</form>
<form method="post" action="/check">
  <button>Check my pronunciation</button>
</form>
</body>
</html>
"#,
        error_banner = error_banner,
        sentence = escape(sentence),
        timestamp = timestamp,
        language_options = language_options,
        level_options = level_options,
    )
}

/// The check result page with reference, transcript, and score.
pub fn result_page(sentence: &str, transcript: &str, score: u8) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Parlo - Result</title>
</head>
<body>
<h1>Result</h1>
<p>Reference: {sentence}</p>
<p>You said: {transcript}</p>
<p class="score">Score: {score}%</p>
<a href="/">Back to practice</a>
</body>
</html>
"#,
        sentence = escape(sentence),
        transcript = escape(transcript),
        score = score,
    )
}

/// The check result page for a failed recognition attempt.
pub fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Parlo - Result</title>
</head>
<body>
<h1>Result</h1>
<p class="error">{message}</p>
<a href="/">Back to practice</a>
</body>
</html>
"#,
        message = escape(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_html_specials() {
        assert_eq!(
            escape(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("Hallo, wie geht es dir?"), "Hallo, wie geht es dir?");
    }

    #[test]
    fn test_practice_page_marks_selection() {
        let html = practice_page("Bonjour", Language::Fr, Level::Mittel, 42, None);
        assert!(html.contains("<option value=\"fr\" selected>"));
        assert!(html.contains("<option value=\"mittel\" selected>"));
        assert!(html.contains("output.mp3?ts=42"));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_practice_page_shows_error_banner() {
        let html = practice_page("x", Language::De, Level::Leicht, 0, Some("no audio"));
        assert!(html.contains("<p class=\"error\">no audio</p>"));
    }

    #[test]
    fn test_result_page_escapes_transcript() {
        let html = result_page("ref", "<script>", 55);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Score: 55%"));
    }
}

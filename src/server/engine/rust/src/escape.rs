/* src/server/engine/rust/src/escape.rs */

/// Escape text for use inside HTML attribute values and text nodes.
pub fn escape_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}

/// Escape text for XML character data and attribute values.
pub fn escape_xml(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&apos;"),
      _ => out.push(ch),
    }
  }
  out
}

/// Make serialized JSON safe to embed in a `<script>` element.
///
/// Walks the JSON text tracking whether the current position is inside a
/// JSON string (handling `\"` and `\\` correctly). Inside strings, `<`, `>`
/// and `&` become `\u003c`, `\u003e`, `\u0026` so `</script>` cannot close
/// the element early, and U+2028/U+2029 are escaped for older JS parsers.
pub fn escape_json_for_script(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  let mut in_string = false;
  let mut chars = json.chars();

  while let Some(ch) = chars.next() {
    if !in_string {
      if ch == '"' {
        in_string = true;
      }
      out.push(ch);
      continue;
    }
    match ch {
      '\\' => {
        // Escaped character -- push both and skip next
        out.push(ch);
        if let Some(next) = chars.next() {
          out.push(next);
        }
      }
      '"' => {
        in_string = false;
        out.push(ch);
      }
      '<' | '>' | '&' | '\u{2028}' | '\u{2029}' => {
        out.push_str(&format!("\\u{:04x}", ch as u32));
      }
      _ => out.push(ch),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn html_escapes_markup() {
    assert_eq!(
      escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
      "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
  }

  #[test]
  fn html_passthrough_non_ascii() {
    assert_eq!(escape_html("Ceviz ağacı tepsi"), "Ceviz ağacı tepsi");
  }

  #[test]
  fn xml_uses_apos() {
    assert_eq!(escape_xml("a'b&c"), "a&apos;b&amp;c");
  }

  #[test]
  fn json_script_escapes_closing_tag() {
    let input = r#"{"name":"</script><script>alert(1)</script>"}"#;
    let out = escape_json_for_script(input);
    assert!(!out.contains("</script>"));
    assert_eq!(
      out,
      r#"{"name":"\u003c/script\u003e\u003cscript\u003ealert(1)\u003c/script\u003e"}"#
    );
  }

  #[test]
  fn json_script_preserves_existing_escapes() {
    let input = r#"{"a":"say \"hi\"","b":"line\nbreak"}"#;
    assert_eq!(escape_json_for_script(input), input);
  }

  #[test]
  fn json_script_escapes_ampersand_and_separators() {
    let input = "{\"a\":\"x & y\u{2028}\"}";
    assert_eq!(escape_json_for_script(input), r#"{"a":"x \u0026 y\u2028"}"#);
  }

  #[test]
  fn json_script_leaves_structure_alone() {
    assert_eq!(escape_json_for_script(r#"{"n":[1,2]}"#), r#"{"n":[1,2]}"#);
    assert_eq!(escape_json_for_script("{}"), "{}");
  }
}

//! Landing page served on `GET /`
//!
//! The inline script re-POSTs to whatever path served the page and shows the
//! returned blob as an image.

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>QR Code Generator</title>
</head>
<body>
<input type="text" id="text" value="{{default_text}}"></input>
<button onclick='generate()'>Generate QR Code</button>
<img id="qr"></img>
<script>
  function generate() {
    fetch(window.location.pathname, {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ text: document.querySelector("#text").value })
    })
    .then(response => response.blob())
    .then(blob => {
      const reader = new FileReader();
      reader.onloadend = function () {
        document.querySelector("#qr").src = reader.result;
      }
      reader.readAsDataURL(blob);
    })
  }
</script>
</body>
</html>
"##;

/// Render the page with `default_text` pre-filled in the input
pub fn render(default_text: &str) -> String {
    TEMPLATE.replace("{{default_text}}", &escape_attribute(default_text))
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefills_default_text() {
        let html = render("https://vnl.pages.dev/");
        assert!(html.contains(r#"value="https://vnl.pages.dev/""#));
        assert!(!html.contains("{{default_text}}"));
    }

    #[test]
    fn test_posts_to_current_path() {
        let html = render("x");
        assert!(html.contains("fetch(window.location.pathname"));
        assert!(html.contains(r#"method: "POST""#));
        assert!(html.contains("readAsDataURL(blob)"));
    }

    #[test]
    fn test_script_selects_input_and_image() {
        let html = render("x");
        assert!(html.contains(r##"document.querySelector("#text").value"##));
        assert!(html.contains(r##"document.querySelector("#qr").src = reader.result"##));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_escapes_attribute() {
        let html = render(r#""><script>alert(1)</script>"#);
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains("\"><script>alert"));
    }
}

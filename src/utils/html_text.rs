//! Readable text rendition of the HTML fragments the server sends back with
//! a rejected upload. egui has no HTML view, so rows become lines and table
//! cells are separated with `|`.

const BLOCK_TAGS: [&str; 13] = [
    "tr", "p", "div", "li", "table", "thead", "tbody", "h1", "h2", "h3", "h4", "h5", "h6",
];

pub fn to_plain_text(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some(start) = rest.find('<') {
        push_text(&rest[..start], &mut out);
        let after = &rest[start + 1..];
        let Some(end) = after.find('>') else {
            push_text(&rest[start..], &mut out);
            rest = "";
            break;
        };
        push_tag(&after[..end], &mut out);
        rest = &after[end + 1..];
    }
    push_text(rest, &mut out);

    decode_entities(&out)
        .lines()
        .map(|line| line.trim().trim_end_matches('|').trim_end())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_text(text: &str, out: &mut String) {
    let mut last_was_space = out.ends_with(' ');
    for c in text.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
}

fn push_tag(tag: &str, out: &mut String) {
    let closing = tag.starts_with('/');
    let name = tag
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    match name.as_str() {
        "br" => out.push('\n'),
        "td" | "th" if closing => out.push_str(" | "),
        name if closing && BLOCK_TAGS.contains(&name) => out.push('\n'),
        _ => {}
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

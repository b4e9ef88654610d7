//! String normalisation shared by the section builders.

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest. Any non-letter starts a new word, so `DROP-OFF` becomes `Drop-Off`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// `NIGHT DROP SERVICE` -> `Night Drop service`.
///
/// The `Service` rewrite is a plain substring replacement applied after title
/// casing, so it also touches words such as `Serviced` -> `serviced`.
pub fn format_transportation_name(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    title_case(&collapsed).replace("Service", "service")
}

/// Removes the longest run of leading spaces/tabs shared by every non-blank
/// line. Lines holding only spaces/tabs become empty and are ignored when
/// computing the margin.
pub fn dedent(text: &str) -> String {
    let is_blank = |line: &str| line.chars().all(|c| c == ' ' || c == '\t');

    let mut margin: Option<&str> = None;
    for line in text.split('\n').filter(|line| !is_blank(line)) {
        let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
        let indent = &line[..indent_len];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }
    let margin = margin.unwrap_or("");

    text.split('\n')
        .map(|line| {
            if is_blank(line) {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// Trim, dedent, trim: accidental indentation goes, internal line breaks
/// stay.
pub fn normalize_text(text: &str) -> String {
    dedent(text.trim()).trim().to_string()
}

/// Joins lines with `\n`, drops trailing whitespace and ends the block with
/// exactly one newline.
pub fn finish_block<S: AsRef<str>>(lines: &[S]) -> String {
    let joined = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");
    let mut block = joined.trim_end().to_string();
    block.push('\n');
    block
}
